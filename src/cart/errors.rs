//! Cart view errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors raised by the cart aggregate view.
#[derive(Debug, Error)]
pub enum CartViewError {
    /// No session is established; the caller should redirect to the
    /// authentication entry point carrying the reason tag.
    #[error("not authenticated (reason: {reason})")]
    NotAuthenticated {
        /// Reason tag for the authentication redirect.
        reason: &'static str,
    },

    /// The referenced line is not in the cart.
    #[error("cart line {0} not found")]
    UnknownLine(i64),

    /// A backend call failed; local state was left unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),
}
