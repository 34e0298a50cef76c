//! Session models.

use serde::{Deserialize, Serialize};

/// The authenticated account identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend account identifier.
    pub account_id: i64,

    /// Account email address.
    pub email: String,

    /// Display name shown in the UI.
    pub display_name: String,
}

/// Everything persisted for an established session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Bearer credential attached to every outbound call.
    pub access_token: String,

    /// Optional refresh credential.
    pub refresh_token: Option<String>,

    /// The authenticated identity.
    pub identity: Identity,
}
