//! Session store errors.

use thiserror::Error;

/// Errors raised while loading or persisting session state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the session file failed.
    #[error("session storage error")]
    Io(#[from] std::io::Error),

    /// The persisted session file could not be parsed.
    #[error("corrupt session file")]
    Corrupt(#[from] serde_json::Error),
}
