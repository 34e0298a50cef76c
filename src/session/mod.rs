//! Account session: authenticated identity, bearer credentials, persistence.

pub mod errors;
pub mod models;
pub mod store;

pub use errors::SessionError;
pub use models::{AuthState, Identity};
pub use store::SessionStore;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle to the current session.
///
/// Read by every outbound call to attach the bearer credential; mutated
/// only by login and logout. Cloning is cheap and all clones observe the
/// same state.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    state: Arc<RwLock<Option<AuthState>>>,
}

impl SessionHandle {
    /// Create an unauthenticated handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle from a previously persisted state, if any.
    #[must_use]
    pub fn from_state(state: Option<AuthState>) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Whether a session is currently established.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// The bearer token to attach to outbound calls, when present.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.access_token.clone())
    }

    /// The authenticated identity, when present.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.read().as_ref().map(|s| s.identity.clone())
    }

    /// Establish a session.
    pub fn login(&self, state: AuthState) {
        *self.write() = Some(state);
    }

    /// Tear the session down.
    pub fn logout(&self) {
        *self.write() = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<AuthState>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<AuthState>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
