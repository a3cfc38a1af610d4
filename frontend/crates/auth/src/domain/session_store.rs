//! Session Store
//!
//! Process-wide holder of the current authenticated user. Filled once per
//! page load by the bootstrap use case, then updated by the controller after
//! a successful sign-in/sign-up. Cloning yields another handle to the same
//! session.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::entity::session::Session;

/// Shared handle to the current session (or none, meaning logged out)
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Create an empty (anonymous) store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a session
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.username.clone())
    }

    /// Replace the current session
    pub fn set(&self, session: Session) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Forget the current session (local sign-out), returning it
    pub fn clear(&self) -> Option<Session> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_anonymous() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.current(), None);
        assert_eq!(store.username(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let handle = store.clone();

        handle.set(Session::new("Fred", ["user"]));

        assert!(store.is_authenticated());
        assert_eq!(store.username().as_deref(), Some("Fred"));
    }

    #[test]
    fn test_clear_returns_previous_session() {
        let store = SessionStore::with_session(Session::new("test", ["user"]));

        let previous = store.clear().unwrap();

        assert_eq!(previous.username, "test");
        assert!(!store.is_authenticated());
        assert_eq!(store.clear(), None);
    }
}
