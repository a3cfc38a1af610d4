//! Bootstrap Session Use Case
//!
//! Populates the session store from `/api/users/me` at page load.

use std::sync::Arc;

use crate::domain::entity::session::Session;
use crate::domain::port::AuthApi;
use crate::domain::session_store::SessionStore;
use crate::error::AuthResult;

/// Bootstrap session use case
pub struct BootstrapSessionUseCase<A>
where
    A: AuthApi,
{
    api: Arc<A>,
    store: SessionStore,
}

impl<A> BootstrapSessionUseCase<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// Fetch the current user and store it
    ///
    /// An anonymous response clears the store. On error the store is left
    /// as it was.
    pub async fn execute(&self) -> AuthResult<Option<Session>> {
        let current = self.api.current_user().await?;

        match &current {
            Some(session) => {
                tracing::info!(username = %session.username, "Session bootstrapped");
                self.store.set(session.clone());
            }
            None => {
                tracing::debug!("No current session");
                self.store.clear();
            }
        }

        Ok(current)
    }
}
