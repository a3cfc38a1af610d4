//! Domain Layer
//!
//! Contains entities, value objects, collaborator traits and the session store.

pub mod entity;
pub mod port;
pub mod session_store;
pub mod value_object;

// Re-exports
pub use entity::session::Session;
pub use port::{AuthApi, Navigator};
pub use session_store::SessionStore;
pub use value_object::{
    auth_outcome::AuthOutcome,
    credentials::Credentials,
    navigation_target::{NavigationTarget, PriorDestination},
};
