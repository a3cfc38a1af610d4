//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session, credentials, navigation targets, collaborator traits
//! - `application/` - Controller state machine, bootstrap use case, config
//! - `infra/` - reqwest API client, in-memory navigator
//! - `presentation/` - Wire DTOs and view snapshot
//!
//! ## Flow
//! 1. `BootstrapSessionUseCase` fills the `SessionStore` from `/api/users/me`
//! 2. `AuthController::new` bounces an already signed-in user home
//! 3. `sign_in`/`sign_up` call the API, store the session or the error message,
//!    then navigate to the remembered destination (or home)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{AuthController, BootstrapSessionUseCase, ClientConfig, ControllerState};
pub use domain::{
    AuthApi, AuthOutcome, Credentials, NavigationTarget, Navigator, PriorDestination, Session,
    SessionStore,
};
pub use error::{AuthError, AuthResult};
pub use infra::{http::HttpAuthApi, memory::MemoryNavigator};
pub use presentation::view::AuthView;

// Re-export kernel error kind for unified error handling
pub use kernel::error::kind::ErrorKind;
