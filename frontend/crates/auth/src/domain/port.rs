//! Collaborator Traits
//!
//! Boundaries the controller talks through. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::session::Session;
use crate::domain::value_object::{
    auth_outcome::AuthOutcome,
    credentials::Credentials,
    navigation_target::{NavigationTarget, PriorDestination},
};
use crate::error::AuthResult;

/// Remote authentication API
///
/// Each call is a single request/response round trip: no retries, no caching.
#[trait_variant::make(AuthApi: Send)]
pub trait LocalAuthApi {
    /// `POST /api/auth/signin`
    async fn sign_in(&self, credentials: &Credentials, remember_me: bool) -> AuthOutcome;

    /// `POST /api/auth/signup`
    async fn sign_up(&self, credentials: &Credentials, remember_me: bool) -> AuthOutcome;

    /// `GET /api/users/me`; `None` when anonymous
    async fn current_user(&self) -> AuthResult<Option<Session>>;
}

/// Router service
///
/// Owns the prior-destination record: it is captured here before an
/// auth-gated redirect and consumed at most once per login.
pub trait Navigator: Send + Sync {
    /// Navigate to the default home destination
    fn go_home(&self);

    /// Navigate to a named destination with its parameters
    fn go_to(&self, destination: &PriorDestination);

    /// Leave the application (e.g. OAuth provider)
    fn go_external(&self, url: &str);

    /// Peek at the remembered prior destination
    fn previous_destination(&self) -> Option<PriorDestination>;

    /// Take the remembered prior destination, clearing it
    fn take_previous_destination(&self) -> Option<PriorDestination>;

    /// Error carried in the current location (`?err=...`), if any
    fn location_error(&self) -> Option<String> {
        None
    }

    fn navigate(&self, target: &NavigationTarget) {
        match target {
            NavigationTarget::Prior(destination) => self.go_to(destination),
            NavigationTarget::Home => self.go_home(),
        }
    }
}
