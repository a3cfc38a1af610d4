//! Authentication Controller
//!
//! Drives sign-in/sign-up for the login page and decides where the user goes
//! afterwards.
//!
//! ## State machine
//! - `Anonymous --sign_in/sign_up--> Pending`
//! - `Pending --Success--> Authenticated` (store session, clear error, navigate)
//! - `Pending --Failure--> Anonymous` (set error, session untouched, stay put)
//! - `Pending --Failure--> Authenticated` when a session was already stored;
//!   a failed attempt never drops the existing session
//! - constructed with a session already stored: `Authenticated`, navigate home
//!
//! Failures never escape the controller; they become its `error` field.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use derive_more::Display;
use reqwest::Url;
use serde::Serialize;

use crate::application::config::ClientConfig;
use crate::domain::port::{AuthApi, Navigator};
use crate::domain::session_store::SessionStore;
use crate::domain::value_object::{
    auth_outcome::AuthOutcome, credentials::Credentials, navigation_target::NavigationTarget,
};
use crate::error::{AuthError, AuthResult};
use crate::presentation::view::AuthView;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    /// No session, no request in flight
    #[display("anonymous")]
    Anonymous,
    /// Sign-in or sign-up request in flight
    #[display("pending")]
    Pending,
    /// Session present
    #[display("authenticated")]
    Authenticated,
}

#[derive(Debug, Clone, Copy, Display)]
enum AuthAction {
    #[display("sign_in")]
    SignIn,
    #[display("sign_up")]
    SignUp,
}

#[derive(Debug)]
struct ControllerInner {
    state: ControllerState,
    error: Option<String>,
}

/// Authentication controller
pub struct AuthController<A, N>
where
    A: AuthApi,
    N: Navigator,
{
    api: Arc<A>,
    navigator: Arc<N>,
    store: SessionStore,
    config: Arc<ClientConfig>,
    inner: Mutex<ControllerInner>,
}

impl<A, N> AuthController<A, N>
where
    A: AuthApi,
    N: Navigator,
{
    /// Create the controller
    ///
    /// If the store already holds a session the user is bounced home right
    /// away, without any request.
    pub fn new(
        api: Arc<A>,
        store: SessionStore,
        navigator: Arc<N>,
        config: Arc<ClientConfig>,
    ) -> Self {
        let error = navigator.location_error();
        let state = if let Some(username) = store.username() {
            tracing::info!(username = %username, "Already signed in, redirecting home");
            navigator.go_home();
            ControllerState::Authenticated
        } else {
            ControllerState::Anonymous
        };

        Self {
            api,
            navigator,
            store,
            config,
            inner: Mutex::new(ControllerInner { state, error }),
        }
    }

    pub fn state(&self) -> ControllerState {
        self.lock().state
    }

    /// Message from the last failed attempt
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Snapshot for the presentation layer
    pub fn view(&self) -> AuthView {
        let inner = self.lock();
        AuthView {
            state: inner.state,
            error: inner.error.clone(),
            user: self.store.current(),
        }
    }

    /// Sign in with the given credentials
    ///
    /// Credentials are forwarded as-is; the API rejects malformed input.
    pub async fn sign_in(&self, credentials: &Credentials, remember_me: bool) -> ControllerState {
        self.begin(AuthAction::SignIn, credentials);
        let outcome = self.api.sign_in(credentials, remember_me).await;
        self.apply(AuthAction::SignIn, outcome)
    }

    /// Register with the given credentials
    pub async fn sign_up(&self, credentials: &Credentials, remember_me: bool) -> ControllerState {
        self.begin(AuthAction::SignUp, credentials);
        let outcome = self.api.sign_up(credentials, remember_me).await;
        self.apply(AuthAction::SignUp, outcome)
    }

    /// Send the user to an OAuth provider
    ///
    /// When the navigator remembers where the user was headed, its path is
    /// passed along as `redirect_to` so the provider callback can return there.
    pub fn oauth_redirect(&self, provider_path: &str) -> AuthResult<String> {
        let mut url = Url::parse(&self.config.endpoint(provider_path))
            .map_err(|e| AuthError::Configuration(format!("provider URL: {e}")))?;

        if let Some(destination) = self.navigator.previous_destination() {
            if let Some(href) = &destination.href {
                url.query_pairs_mut().append_pair("redirect_to", href);
            }
        }

        let url = url.to_string();
        tracing::info!(url = %url, "Redirecting to OAuth provider");
        self.navigator.go_external(&url);
        Ok(url)
    }

    fn begin(&self, action: AuthAction, credentials: &Credentials) {
        let mut inner = self.lock();
        if inner.state == ControllerState::Pending {
            tracing::warn!(action = %action, "Request issued while another is pending");
        }
        if credentials.is_incomplete() {
            tracing::debug!(action = %action, "Submitting incomplete credentials");
        }
        tracing::debug!(
            action = %action,
            identifier = %credentials.identifier(),
            "Authentication request started"
        );
        inner.state = ControllerState::Pending;
    }

    fn apply(&self, action: AuthAction, outcome: AuthOutcome) -> ControllerState {
        match outcome {
            AuthOutcome::Success(session) => {
                tracing::info!(
                    action = %action,
                    username = %session.username,
                    display_name = %session.display_name(),
                    "Authenticated"
                );
                self.store.set(session);
                {
                    let mut inner = self.lock();
                    inner.error = None;
                    inner.state = ControllerState::Authenticated;
                }
                self.navigate_after_login();
                ControllerState::Authenticated
            }
            AuthOutcome::Failure(message) => {
                tracing::info!(action = %action, error = %message, "Authentication failed");
                let state = if self.store.is_authenticated() {
                    ControllerState::Authenticated
                } else {
                    ControllerState::Anonymous
                };
                let mut inner = self.lock();
                inner.error = Some(message);
                inner.state = state;
                state
            }
        }
    }

    fn navigate_after_login(&self) -> NavigationTarget {
        let target = NavigationTarget::from(self.navigator.take_previous_destination());
        tracing::debug!(destination = %target, home = target.is_home(), "Navigating after login");
        self.navigator.navigate(&target);
        target
    }

    fn lock(&self) -> MutexGuard<'_, ControllerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session::Session;
    use crate::infra::memory::{MemoryNavigator, NavigationEvent};

    /// API double that returns the same outcome for every call
    struct StaticApi {
        outcome: AuthOutcome,
    }

    impl AuthApi for StaticApi {
        async fn sign_in(&self, _credentials: &Credentials, _remember_me: bool) -> AuthOutcome {
            self.outcome.clone()
        }

        async fn sign_up(&self, _credentials: &Credentials, _remember_me: bool) -> AuthOutcome {
            self.outcome.clone()
        }

        async fn current_user(&self) -> AuthResult<Option<Session>> {
            Ok(None)
        }
    }

    fn controller(
        outcome: AuthOutcome,
        store: SessionStore,
    ) -> (AuthController<StaticApi, MemoryNavigator>, Arc<MemoryNavigator>) {
        let navigator = Arc::new(MemoryNavigator::new("/"));
        let controller = AuthController::new(
            Arc::new(StaticApi { outcome }),
            store,
            navigator.clone(),
            Arc::new(ClientConfig::new("https://example.com")),
        );
        (controller, navigator)
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ControllerState::Anonymous.to_string(), "anonymous");
        assert_eq!(ControllerState::Pending.to_string(), "pending");
        assert_eq!(ControllerState::Authenticated.to_string(), "authenticated");
    }

    #[test]
    fn test_new_without_session_is_anonymous() {
        let (controller, navigator) =
            controller(AuthOutcome::Failure("x".into()), SessionStore::new());

        assert_eq!(controller.state(), ControllerState::Anonymous);
        assert_eq!(controller.error(), None);
        assert!(navigator.history().is_empty());
    }

    #[test]
    fn test_new_picks_up_location_error() {
        let navigator = Arc::new(MemoryNavigator::new("/").with_location_error("Access denied"));
        let controller = AuthController::new(
            Arc::new(StaticApi {
                outcome: AuthOutcome::Failure("x".into()),
            }),
            SessionStore::new(),
            navigator,
            Arc::new(ClientConfig::default()),
        );

        assert_eq!(controller.error().as_deref(), Some("Access denied"));
    }

    #[tokio::test]
    async fn test_failure_after_authenticated_keeps_authenticated() {
        let store = SessionStore::with_session(Session::new("test", ["user"]));
        let (controller, _navigator) = controller(AuthOutcome::Failure("Unknown user".into()), store);

        let state = controller
            .sign_in(&Credentials::new("other", "secret"), false)
            .await;

        assert_eq!(state, ControllerState::Authenticated);
        assert_eq!(controller.error().as_deref(), Some("Unknown user"));
        assert_eq!(controller.store().username().as_deref(), Some("test"));
    }

    #[test]
    fn test_oauth_redirect_without_prior_destination() {
        let (controller, navigator) =
            controller(AuthOutcome::Failure("x".into()), SessionStore::new());

        let url = controller.oauth_redirect("/api/auth/github").unwrap();

        assert_eq!(url, "https://example.com/api/auth/github");
        assert_eq!(navigator.history(), vec![NavigationEvent::External(url)]);
    }

    #[test]
    fn test_oauth_redirect_carries_prior_href() {
        let (controller, navigator) =
            controller(AuthOutcome::Failure("x".into()), SessionStore::new());
        navigator.remember_destination(
            crate::domain::PriorDestination::new("articles.create").with_href("/articles/create"),
        );

        let url = controller.oauth_redirect("/api/auth/github").unwrap();

        assert_eq!(
            url,
            "https://example.com/api/auth/github?redirect_to=%2Farticles%2Fcreate"
        );
        // peeking does not consume the destination
        assert!(navigator.previous_destination().is_some());
    }

    #[test]
    fn test_oauth_redirect_keeps_base_path_prefix() {
        let navigator = Arc::new(MemoryNavigator::new("/"));
        let controller = AuthController::new(
            Arc::new(StaticApi {
                outcome: AuthOutcome::Failure("x".into()),
            }),
            SessionStore::new(),
            navigator.clone(),
            Arc::new(ClientConfig::new("https://example.com/app")),
        );

        let url = controller.oauth_redirect("/api/auth/github").unwrap();

        assert_eq!(url, "https://example.com/app/api/auth/github");
        assert_eq!(navigator.location(), url);
    }

    #[test]
    fn test_oauth_redirect_bad_base_url() {
        let navigator = Arc::new(MemoryNavigator::new("/"));
        let controller = AuthController::new(
            Arc::new(StaticApi {
                outcome: AuthOutcome::Failure("x".into()),
            }),
            SessionStore::new(),
            navigator.clone(),
            Arc::new(ClientConfig::new("not a url")),
        );

        let result = controller.oauth_redirect("/api/auth/github");

        assert!(matches!(result, Err(AuthError::Configuration(_))));
        assert!(navigator.history().is_empty());
    }
}
