//! Application Configuration
//!
//! Configuration for the auth client.

use std::time::Duration;

/// Auth client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin, e.g. `https://example.com`
    pub base_url: String,
    /// Sign in endpoint path
    pub signin_path: String,
    /// Sign up endpoint path
    pub signup_path: String,
    /// Bootstrap (current user) endpoint path
    pub me_path: String,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Shown when the API could not be reached at all
    pub transport_failure_message: String,
    /// Shown when a failure response carries no `message`
    pub fallback_failure_message: String,
    /// Home location path
    pub home_path: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            signin_path: "/api/auth/signin".to_string(),
            signup_path: "/api/auth/signup".to_string(),
            me_path: "/api/users/me".to_string(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            transport_failure_message: "Unable to reach the server. Please try again.".to_string(),
            fallback_failure_message: "Authentication failed".to_string(),
            home_path: "/".to_string(),
            user_agent: concat!("auth-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create config for the given API origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create config for development (short timeouts, local server)
    pub fn development() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(1),
            ..Default::default()
        }
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
