//! Auth Error Types
//!
//! Client-side classification of failed authentication calls. Every variant
//! carries the message that is shown to the user, so the controller can
//! collapse any of them into `AuthOutcome::Failure(message)`.

use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Malformed or missing credentials, rejected by the API (400/422)
    #[error("{0}")]
    Validation(String),

    /// Wrong or unknown credentials (401/403/404)
    #[error("{0}")]
    Authentication(String),

    /// Identifier already taken on sign-up (409)
    #[error("{0}")]
    Conflict(String),

    /// No usable response from the API
    #[error("{0}")]
    Transport(String),

    /// Response outside the expected contract (5xx, undecodable body)
    #[error("{message}")]
    UnexpectedResponse { status: Option<u16>, message: String },

    /// Client misconfiguration (bad base URL, bad provider path)
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl AuthError {
    /// Classify a non-2xx response by its status code
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match ErrorKind::from_status(status) {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                AuthError::Validation(message)
            }
            ErrorKind::Unauthorized | ErrorKind::Forbidden | ErrorKind::NotFound => {
                AuthError::Authentication(message)
            }
            ErrorKind::Conflict => AuthError::Conflict(message),
            _ => AuthError::UnexpectedResponse {
                status: Some(status),
                message,
            },
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Authentication(_) => ErrorKind::Unauthorized,
            AuthError::Conflict(_) => ErrorKind::Conflict,
            AuthError::Transport(_) => ErrorKind::Network,
            AuthError::UnexpectedResponse {
                status: Some(status),
                ..
            } => ErrorKind::from_status(*status),
            AuthError::UnexpectedResponse { status: None, .. } | AuthError::Configuration(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// User-facing message, exactly as it will be displayed
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Log level for this error: server-side trouble is loud, client
    /// rejections are routine
    pub(crate) fn log_level(&self) -> tracing::Level {
        let kind = self.kind();
        match self {
            AuthError::Configuration(_) => tracing::Level::ERROR,
            AuthError::Transport(_) => tracing::Level::WARN,
            _ if kind.is_server_error() => tracing::Level::ERROR,
            AuthError::Authentication(_) => tracing::Level::INFO,
            _ if kind.is_client_error() => tracing::Level::DEBUG,
            _ => tracing::Level::WARN,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        let kind = self.kind();
        match self.log_level() {
            tracing::Level::ERROR => {
                tracing::error!(kind = %kind, error = %self, "Auth request failed");
            }
            tracing::Level::WARN => {
                tracing::warn!(kind = %kind, error = %self, "Auth request failed");
            }
            tracing::Level::INFO => {
                tracing::info!(kind = %kind, "Authentication rejected");
            }
            _ => {
                tracing::debug!(kind = %kind, error = %self, "Auth request rejected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert_eq!(
            AuthError::from_status(400, "Missing credentials"),
            AuthError::Validation("Missing credentials".to_string())
        );
        assert_eq!(
            AuthError::from_status(401, "Unknown user"),
            AuthError::Authentication("Unknown user".to_string())
        );
        assert_eq!(
            AuthError::from_status(409, "Username already exists"),
            AuthError::Conflict("Username already exists".to_string())
        );
        assert!(matches!(
            AuthError::from_status(502, "Bad gateway"),
            AuthError::UnexpectedResponse {
                status: Some(502),
                ..
            }
        ));
    }

    #[test]
    fn test_display_is_server_message_verbatim() {
        let err = AuthError::from_status(400, "Username already exists");
        assert_eq!(err.to_string(), "Username already exists");
        assert_eq!(err.message(), "Username already exists");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            AuthError::Transport("offline".into()).kind(),
            ErrorKind::Network
        );
        assert_eq!(AuthError::Conflict("x".into()).kind(), ErrorKind::Conflict);
        assert_eq!(
            AuthError::from_status(503, "down").kind(),
            ErrorKind::ServiceUnavailable
        );
    }

    #[test]
    fn test_log_level_follows_kind() {
        use tracing::Level;

        assert_eq!(AuthError::from_status(500, "boom").log_level(), Level::ERROR);
        assert_eq!(AuthError::Configuration("x".into()).log_level(), Level::ERROR);
        assert_eq!(AuthError::Transport("offline".into()).log_level(), Level::WARN);
        assert_eq!(AuthError::from_status(401, "nope").log_level(), Level::INFO);
        assert_eq!(AuthError::from_status(400, "missing").log_level(), Level::DEBUG);
        assert_eq!(AuthError::from_status(409, "taken").log_level(), Level::DEBUG);
    }
}
