//! Auth Outcome Value Object
//!
//! Result of a single sign-in or sign-up attempt, consumed once by the
//! controller.

use crate::domain::entity::session::Session;
use crate::error::AuthResult;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// The API accepted the credentials and returned the user record
    Success(Session),
    /// Anything else, with the message to display
    Failure(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            AuthOutcome::Success(_) => None,
            AuthOutcome::Failure(message) => Some(message),
        }
    }
}

impl From<AuthResult<Session>> for AuthOutcome {
    fn from(result: AuthResult<Session>) -> Self {
        match result {
            Ok(session) => AuthOutcome::Success(session),
            Err(err) => AuthOutcome::Failure(err.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    #[test]
    fn test_every_error_collapses_to_failure() {
        let errors = [
            AuthError::Validation("Missing credentials".into()),
            AuthError::Authentication("Unknown user".into()),
            AuthError::Conflict("Username already exists".into()),
            AuthError::Transport("Unable to reach the server".into()),
        ];

        for err in errors {
            let expected = err.to_string();
            let outcome = AuthOutcome::from(AuthResult::<Session>::Err(err));
            assert_eq!(outcome.message(), Some(expected.as_str()));
            assert!(!outcome.is_success());
        }
    }

    #[test]
    fn test_success_has_no_message() {
        let outcome = AuthOutcome::from(Ok(Session::new("Fred", ["user"])));
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), None);
    }
}
