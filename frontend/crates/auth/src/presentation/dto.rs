//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::value_object::credentials::Credentials;

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest<'a> {
    /// User name or email
    pub username_or_email: &'a str,
    pub password: &'a str,
    pub remember_me: bool,
}

impl<'a> SignInRequest<'a> {
    pub fn new(credentials: &'a Credentials, remember_me: bool) -> Self {
        Self {
            username_or_email: credentials.identifier(),
            password: credentials.secret(),
            remember_me,
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub remember_me: bool,
}

impl<'a> SignUpRequest<'a> {
    pub fn new(credentials: &'a Credentials, remember_me: bool) -> Self {
        Self {
            username: credentials.identifier(),
            password: credentials.secret(),
            remember_me,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failure response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Parse a failure body; anything unparseable has no message
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Non-blank message, if present
    pub fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.trim().is_empty())
    }
}
