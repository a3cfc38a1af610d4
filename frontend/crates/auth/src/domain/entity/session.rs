//! Session Entity
//!
//! The authenticated identity held for the lifetime of a page.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Authenticated user record
///
/// Deserialized from the user record the API returns on sign-in/sign-up and
/// from the `/api/users/me` bootstrap. Fields beyond `username` and `roles`
/// are kept verbatim in `profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Login identifier (some APIs call it `user`)
    #[serde(alias = "user")]
    pub username: String,
    /// Role codes granted to the user
    #[serde(default)]
    pub roles: BTreeSet<String>,
    /// Optional richer profile fields (display name, email, avatar...)
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Session {
    /// Create a session without profile fields
    pub fn new<I, R>(username: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            profile: Map::new(),
        }
    }

    /// Interpret a bootstrap payload
    ///
    /// `null`, `{}`, an empty string or anything without a username means
    /// anonymous. A bare JSON string is taken as the username.
    pub fn from_bootstrap(value: Value) -> Option<Self> {
        match value {
            Value::String(username) if !username.trim().is_empty() => {
                Some(Self::new(username, std::iter::empty::<String>()))
            }
            Value::Object(map) if !map.is_empty() => {
                serde_json::from_value::<Session>(Value::Object(map))
                    .ok()
                    .filter(Session::has_username)
            }
            _ => None,
        }
    }

    /// A record with a blank username does not identify anyone
    pub fn has_username(&self) -> bool {
        !self.username.trim().is_empty()
    }

    /// `displayName` profile field, falling back to the username
    pub fn display_name(&self) -> &str {
        self.profile
            .get("displayName")
            .and_then(Value::as_str)
            .unwrap_or(&self.username)
    }
}
