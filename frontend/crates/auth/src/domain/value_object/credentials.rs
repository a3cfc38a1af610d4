//! Credentials Value Object
//!
//! User-supplied identifier and secret for a single authentication attempt.
//! Never persisted; the secret is zeroized on drop and redacted from `Debug`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Identifier (user name or email) plus secret
///
/// The identifier is opaque to the client: user names and emails are
/// forwarded the same way and the API decides how to look them up.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Nothing entered yet; still submitted as-is
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// True when either half is blank
    pub fn is_incomplete(&self) -> bool {
        self.identifier.trim().is_empty() || self.secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
