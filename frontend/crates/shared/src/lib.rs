//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of client vocabulary:
//! - Classification of failed API calls ([`error::kind::ErrorKind`])
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all client modules.

pub mod error {
    pub mod kind;
}

pub use error::kind::ErrorKind;
