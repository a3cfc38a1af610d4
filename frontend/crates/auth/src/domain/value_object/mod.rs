//! Value Object Module

pub mod auth_outcome;
pub mod credentials;
pub mod navigation_target;
