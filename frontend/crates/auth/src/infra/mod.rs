//! Infrastructure Layer
//!
//! HTTP API client and in-memory navigator.

pub mod http;
pub mod memory;
