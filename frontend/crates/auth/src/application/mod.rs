//! Application Layer
//!
//! The controller state machine and its supporting use cases.

pub mod bootstrap;
pub mod config;
pub mod controller;

// Re-exports
pub use bootstrap::BootstrapSessionUseCase;
pub use config::ClientConfig;
pub use controller::{AuthController, ControllerState};
