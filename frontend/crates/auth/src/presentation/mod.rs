//! Presentation Layer
//!
//! Wire DTOs and the state snapshot handed to views.

pub mod dto;
pub mod view;
