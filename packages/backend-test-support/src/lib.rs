//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing: unified
//! logging initialization and shared error-response assertions.

pub mod error_body;
pub mod logging;
