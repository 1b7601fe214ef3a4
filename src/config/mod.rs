//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, storage keys, user-facing messages)
//! - The `Config` struct with environment overrides and validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, ResponseOrdering};
