//! Error handling.
//!
//! This module provides:
//! - The error taxonomy (`AuthError`, `ValidationError`, `LookupError`, `IndexError`)
//! - Initialization errors for the logger and HTTP client
//! - Mapping of transport failures onto that taxonomy
//!
//! Propagation rule: validation errors are short-circuited before the network;
//! lookup errors stop at `LookupEngine` and are surfaced as state.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{
    categorize_auth_error, categorize_auth_status, categorize_lookup_status,
    categorize_reqwest_error,
};
pub use types::{AuthError, IndexError, InitializationError, LookupError, ValidationError};
