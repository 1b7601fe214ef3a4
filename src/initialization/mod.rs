//! Application initialization.
//!
//! Sets up the process-wide logger and the HTTP client shared by the
//! authentication and lookup transports.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::{init_logger, init_logger_with};
