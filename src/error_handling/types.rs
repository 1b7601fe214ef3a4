//! Error type definitions.
//!
//! Every failure the lookup core can observe is one of these enums. Lookup and
//! validation errors never escape `LookupEngine`; they are rendered into
//! `LookupState::error_message` instead.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{ConfigValidationError, MSG_EMPTY_INPUT, MSG_MALFORMED_INPUT};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configuration failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigValidationError),
}

/// Authentication failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The authority rejected the email/password pair. Carries the server's
    /// message when it provided one.
    #[error("{0}")]
    InvalidCredentials(String),

    /// The authority could not be reached or failed to answer.
    #[error("Authentication service unavailable: {0}")]
    Transport(String),
}

/// Reasons an address string is refused before it can become a query.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, EnumIterMacro)]
pub enum ValidationError {
    /// Blank after trimming.
    #[error("{}", MSG_EMPTY_INPUT)]
    Empty,

    /// Not four groups of 1-3 decimal digits separated by dots.
    #[error("{}", MSG_MALFORMED_INPUT)]
    Malformed,
}

/// Geolocation lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The service has no record for the address (404).
    #[error("No geolocation record found")]
    NotFound,

    /// Connectivity failure, timeout, or a request that never completed.
    #[error("Lookup transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Lookup service returned status {status}")]
    ServerError {
        /// HTTP status code
        status: u16,
    },

    /// The body could not be decoded into a geolocation record.
    #[error("Invalid lookup response: {0}")]
    InvalidResponse(String),

    /// No session is available, or the service refused the credential (401).
    #[error("Not authenticated")]
    Unauthenticated,
}

/// History index outside the current entry range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("History index {index} is out of bounds (length {len})")]
pub struct IndexError {
    /// Requested position
    pub index: usize,
    /// Number of entries at the time of the request
    pub len: usize,
}
