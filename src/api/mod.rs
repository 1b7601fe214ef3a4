//! HTTP transport for the authentication and lookup services.
//!
//! `HttpApiClient` implements both `AuthService` and `GeoLookup` on top of a
//! single `reqwest::Client`. Response-shape tolerance (enveloped vs flat) and
//! status mapping happen here so the engine only sees records and errors.

mod auth;
mod ip_info;

use crate::config::{Config, IP_INFO_PATH, LOGIN_PATH};
use crate::error_handling::InitializationError;
use crate::initialization::init_client;

/// reqwest-backed client for the geolocation API.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    login_url: String,
    ip_info_url: String,
}

impl HttpApiClient {
    /// Builds a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ConfigError` if the configuration is
    /// invalid, or `InitializationError::HttpClientError` if the underlying
    /// client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        config.validate()?;
        let client = init_client(config)?;
        Ok(Self {
            client,
            login_url: config.endpoint(LOGIN_PATH),
            ip_info_url: config.endpoint(IP_INFO_PATH),
        })
    }
}
