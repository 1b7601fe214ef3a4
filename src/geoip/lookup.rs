//! Geolocation lookup service boundary.

use async_trait::async_trait;

use super::types::GeoRecord;
use crate::error_handling::LookupError;
use crate::session::Credential;

/// One request to the lookup service.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    /// Address to resolve; `None` asks for the caller's own address
    pub ip: Option<String>,
    /// Bearer credential from the active session
    pub credential: Option<Credential>,
}

impl LookupRequest {
    /// Request for the caller's own address.
    pub fn own_address(credential: Option<Credential>) -> Self {
        Self {
            ip: None,
            credential,
        }
    }

    /// Request for a specific address.
    pub fn for_ip(ip: impl Into<String>, credential: Option<Credential>) -> Self {
        Self {
            ip: Some(ip.into()),
            credential,
        }
    }
}

/// Resolves addresses to geolocation records.
///
/// Implementations decode the service's envelope and map transport failures
/// to `LookupError`. They may time out; they never retry.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Perform one lookup.
    async fn lookup(&self, request: LookupRequest) -> Result<GeoRecord, LookupError>;
}
