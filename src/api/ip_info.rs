//! Geolocation lookup endpoint.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use super::HttpApiClient;
use crate::config::{CACHE_BUSTER_PARAM, IP_QUERY_PARAM};
use crate::error_handling::{categorize_lookup_status, categorize_reqwest_error, LookupError};
use crate::geoip::{decode_lookup_body, GeoLookup, GeoRecord, LookupRequest};

#[async_trait]
impl GeoLookup for HttpApiClient {
    async fn lookup(&self, request: LookupRequest) -> Result<GeoRecord, LookupError> {
        let mut query: Vec<(&str, String)> = Vec::with_capacity(2);
        if let Some(ip) = &request.ip {
            query.push((IP_QUERY_PARAM, ip.clone()));
        }
        query.push((CACHE_BUSTER_PARAM, Utc::now().timestamp_millis().to_string()));

        let mut builder = self.client.get(&self.ip_info_url).query(&query);
        if let Some(token) = &request.credential {
            builder = builder.bearer_auth(token.expose());
        }

        debug!(
            "GET {} ({})",
            self.ip_info_url,
            request.ip.as_deref().unwrap_or("own address")
        );
        let response = builder
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(categorize_lookup_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;
        decode_lookup_body(&body)
    }
}
