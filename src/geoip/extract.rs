//! Lookup response decoding.
//!
//! The service answers either with the record itself or with the record
//! wrapped as `{"data": {...}}`. Both shapes are accepted here, at the
//! transport boundary, so the engine only ever sees a `GeoRecord`.

use serde::Deserialize;
use serde_json::Value;

use super::types::{Coordinates, GeoRecord};
use crate::error_handling::LookupError;

/// Wire shape of a single record.
#[derive(Debug, Deserialize)]
struct WireRecord {
    ip: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    country: Option<String>,
    /// Combined "lat,lon"
    #[serde(default)]
    loc: Option<String>,
    #[serde(default)]
    org: Option<String>,
    #[serde(default)]
    postal: Option<String>,
    #[serde(default)]
    timezone: Option<String>,
}

/// Decodes a lookup response body into a `GeoRecord`.
///
/// # Errors
///
/// Returns `LookupError::InvalidResponse` if the body is not JSON, or if
/// neither the envelope's `data` object nor the top-level object holds a
/// record with an `ip` string.
pub fn decode_lookup_body(body: &[u8]) -> Result<GeoRecord, LookupError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| LookupError::InvalidResponse(format!("body is not JSON: {e}")))?;
    decode_lookup_value(&value)
}

/// Decodes an already-parsed response body.
pub fn decode_lookup_value(value: &Value) -> Result<GeoRecord, LookupError> {
    let payload = unwrap_envelope(value);
    let wire = WireRecord::deserialize(payload)
        .map_err(|e| LookupError::InvalidResponse(format!("unexpected record shape: {e}")))?;

    let location = wire.loc.as_deref().and_then(parse_location);
    Ok(GeoRecord::new(wire.ip)
        .with_optional_fields(
            non_empty(wire.city),
            non_empty(wire.region),
            non_empty(wire.country),
            location,
        )
        .with_extras(non_empty(wire.org), non_empty(wire.postal), non_empty(wire.timezone)))
}

/// The `data` member when it is an object, otherwise the value itself.
fn unwrap_envelope(value: &Value) -> &Value {
    value
        .get("data")
        .filter(|inner| inner.is_object())
        .unwrap_or(value)
}

/// Splits a combined "lat,lon" string into a coordinate pair.
///
/// Returns `None` unless there are exactly two comma-separated parts that both
/// parse as finite numbers, so a malformed field never yields half a pair.
pub fn parse_location(loc: &str) -> Option<Coordinates> {
    let (lat, lon) = loc.split_once(',')?;
    if lon.contains(',') {
        return None;
    }
    let latitude: f64 = lat.trim().parse().ok()?;
    let longitude: f64 = lon.trim().parse().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some(Coordinates {
        latitude,
        longitude,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
