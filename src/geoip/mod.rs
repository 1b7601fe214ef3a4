//! Geolocation records.
//!
//! This module defines the `GeoRecord` produced by a lookup, the tolerant
//! decoder for the service's response shapes, and the `GeoLookup` trait the
//! lookup engine calls through.

mod extract;
mod lookup;
mod types;

// Re-export public API
pub use extract::{decode_lookup_body, decode_lookup_value, parse_location};
pub use lookup::{GeoLookup, LookupRequest};
pub use types::{Coordinates, GeoRecord};
