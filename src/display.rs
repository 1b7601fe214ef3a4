//! Display projection.
//!
//! Pure functions from lookup state to what the map and info views render.
//! Nothing here holds state or caches; callers recompute on every change.

use serde::Serialize;

use crate::config::{INFO_FIELD_FALLBACK, MAP_LABEL_FALLBACK};
use crate::engine::LookupState;
use crate::geoip::GeoRecord;

/// What the map widget should center on and label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapTarget {
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
    /// City, or "Location" when the record has none
    pub label: String,
    /// Address shown in the marker popup
    pub ip: String,
}

/// Text fields for the info card, with "N/A" for anything absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    /// IP address
    pub ip: String,
    /// City
    pub city: String,
    /// Region
    pub region: String,
    /// Country
    pub country: String,
    /// Latitude as text
    pub latitude: String,
    /// Longitude as text
    pub longitude: String,
}

/// Map target for the authoritative record.
///
/// Returns `None` when there is no authoritative record or it has no
/// coordinate pair.
pub fn project(state: &LookupState) -> Option<MapTarget> {
    project_record(state.authoritative()?)
}

/// Map target for a single record.
pub fn project_record(record: &GeoRecord) -> Option<MapTarget> {
    let location = record.location()?;
    Some(MapTarget {
        latitude: location.latitude,
        longitude: location.longitude,
        label: record.city().unwrap_or(MAP_LABEL_FALLBACK).to_string(),
        ip: record.ip().to_string(),
    })
}

/// Info card for a record.
pub fn project_info(record: &GeoRecord) -> InfoCard {
    let text = |value: Option<&str>| value.unwrap_or(INFO_FIELD_FALLBACK).to_string();
    let coordinate = |value: Option<f64>| {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| INFO_FIELD_FALLBACK.to_string())
    };
    InfoCard {
        ip: record.ip().to_string(),
        city: text(record.city()),
        region: text(record.region()),
        country: text(record.country()),
        latitude: coordinate(record.latitude()),
        longitude: coordinate(record.longitude()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_record_with_only_ip_is_none() {
        let mut state = LookupState::default();
        state.current = Some(GeoRecord::new("8.8.8.8"));
        assert_eq!(project(&state), None);
    }

    #[test]
    fn test_project_empty_state_is_none() {
        assert_eq!(project(&LookupState::default()), None);
    }

    #[test]
    fn test_project_uses_searched_over_current() {
        let mut state = LookupState::default();
        state.current = Some(
            GeoRecord::new("203.0.113.7")
                .with_city("Home")
                .with_location(1.0, 2.0),
        );
        state.searched = Some(
            GeoRecord::new("8.8.8.8")
                .with_city("Mountain View")
                .with_location(37.4056, -122.0775),
        );

        let target = project(&state).unwrap();
        assert_eq!(target.ip, "8.8.8.8");
        assert_eq!(target.label, "Mountain View");
        assert_eq!(target.latitude, 37.4056);
        assert_eq!(target.longitude, -122.0775);
    }

    #[test]
    fn test_project_does_not_fall_back_when_searched_lacks_coordinates() {
        // Authority is by presence of the record, not of its coordinates
        let mut state = LookupState::default();
        state.current = Some(GeoRecord::new("203.0.113.7").with_location(1.0, 2.0));
        state.searched = Some(GeoRecord::new("10.0.0.1"));
        assert_eq!(project(&state), None);
    }

    #[test]
    fn test_label_falls_back_without_city() {
        let record = GeoRecord::new("1.1.1.1").with_location(-33.8688, 151.2093);
        assert_eq!(project_record(&record).unwrap().label, "Location");
    }

    #[test]
    fn test_project_info_fallbacks() {
        let card = project_info(&GeoRecord::new("9.9.9.9").with_country("CH"));
        assert_eq!(
            card,
            InfoCard {
                ip: "9.9.9.9".into(),
                city: "N/A".into(),
                region: "N/A".into(),
                country: "CH".into(),
                latitude: "N/A".into(),
                longitude: "N/A".into(),
            }
        );
    }

    #[test]
    fn test_project_info_coordinates() {
        let card = project_info(&GeoRecord::new("8.8.8.8").with_location(37.4056, -122.0775));
        assert_eq!(card.latitude, "37.4056");
        assert_eq!(card.longitude, "-122.0775");
    }
}
