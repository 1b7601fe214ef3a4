//! GeoIP data structures.

use serde::Serialize;

/// A latitude/longitude pair. Records carry both or neither.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
}

/// Geolocation lookup result.
///
/// Immutable once decoded. The coordinate pair is stored as a single
/// `Option<Coordinates>` so a record can never hold one half of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoRecord {
    ip: String,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    location: Option<Coordinates>,
    org: Option<String>,
    postal: Option<String>,
    timezone: Option<String>,
}

impl GeoRecord {
    /// Record holding only an address.
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            city: None,
            region: None,
            country: None,
            location: None,
            org: None,
            postal: None,
            timezone: None,
        }
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets both coordinates.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(Coordinates {
            latitude,
            longitude,
        });
        self
    }

    pub(crate) fn with_extras(
        mut self,
        org: Option<String>,
        postal: Option<String>,
        timezone: Option<String>,
    ) -> Self {
        self.org = org;
        self.postal = postal;
        self.timezone = timezone;
        self
    }

    pub(crate) fn with_optional_fields(
        mut self,
        city: Option<String>,
        region: Option<String>,
        country: Option<String>,
        location: Option<Coordinates>,
    ) -> Self {
        self.city = city;
        self.region = region;
        self.country = country;
        self.location = location;
        self
    }

    /// Address the record describes
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// City name
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Region or state
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Country (as reported by the service, usually an ISO code)
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Coordinate pair
    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    /// Latitude; present exactly when `longitude` is
    pub fn latitude(&self) -> Option<f64> {
        self.location.map(|c| c.latitude)
    }

    /// Longitude; present exactly when `latitude` is
    pub fn longitude(&self) -> Option<f64> {
        self.location.map(|c| c.longitude)
    }

    /// Owning organization / ASN description
    pub fn org(&self) -> Option<&str> {
        self.org.as_deref()
    }

    /// Postal code
    pub fn postal(&self) -> Option<&str> {
        self.postal.as_deref()
    }

    /// IANA time zone
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_travel_together() {
        let bare = GeoRecord::new("8.8.8.8");
        assert_eq!(bare.latitude(), None);
        assert_eq!(bare.longitude(), None);

        let placed = bare.with_location(37.386, -122.0838);
        assert_eq!(placed.latitude(), Some(37.386));
        assert_eq!(placed.longitude(), Some(-122.0838));
    }

    #[test]
    fn test_builder_sets_fields() {
        let record = GeoRecord::new("1.1.1.1")
            .with_city("Sydney")
            .with_region("New South Wales")
            .with_country("AU");
        assert_eq!(record.ip(), "1.1.1.1");
        assert_eq!(record.city(), Some("Sydney"));
        assert_eq!(record.region(), Some("New South Wales"));
        assert_eq!(record.country(), Some("AU"));
        assert_eq!(record.org(), None);
    }
}
