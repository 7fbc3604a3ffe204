//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// Location coordinates
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Location name (city, region, etc.)
    pub name: String,
    /// Country name as reported by the geocoder
    pub country: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: None,
        }
    }

    /// Create a location with coordinates clamped into the valid range.
    /// Non-finite input collapses to 0.
    #[must_use]
    pub fn clamped(latitude: f64, longitude: f64) -> Self {
        let lat = if latitude.is_finite() { latitude.clamp(-90.0, 90.0) } else { 0.0 };
        let lon = if longitude.is_finite() { longitude.clamp(-180.0, 180.0) } else { 0.0 };
        Self::new(lat, lon, format!("{lat:.4}, {lon:.4}"))
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Round coordinates for cache key generation
    #[must_use]
    pub fn rounded_coordinates(&self, precision: u32) -> (f64, f64) {
        let multiplier = 10_f64.powi(i32::try_from(precision).unwrap_or(4));
        let lat = (self.latitude * multiplier).round() / multiplier;
        let lon = (self.longitude * multiplier).round() / multiplier;
        (lat, lon)
    }

    /// Generate a cache key for this location
    #[must_use]
    pub fn cache_key(&self, prefix: &str, date: &str) -> String {
        let (lat, lon) = self.rounded_coordinates(2);
        format!("{prefix}:{lat:.2}:{lon:.2}:{date}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_cache_key() {
        let location = Location::new(46.8182, 8.2275, "Interlaken".to_string());
        let key = location.cache_key("weather", "2023-12-01");
        assert_eq!(key, "weather:46.82:8.23:2023-12-01");
    }

    #[test]
    fn test_location_rounded_coordinates() {
        let location = Location::new(46.818_234, 8.227_456, "Test".to_string());
        let (lat, lon) = location.rounded_coordinates(2);
        assert_eq!(lat, 46.82);
        assert_eq!(lon, 8.23);
    }

    #[test]
    fn test_clamped_coordinates() {
        let location = Location::clamped(999.0, -200.0);
        assert_eq!(location.latitude, 90.0);
        assert_eq!(location.longitude, -180.0);

        let location = Location::clamped(f64::NAN, 8.54);
        assert_eq!(location.latitude, 0.0);
        assert_eq!(location.longitude, 8.54);
    }
}
