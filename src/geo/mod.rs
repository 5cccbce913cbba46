//! Geolocation providers
//!
//! Resolves "where am I" into a coordinate. A failed lookup is the signal to
//! fall back to manual city/district selection.

pub mod ip_location;

use crate::coord::Coordinate;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A resolved current location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Position
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Display name (city, region, country)
    pub display_name: String,
}

/// Trait for geolocation providers
pub trait Geolocator: Send + Sync {
    /// Determine the current location
    fn locate(&self) -> impl std::future::Future<Output = Result<GeoLocation>> + Send;
}

/// Get the IP location service
pub fn get_ip_locator() -> ip_location::IpLocator {
    ip_location::IpLocator::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_location_serialization() {
        let loc = GeoLocation {
            coordinate: Coordinate::new(39.9334, 32.8597),
            display_name: "Ankara, Türkiye".to_string(),
        };

        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["lat"], 39.9334);
        assert_eq!(json["display_name"], "Ankara, Türkiye");

        let parsed: GeoLocation = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, loc);
    }
}
