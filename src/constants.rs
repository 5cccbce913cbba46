//! Centralized constants for the duty-pharmacy crate
//!
//! Values shared by more than one module live here.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
}

/// External API endpoints
pub mod api {
    /// NosyAPI service root for the on-duty pharmacy lookup
    pub const NOSY_API_URL: &str = "https://www.nosyapi.com/apiv2/service";

    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";

    /// Google Maps search link template
    pub const GOOGLE_MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

    /// Environment variable that overrides the configured API token
    pub const TOKEN_ENV_VAR: &str = "DUTY_PHARMACY_TOKEN";
}

/// Cache settings
pub mod cache {
    /// IP location cache duration in seconds (1 hour)
    pub const IP_LOCATION_TTL_SECS: u64 = 3600;

    /// IP location cache file name
    pub const IP_LOCATION_CACHE_FILE: &str = "ip_location_cache.json";
}

/// Promotional slot identifiers
pub mod ads {
    /// Slot shown between result cards
    pub const IN_FEED_SLOT: &str = "9876543210";
}
