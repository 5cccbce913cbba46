//! Error types for duty-pharmacy

use thiserror::Error;

/// Main error type for duty-pharmacy operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Geo error: {0}")]
    Geo(String),

    #[error("Pharmacy directory error: {0}")]
    Directory(String),

    #[error("No on-duty pharmacies found near the given location")]
    NoPharmacies,

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown district '{district}' for city {city}")]
    UnknownDistrict { city: String, district: String },

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for duty-pharmacy operations
pub type Result<T> = std::result::Result<T, Error>;
