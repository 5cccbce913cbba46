//! duty-pharmacy: On-Duty Pharmacy Finder
//!
//! A library and CLI tool for finding the nearest on-duty pharmacies,
//! ranked by great-circle distance from the user's location.
//!
//! ## Features
//!
//! - Haversine distance, rounded to one decimal kilometer
//! - Stable nearest-first ranking of any located entity
//! - Live lookups against the NosyAPI on-duty pharmacy directory
//! - IP geolocation with manual city/district fallback
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use duty_pharmacy::coord::Coordinate;
//! use duty_pharmacy::coord::distance::distance_km;
//! use duty_pharmacy::rank::rank_by_distance;
//!
//! let istanbul = Coordinate::new(41.0082, 28.9784);
//! let ankara = Coordinate::new(39.9334, 32.8597);
//! println!("{} km", distance_km(istanbul, ankara));
//!
//! let ranked = rank_by_distance(istanbul, vec![ankara, istanbul]);
//! assert_eq!(ranked[0].distance_km, 0.0);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod feed;
pub mod format;
pub mod geo;
pub mod pharmacy;
pub mod rank;
pub mod search;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use coord::distance::distance_km;
pub use coord::Coordinate;
pub use error::{Error, Result};
pub use pharmacy::Pharmacy;
pub use rank::{rank_by_distance, Located, Ranked};
