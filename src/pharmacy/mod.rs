//! Pharmacy records and on-duty directory lookups
//!
//! Provides the `Pharmacy` record, the `PharmacyDirectory` trait, and two
//! directories: the live NosyAPI client and a built-in mock used for manual
//! city/district search.

pub mod cities;
pub mod mock;
pub mod nosy;

use crate::config::Config;
use crate::constants::api::GOOGLE_MAPS_SEARCH_URL;
use crate::coord::Coordinate;
use crate::error::Result;
use crate::rank::Located;
use serde::{Deserialize, Serialize};

/// An on-duty pharmacy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default = "default_is_open")]
    pub is_open: bool,
}

fn default_is_open() -> bool {
    true
}

impl Pharmacy {
    /// Create an open pharmacy
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            coordinate,
            is_open: true,
        }
    }

    /// Google Maps search link for this pharmacy
    pub fn map_url(&self) -> String {
        format!(
            "{}{},{}",
            GOOGLE_MAPS_SEARCH_URL, self.coordinate.lat, self.coordinate.lng
        )
    }

    /// `tel:` link for the pharmacy's phone number
    pub fn tel_url(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

impl Located for Pharmacy {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// Trait for on-duty pharmacy directories
pub trait PharmacyDirectory: Send + Sync {
    /// Short name of this directory (e.g. "nosy", "mock")
    fn name(&self) -> &'static str;

    /// Fetch the pharmacies on duty around `location`
    ///
    /// Returns `Error::NoPharmacies` when the directory has nothing to offer.
    fn on_duty(
        &self,
        location: Coordinate,
    ) -> impl std::future::Future<Output = Result<Vec<Pharmacy>>> + Send;
}

/// Get the live directory client configured from `config`
pub fn get_directory(config: &Config) -> Result<nosy::NosyDirectory> {
    nosy::NosyDirectory::from_config(config)
}
