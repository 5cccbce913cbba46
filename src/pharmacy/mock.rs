//! Built-in mock directory for manual city/district search
//!
//! The live API only answers coordinate queries, so a manual selection is
//! served from three fixed pharmacies placed around the city's reference
//! point.

use crate::coord::Coordinate;
use crate::error::Result;
use crate::pharmacy::cities::{self, City};
use crate::pharmacy::{Pharmacy, PharmacyDirectory};

/// (name, phone, latitude offset, longitude offset)
const MOCK_PHARMACIES: &[(&str, &str, f64, f64)] = &[
    ("Ada Eczanesi", "0212555555", 0.01, 0.01),
    ("Merkez Eczanesi", "0212666666", -0.005, 0.02),
    ("Hayat Eczanesi", "0212777777", 0.02, -0.01),
];

/// Mock directory bound to a selected city and district
#[derive(Debug, Clone)]
pub struct MockDirectory {
    city: City,
    district: String,
}

impl MockDirectory {
    /// Resolve a city/district selection into a directory
    pub fn for_selection(city: &str, district: &str) -> Result<Self> {
        let city = cities::find(city)?;
        let district = city.district(district)?;
        Ok(Self { city, district })
    }

    /// Reference point of the selected city
    pub fn center(&self) -> Coordinate {
        self.city.center
    }

    /// Display label, e.g. "Kadıköy, İstanbul"
    pub fn label(&self) -> String {
        format!("{}, {}", self.district, self.city.name)
    }

    fn pharmacies_around(&self, center: Coordinate) -> Vec<Pharmacy> {
        let address = self.label();
        MOCK_PHARMACIES
            .iter()
            .map(|(name, phone, d_lat, d_lng)| {
                Pharmacy::new(*name, address.clone(), *phone, center.offset(*d_lat, *d_lng))
            })
            .collect()
    }
}

impl PharmacyDirectory for MockDirectory {
    fn name(&self) -> &'static str {
        "mock"
    }

    /// Always answers around the selected city, whatever `location` is
    async fn on_duty(&self, _location: Coordinate) -> Result<Vec<Pharmacy>> {
        Ok(self.pharmacies_around(self.city.center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::rank_by_distance;

    #[tokio::test]
    async fn test_mock_pharmacies() {
        let directory = MockDirectory::for_selection("İstanbul", "Kadıköy").unwrap();
        let pharmacies = directory.on_duty(directory.center()).await.unwrap();

        assert_eq!(pharmacies.len(), 3);
        assert!(pharmacies.iter().all(|p| p.address == "Kadıköy, İstanbul"));
        assert!(pharmacies.iter().all(|p| p.is_open));
        assert!((pharmacies[0].coordinate.lat - 41.0182).abs() < 1e-9);
        assert!((pharmacies[0].coordinate.lng - 28.9884).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_mock_ranking_order() {
        let directory = MockDirectory::for_selection("Ankara", "Çankaya").unwrap();
        let pharmacies = directory.on_duty(directory.center()).await.unwrap();
        let ranked = rank_by_distance(directory.center(), pharmacies);

        let names: Vec<&str> = ranked.iter().map(|r| r.entity.name.as_str()).collect();
        assert_eq!(names, vec!["Ada Eczanesi", "Merkez Eczanesi", "Hayat Eczanesi"]);
    }

    #[test]
    fn test_invalid_selection() {
        assert!(MockDirectory::for_selection("Paris", "X").is_err());
        assert!(MockDirectory::for_selection("Ankara", "Kadıköy").is_err());
    }

    #[test]
    fn test_label() {
        let directory = MockDirectory::for_selection("bursa", "Osmangazi").unwrap();
        assert_eq!(directory.label(), "Osmangazi, Bursa");
        assert_eq!(directory.name(), "mock");
    }
}
