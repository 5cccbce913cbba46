//! Built-in city/district table for manual location selection

use crate::coord::Coordinate;
use crate::error::{Error, Result};
use serde::Serialize;

/// Reference point used for a city without known coordinates
pub const FALLBACK_CENTER: Coordinate = Coordinate { lat: 40.0, lng: 29.0 };

struct BuiltinCity {
    name: &'static str,
    center: Option<Coordinate>,
    districts: &'static [&'static str],
}

const BUILTIN_CITIES: &[BuiltinCity] = &[
    BuiltinCity {
        name: "İstanbul",
        center: Some(Coordinate { lat: 41.0082, lng: 28.9784 }),
        districts: &["Kadıköy", "Beşiktaş", "Şişli", "Üsküdar"],
    },
    BuiltinCity {
        name: "Ankara",
        center: Some(Coordinate { lat: 39.9334, lng: 32.8597 }),
        districts: &["Çankaya", "Keçiören", "Mamak"],
    },
    BuiltinCity {
        name: "İzmir",
        center: None,
        districts: &[],
    },
    BuiltinCity {
        name: "Bursa",
        center: None,
        districts: &[],
    },
    BuiltinCity {
        name: "Antalya",
        center: None,
        districts: &[],
    },
];

/// A city offered for manual selection
#[derive(Debug, Clone, Serialize)]
pub struct City {
    pub name: &'static str,
    pub center: Coordinate,
    pub districts: &'static [&'static str],
}

impl City {
    fn from_builtin(city: &BuiltinCity) -> Self {
        Self {
            name: city.name,
            center: city.center.unwrap_or(FALLBACK_CENTER),
            districts: city.districts,
        }
    }

    /// Resolve a district name against this city
    ///
    /// Cities without a district list accept any non-empty district.
    pub fn district(&self, query: &str) -> Result<String> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::UnknownDistrict {
                city: self.name.to_string(),
                district: String::new(),
            });
        }

        if self.districts.is_empty() {
            return Ok(query.to_string());
        }

        let wanted = fold(query);
        self.districts
            .iter()
            .find(|d| fold(d) == wanted)
            .map(|d| d.to_string())
            .ok_or_else(|| Error::UnknownDistrict {
                city: self.name.to_string(),
                district: query.to_string(),
            })
    }
}

/// All cities available for manual selection
pub fn all() -> Vec<City> {
    BUILTIN_CITIES.iter().map(City::from_builtin).collect()
}

/// Look up a city by name
///
/// Matching ignores case and the Turkish dotted/dotless I distinction, so
/// "istanbul", "ISTANBUL" and "İstanbul" all resolve.
pub fn find(query: &str) -> Result<City> {
    let wanted = fold(query.trim());
    BUILTIN_CITIES
        .iter()
        .find(|c| fold(c.name) == wanted)
        .map(City::from_builtin)
        .ok_or_else(|| Error::UnknownCity(query.to_string()))
}

/// Lowercase and fold Turkish letters to ASCII for lenient comparison
fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            '\u{307}' => None, // combining dot left behind by lowercasing 'İ'
            'ı' => Some('i'),
            'ç' => Some('c'),
            'ğ' => Some('g'),
            'ö' => Some('o'),
            'ş' => Some('s'),
            'ü' => Some('u'),
            other => Some(other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cities() {
        let cities = all();
        assert_eq!(cities.len(), 5);
        assert!(cities.iter().any(|c| c.name == "Bursa"));
    }

    #[test]
    fn test_find_is_lenient() {
        for query in ["İstanbul", "istanbul", "ISTANBUL", " Istanbul "] {
            let city = find(query).unwrap();
            assert_eq!(city.name, "İstanbul");
            assert_eq!(city.center, Coordinate::new(41.0082, 28.9784));
        }
    }

    #[test]
    fn test_find_unknown() {
        assert!(matches!(find("Paris"), Err(Error::UnknownCity(_))));
    }

    #[test]
    fn test_city_without_center_uses_fallback() {
        let city = find("izmir").unwrap();
        assert_eq!(city.center, FALLBACK_CENTER);
    }

    #[test]
    fn test_district_lookup() {
        let ankara = find("Ankara").unwrap();
        assert_eq!(ankara.district("cankaya").unwrap(), "Çankaya");
        assert_eq!(ankara.district("KEÇİÖREN").unwrap(), "Keçiören");
        assert!(matches!(
            ankara.district("Kadıköy"),
            Err(Error::UnknownDistrict { .. })
        ));
    }

    #[test]
    fn test_district_free_form_when_unlisted() {
        let bursa = find("Bursa").unwrap();
        assert_eq!(bursa.district("Nilüfer").unwrap(), "Nilüfer");
        assert!(bursa.district("  ").is_err());
    }
}
