//! Distance ranking
//!
//! Orders located entities by their great-circle distance from a reference
//! point, nearest first.
//!
//! Entities whose distance cannot be computed (non-finite coordinates) are
//! kept, not dropped: they sort after every entity with a known distance and
//! keep their relative input order.

use crate::coord::distance::distance_km;
use crate::coord::Coordinate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Anything that sits at a geographic coordinate
pub trait Located {
    /// The entity's position
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

/// An entity together with its distance from the search reference point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub entity: T,

    /// Distance in kilometers, rounded to one decimal; `NaN` when unknown
    pub distance_km: f64,
}

impl<T> Ranked<T> {
    /// Whether the distance could be computed
    pub fn has_distance(&self) -> bool {
        !self.distance_km.is_nan()
    }

    /// Distance formatted for display, e.g. "1.4 km" or "? km"
    pub fn distance_label(&self) -> String {
        if self.has_distance() {
            format!("{:.1} km", self.distance_km)
        } else {
            "? km".to_string()
        }
    }
}

/// Rank entities by distance from `reference`, nearest first
///
/// The sort is stable: entities at equal distance keep their input order.
pub fn rank_by_distance<T, I>(reference: Coordinate, entities: I) -> Vec<Ranked<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut ranked: Vec<Ranked<T>> = entities
        .into_iter()
        .map(|entity| {
            let distance_km = distance_km(reference, entity.coordinate());
            Ranked { entity, distance_km }
        })
        .collect();

    ranked.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
    ranked
}

/// Rank and keep at most `limit` of the nearest entities
pub fn nearest<T, I>(reference: Coordinate, entities: I, limit: usize) -> Vec<Ranked<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut ranked = rank_by_distance(reference, entities);
    ranked.truncate(limit);
    ranked
}

/// Total order on distances with every `NaN` after every number
fn compare_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Place {
        name: String,
        at: Coordinate,
    }

    impl Place {
        fn new(name: &str, lat: f64, lng: f64) -> Self {
            Self {
                name: name.to_string(),
                at: Coordinate::new(lat, lng),
            }
        }
    }

    impl Located for Place {
        fn coordinate(&self) -> Coordinate {
            self.at
        }
    }

    fn names<T: std::borrow::Borrow<Place>>(ranked: &[Ranked<T>]) -> Vec<&str> {
        ranked.iter().map(|r| r.entity.borrow().name.as_str()).collect()
    }

    const ORIGIN: Coordinate = Coordinate { lat: 0.0, lng: 0.0 };

    #[test]
    fn test_empty_input() {
        let ranked = rank_by_distance::<Place, _>(ORIGIN, Vec::new());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_sorted_ascending() {
        // Roughly 5.2, 1.1 and 3.3 km north of the origin
        let places = vec![
            Place::new("far", 0.04677, 0.0),
            Place::new("near", 0.00989, 0.0),
            Place::new("middle", 0.02968, 0.0),
        ];

        let ranked = rank_by_distance(ORIGIN, places);

        assert_eq!(names(&ranked), vec!["near", "middle", "far"]);
        let distances: Vec<f64> = ranked.iter().map(|r| r.distance_km).collect();
        assert_eq!(distances, vec![1.1, 3.3, 5.2]);
    }

    #[test]
    fn test_length_preserved() {
        let places: Vec<Place> = (0..25)
            .map(|i| Place::new(&format!("p{}", i), (i % 7) as f64 * 0.01, (i % 3) as f64 * 0.01))
            .collect();

        let ranked = rank_by_distance(ORIGIN, places.clone());
        assert_eq!(ranked.len(), places.len());
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Same distance in four different directions
        let places = vec![
            Place::new("east", 0.0, 0.01),
            Place::new("north", 0.01, 0.0),
            Place::new("closest", 0.001, 0.0),
            Place::new("west", 0.0, -0.01),
            Place::new("south", -0.01, 0.0),
        ];

        let ranked = rank_by_distance(ORIGIN, places);
        assert_eq!(names(&ranked), vec!["closest", "east", "north", "west", "south"]);
    }

    #[test]
    fn test_nan_entities_go_last_in_input_order() {
        let places = vec![
            Place::new("broken-a", f64::NAN, 0.0),
            Place::new("far", 0.05, 0.0),
            Place::new("broken-b", 0.0, f64::INFINITY),
            Place::new("near", 0.01, 0.0),
        ];

        let ranked = rank_by_distance(ORIGIN, places);

        assert_eq!(names(&ranked), vec!["near", "far", "broken-a", "broken-b"]);
        assert!(ranked[0].has_distance());
        assert!(!ranked[2].has_distance());
        assert_eq!(ranked[3].distance_label(), "? km");
    }

    #[test]
    fn test_all_distances_non_negative() {
        let places = vec![
            Place::new("a", -45.0, 170.0),
            Place::new("b", 89.9, -179.9),
            Place::new("c", 0.0, 0.0),
        ];
        let ranked = rank_by_distance(Coordinate::new(12.0, -40.0), places);
        assert!(ranked.iter().all(|r| r.distance_km >= 0.0));
    }

    #[test]
    fn test_ranks_borrowed_entities() {
        let places = vec![Place::new("far", 0.05, 0.0), Place::new("near", 0.01, 0.0)];
        let ranked = rank_by_distance(ORIGIN, places.iter());
        assert_eq!(names(&ranked), vec!["near", "far"]);
    }

    #[test]
    fn test_nearest_truncates() {
        let places = vec![
            Place::new("c", 0.03, 0.0),
            Place::new("a", 0.01, 0.0),
            Place::new("b", 0.02, 0.0),
        ];
        let ranked = nearest(ORIGIN, places, 2);
        assert_eq!(names(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn test_distance_label() {
        let ranked = Ranked {
            entity: Place::new("x", 0.0, 0.0),
            distance_km: 3.0,
        };
        assert_eq!(ranked.distance_label(), "3.0 km");
    }

    #[test]
    fn test_ranked_serializes_flat() {
        let ranked = rank_by_distance(ORIGIN, vec![Place::new("only", 0.01, 0.0)]);
        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json["name"], "only");
        assert_eq!(json["distance_km"], 1.1);
    }
}
