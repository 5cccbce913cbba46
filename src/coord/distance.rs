//! Great-circle distance
//!
//! Haversine distance on a sphere with the Earth's mean radius. Non-finite
//! input produces `NaN`, never a panic or an error; callers treat `NaN` as
//! "distance unknown".

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::Coordinate;

/// Unrounded great-circle distance between two points in kilometers
///
/// # Algorithm
/// - a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)
/// - c = 2·atan2(√a, √(1−a))
/// - d = R·c
pub fn haversine_km(reference: Coordinate, target: Coordinate) -> f64 {
    let lat1 = reference.lat.to_radians();
    let lat2 = target.lat.to_radians();
    let delta_lat = (target.lat - reference.lat).to_radians();
    let delta_lng = (target.lng - reference.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding error can push `a` just past 1 near antipodes
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometers, rounded to one decimal place
///
/// Rounds the way fixed one-decimal formatting does: by the exact binary
/// value, so 1.45 (stored as 1.4499...) becomes 1.4, and exact ties such as
/// 1.25 go up.
pub fn distance_km(reference: Coordinate, target: Coordinate) -> f64 {
    round_to_tenth(haversine_km(reference, target))
}

/// Round to one decimal place; `NaN` passes through
fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Only odd multiples of 0.25 sit exactly on a tie; `{:.1}` would round
    // those to even
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }

    format!("{:.1}", value).parse().unwrap_or(value)
}
