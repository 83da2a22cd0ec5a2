//! Great-circle distance and the fixed-radius admission rule.

use serde::{Deserialize, Serialize};

/// WGS-84 equatorial radius, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both halves or nothing.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Self::new(lat, lon)),
            _ => None,
        }
    }
}

/// Haversine distance between `a` and `b`, in meters.
pub fn distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}

/// Whole meters between `a` and `b`, the figure shown to students.
pub fn rounded_distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    distance_meters(a, b).round()
}

/// Admission compares the rounded distance, so a scan reported as "50m
/// away" is never refused by a 50m radius.
pub fn within_radius(a: Coordinates, b: Coordinates, radius_meters: f64) -> bool {
    rounded_distance_meters(a, b) <= radius_meters
}
