use chrono::NaiveDateTime;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A single device position fix.
///
/// Samples are ephemeral: each one is compared against the last recorded
/// sample by the movement tracker and then discarded, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: NaiveDateTime,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64, timestamp: NaiveDateTime) -> Self {
        Position { latitude, longitude, timestamp }
    }

    /// Great-circle distance to another sample in meters (haversine).
    pub fn distance_to(&self, other: &Position) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}
