//! Core data types for great-circle calculations

use crate::algorithms::great_circle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinate in decimal degrees
///
/// Ranges are conventional only (latitude in [-90, 90], longitude in
/// [-180, 180]); nothing here enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// True while either component is exactly zero, which is how a location
    /// source reports that it has no fix yet.
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 || self.longitude == 0.0
    }

    /// Great-circle distance to `other` in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        great_circle::distance_between(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Initial bearing toward `other` in degrees, within (-180, 180]
    pub fn bearing_to(&self, other: &Coordinate) -> f64 {
        great_circle::bearing(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Point reached after `distance_m` meters along `bearing_deg`
    pub fn destination(&self, bearing_deg: f64, distance_m: f64) -> Coordinate {
        great_circle::destination_point(self.latitude, self.longitude, bearing_deg, distance_m).into()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.latitude, coord.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_detection() {
        assert!(Coordinate::default().is_unset());
        assert!(Coordinate::new(0.0, 12.5).is_unset());
        assert!(Coordinate::new(48.2, 0.0).is_unset());
        assert!(!Coordinate::new(48.2, 16.37).is_unset());
    }

    #[test]
    fn test_methods_delegate_to_free_functions() {
        let vienna = Coordinate::new(48.2082, 16.3738);
        let prague = Coordinate::new(50.0755, 14.4378);

        assert_eq!(
            vienna.distance_to(&prague),
            great_circle::distance_between(48.2082, 16.3738, 50.0755, 14.4378)
        );
        assert_eq!(
            vienna.bearing_to(&prague),
            great_circle::bearing(48.2082, 16.3738, 50.0755, 14.4378)
        );

        // Vienna to Prague is roughly 250 km heading north-west
        let distance = vienna.distance_to(&prague);
        assert!(distance > 240_000.0 && distance < 260_000.0);
        assert!(vienna.bearing_to(&prague) < 0.0);
    }

    #[test]
    fn test_destination_round_trip() {
        let start = Coordinate::new(-33.8688, 151.2093);
        let end = start.destination(135.0, 5_000.0);

        assert!((start.distance_to(&end) - 5_000.0).abs() < 1e-3);
        assert!((start.bearing_to(&end) - 135.0).abs() < 1e-6);
    }

    #[test]
    fn test_tuple_conversions_and_display() {
        let coord: Coordinate = (1.5, -2.25).into();
        assert_eq!(coord, Coordinate::new(1.5, -2.25));

        let (lat, lon): (f64, f64) = coord.into();
        assert_eq!((lat, lon), (1.5, -2.25));
        assert_eq!(coord.to_string(), "(1.5, -2.25)");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Coordinate::new(10.0, 20.0)).unwrap();
        assert_eq!(json, r#"{"latitude":10.0,"longitude":20.0}"#);
    }
}
