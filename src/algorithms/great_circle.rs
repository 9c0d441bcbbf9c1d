//! Great-circle geometry on a spherical Earth
//!
//! Closed-form formulas for angle conversion, haversine distance, initial
//! bearing and destination point. All angles are taken and returned in
//! degrees unless the function name says otherwise; distances are meters.
//!
//! Inputs are never validated. Values outside the usual coordinate ranges
//! are computed as-is, and an out-of-domain intermediate (for example an
//! `asin` argument past ±1) yields NaN rather than an error.
//!
//! Formulas follow <http://www.movable-type.co.uk/scripts/latlong.html>.

use crate::core::EARTH_RADIUS_METERS;
use std::f64::consts::PI;

/// Convert an angle from degrees to radians
#[inline]
pub fn degrees_to_radians(value_in_degrees: f64) -> f64 {
    value_in_degrees * PI / 180.0
}

/// Convert an angle from radians to degrees
#[inline]
pub fn radians_to_degrees(value_in_radians: f64) -> f64 {
    value_in_radians * 180.0 / PI
}

/// Destination point reached by travelling `distance` meters from
/// `(lat1, long1)` along the great circle with initial `bearing`.
///
/// Returns `(latitude, longitude)` in degrees. The longitude is not wrapped,
/// so a path crossing the antimeridian can come back outside ±180°.
pub fn destination_point(lat1: f64, long1: f64, bearing: f64, distance: f64) -> (f64, f64) {
    let bearing = degrees_to_radians(bearing);
    let lat1 = degrees_to_radians(lat1);
    let long1 = degrees_to_radians(long1);
    let angular_distance = distance / EARTH_RADIUS_METERS;

    let lat2 = (lat1.sin() * angular_distance.cos()
        + lat1.cos() * angular_distance.sin() * bearing.cos())
    .asin();
    let long2 = long1
        + (bearing.sin() * angular_distance.sin() * lat1.cos())
            .atan2(angular_distance.cos() - lat1.sin() * lat2.sin());

    (radians_to_degrees(lat2), radians_to_degrees(long2))
}

/// Great-circle distance in meters between two points (haversine)
pub fn distance_between(lat1: f64, long1: f64, lat2: f64, long2: f64) -> f64 {
    let delta_lat = degrees_to_radians(lat2 - lat1);
    let delta_long = degrees_to_radians(long2 - long1);

    let radicand = (delta_lat / 2.0).sin().powi(2)
        + degrees_to_radians(lat1).cos()
            * degrees_to_radians(lat2).cos()
            * (delta_long / 2.0).sin().powi(2);
    let angular_distance = 2.0 * radicand.sqrt().atan2((1.0 - radicand).sqrt());

    EARTH_RADIUS_METERS * angular_distance
}

/// Initial bearing in degrees from the first point toward the second.
///
/// The result lies in (-180°, 180°] as produced by `atan2`; callers wanting
/// a compass heading in [0°, 360°) must normalize it themselves.
pub fn bearing(lat1: f64, long1: f64, lat2: f64, long2: f64) -> f64 {
    let lat1 = degrees_to_radians(lat1);
    let long1 = degrees_to_radians(long1);
    let lat2 = degrees_to_radians(lat2);
    let long2 = degrees_to_radians(long2);

    let x = lat2.cos() * (long2 - long1).sin();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (long2 - long1).cos();

    radians_to_degrees(x.atan2(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const TOLERANCE: f64 = 1e-9;

    fn unit_vector(lat: f64, long: f64) -> Vector3<f64> {
        let (lat, long) = (degrees_to_radians(lat), degrees_to_radians(long));
        Vector3::new(lat.cos() * long.cos(), lat.cos() * long.sin(), lat.sin())
    }

    #[test]
    fn test_angle_conversion_round_trip() {
        for value in [-720.0, -180.0, -33.3, 0.0, 1e-7, 45.0, 90.0, 359.999, 1234.5] {
            let back = radians_to_degrees(degrees_to_radians(value));
            assert!((back - value).abs() < TOLERANCE, "{} came back as {}", value, back);
        }
    }

    #[test]
    fn test_known_conversions() {
        assert!((degrees_to_radians(180.0) - PI).abs() < TOLERANCE);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < TOLERANCE);
        assert!((radians_to_degrees(PI) - 180.0).abs() < TOLERANCE);
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for (lat, long) in [(0.0, 0.0), (37.7749, -122.4194), (-89.9, 179.9), (51.5, -0.12)] {
            assert_eq!(distance_between(lat, long, lat, long), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ((48.8566, 2.3522), (40.7128, -74.0060)),
            ((-33.8688, 151.2093), (35.6762, 139.6503)),
            ((0.0, 0.0), (0.0, 1.0)),
        ];
        for ((a, b), (c, d)) in pairs {
            assert!((distance_between(a, b, c, d) - distance_between(c, d, a, b)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_one_degree_along_equator() {
        // 1 degree of arc on a 6371 km sphere; 111319.49 m only holds for the WGS84 equatorial radius
        let distance = distance_between(0.0, 0.0, 0.0, 1.0);
        assert!((distance - 111_194.93).abs() < 1.0);
        assert!((distance - PI * EARTH_RADIUS_METERS / 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_matches_unit_vector_angle() {
        // Independent check using the angle between ECEF unit vectors
        let cases = [
            (53.320556, -1.729722, 53.188333, 0.133333),
            (10.0, 20.0, -30.0, 100.0),
            (-45.0, -170.0, 60.0, 170.0),
        ];
        for (lat1, long1, lat2, long2) in cases {
            let expected = unit_vector(lat1, long1).angle(&unit_vector(lat2, long2)) * EARTH_RADIUS_METERS;
            let actual = distance_between(lat1, long1, lat2, long2);
            assert!((actual - expected).abs() < 1e-3, "expected {}, got {}", expected, actual);
        }
    }

    #[test]
    fn test_antipodal_distance_is_half_circumference() {
        let distance = distance_between(0.0, 0.0, 0.0, 180.0);
        assert!((distance - PI * EARTH_RADIUS_METERS).abs() < 1e-3);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        assert!((bearing(0.0, 0.0, 0.0, 90.0) - 90.0).abs() < TOLERANCE);
        assert!((bearing(0.0, 0.0, 10.0, 0.0) - 0.0).abs() < TOLERANCE);
        assert!((bearing(0.0, 0.0, -10.0, 0.0) - 180.0).abs() < TOLERANCE);
        assert!((bearing(0.0, 0.0, 0.0, -90.0) + 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_bearing_is_not_normalized() {
        let westward = bearing(10.0, 10.0, 10.5, 9.5);
        assert!(westward < 0.0 && westward > -90.0);
    }

    #[test]
    fn test_zero_distance_destination_is_start() {
        for bearing in [0.0, 45.0, 90.0, 180.0, 271.5, 360.0] {
            let (lat, long) = destination_point(37.7749, -122.4194, bearing, 0.0);
            assert!((lat - 37.7749).abs() < TOLERANCE);
            assert!((long + 122.4194).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_destination_reference_points() {
        // Expected values from the movable-type calculator, accurate to ~5e-4 degrees
        let (lat, long) = destination_point(53.320556, -1.729722, 96.021666667, 124_800.0);
        assert!((lat - 53.188333).abs() < 5e-4);
        assert!((long - 0.133333).abs() < 5e-4);

        let (lat, long) = destination_point(81.9289182, -126.645662, 38.848430, 198_500.0);
        assert!((lat - 83.226667).abs() < 5e-4);
        assert!((long + 117.109167).abs() < 5e-4);
    }

    #[test]
    fn test_destination_then_distance_and_bearing_agree() {
        let (lat, long) = destination_point(12.0, 34.0, 60.0, 25_000.0);
        assert!((distance_between(12.0, 34.0, lat, long) - 25_000.0).abs() < 1e-4);
        assert!((bearing(12.0, 34.0, lat, long) - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_destination_longitude_is_not_wrapped() {
        let (_, long) = destination_point(0.0, 179.5, 90.0, 111_194.93);
        assert!(long > 180.0);
    }

    #[test]
    fn test_nan_propagates_without_panicking() {
        assert!(distance_between(f64::NAN, 0.0, 0.0, 0.0).is_nan());
        assert!(bearing(0.0, f64::NAN, 1.0, 1.0).is_nan());
        let (lat, long) = destination_point(0.0, 0.0, f64::NAN, 10.0);
        assert!(lat.is_nan() && long.is_nan());
    }
}
