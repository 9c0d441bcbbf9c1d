//! Geodetic constants

/// Number of degrees in a full circle
pub const DEGREES_IN_CIRCLE: i32 = 360;

/// Mean Earth radius used by every spherical formula (meters)
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
