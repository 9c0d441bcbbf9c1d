//! Spherical geodesy algorithms

pub mod great_circle;

pub use great_circle::{bearing, degrees_to_radians, destination_point, distance_between, radians_to_degrees};
