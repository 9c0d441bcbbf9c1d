//! Great-circle geodesy helpers
//!
//! Degree/radian conversion, haversine distance, initial bearing and
//! destination point on a spherical Earth of radius 6371 km, plus an
//! epoch-seconds clock. A small target navigator, output formatting and
//! JSON configuration support the `geomath` command-line tool.

pub mod core;
pub mod algorithms;
pub mod navigation;
pub mod utils;
pub mod api;

// Re-export commonly used items
pub use crate::core::{Coordinate, DEGREES_IN_CIRCLE, EARTH_RADIUS_METERS};
pub use crate::algorithms::great_circle::{bearing, degrees_to_radians, destination_point, distance_between, radians_to_degrees};
pub use crate::utils::clock::now_epoch_seconds;
pub use crate::navigation::{NavigationReadout, Navigator};
pub use crate::utils::config::{ConfigError, ConfigurationManager, GeoConfig};
pub use crate::api::{Command, CommandError, GeoFormatter, GeoOutput, Invocation, OutputFormat};
