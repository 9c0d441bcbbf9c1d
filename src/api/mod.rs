//! Command-line facing API
//!
//! Command parsing and execution plus output formatting for the `geomath`
//! binary.

pub mod command;
pub mod formatting;

pub use command::{Command, CommandError, Invocation, USAGE};
pub use formatting::{GeoFormatter, GeoOutput, OutputFormat};
