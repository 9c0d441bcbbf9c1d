//! Command-line commands
//!
//! Parses the argument list into a [`Command`] and runs it against the
//! geodesy functions, producing a [`GeoOutput`] for the formatter.

use crate::algorithms::great_circle;
use crate::api::formatting::{GeoOutput, OutputFormat};
use crate::core::Coordinate;
use crate::navigation::Navigator;
use crate::utils::clock;
use crate::utils::config::GeoConfig;
use std::fmt;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: geomath [--config <file>] [--format text|json|csv] <command> [args...]

Commands:
  to-radians <degrees>
  to-degrees <radians>
  distance <lat1> <lon1> <lat2> <lon2>
  bearing <lat1> <lon1> <lat2> <lon2>
  destination <lat> <lon> <bearing_deg> <distance_m>
  now
  navigate <lat> <lon> [heading_deg]";

/// A single geodesy operation requested on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToRadians { degrees: f64 },
    ToDegrees { radians: f64 },
    Distance { from: Coordinate, to: Coordinate },
    Bearing { from: Coordinate, to: Coordinate },
    Destination { start: Coordinate, bearing_deg: f64, distance_m: f64 },
    Now,
    /// Place a target from a single fix and report the way to it
    Navigate { position: Coordinate, heading_deg: f64 },
}

/// Full parsed invocation: global options plus the command
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub command: Command,
}

/// Command-line parsing and execution errors
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// No command given
    MissingCommand,
    /// Command name not recognised
    UnknownCommand { name: String },
    /// A required positional argument is absent
    MissingArgument { command: &'static str, argument: &'static str },
    /// An argument could not be parsed as a number
    InvalidNumber { argument: &'static str, value: String },
    /// Extra arguments after a complete command
    UnexpectedArgument { value: String },
    /// An option flag lacks its value
    MissingOptionValue { option: String },
    /// Unsupported `--format` value
    UnknownFormat { value: String },
    /// `navigate` was given a position with a zero latitude or longitude
    NoFix { position: Coordinate },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingCommand => write!(f, "No command given"),
            CommandError::UnknownCommand { name } => write!(f, "Unknown command '{}'", name),
            CommandError::MissingArgument { command, argument } => {
                write!(f, "Command '{}' is missing argument <{}>", command, argument)
            }
            CommandError::InvalidNumber { argument, value } => {
                write!(f, "Invalid number for <{}>: '{}'", argument, value)
            }
            CommandError::UnexpectedArgument { value } => write!(f, "Unexpected argument '{}'", value),
            CommandError::MissingOptionValue { option } => write!(f, "Option '{}' requires a value", option),
            CommandError::UnknownFormat { value } => {
                write!(f, "Unknown output format '{}' (expected text, json or csv)", value)
            }
            CommandError::NoFix { position } => {
                write!(f, "No usable position fix at {}: latitude and longitude must both be non-zero", position)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Positional argument cursor for a single command
struct Args<'a> {
    command: &'static str,
    rest: std::slice::Iter<'a, String>,
}

impl<'a> Args<'a> {
    fn number(&mut self, argument: &'static str) -> Result<f64, CommandError> {
        let value = self.rest.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })?;
        parse_number(argument, value)
    }

    fn optional_number(&mut self, argument: &'static str) -> Result<Option<f64>, CommandError> {
        self.rest.next().map(|value| parse_number(argument, value)).transpose()
    }

    fn coordinate(&mut self, lat: &'static str, lon: &'static str) -> Result<Coordinate, CommandError> {
        Ok(Coordinate::new(self.number(lat)?, self.number(lon)?))
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.rest.next() {
            Some(value) => Err(CommandError::UnexpectedArgument { value: value.clone() }),
            None => Ok(()),
        }
    }
}

fn parse_number(argument: &'static str, value: &str) -> Result<f64, CommandError> {
    value.trim().parse::<f64>().map_err(|_| CommandError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}

impl Invocation {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let mut config_path = None;
        let mut format = None;
        let mut index = 0;

        while let Some(arg) = args.get(index) {
            match arg.as_str() {
                "--config" | "--format" => {
                    let value = args.get(index + 1).ok_or_else(|| CommandError::MissingOptionValue {
                        option: arg.clone(),
                    })?;
                    if arg == "--config" {
                        config_path = Some(PathBuf::from(value));
                    } else {
                        format = Some(value.parse::<OutputFormat>().map_err(|value| CommandError::UnknownFormat { value })?);
                    }
                    index += 2;
                }
                _ => break,
            }
        }

        let command = Command::parse(&args[index..])?;
        Ok(Self { config_path, format, command })
    }
}

impl Command {
    /// Parse a command name and its positional arguments
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let (name, rest) = args.split_first().ok_or(CommandError::MissingCommand)?;

        let command_name: &'static str = match name.as_str() {
            "to-radians" => "to-radians",
            "to-degrees" => "to-degrees",
            "distance" => "distance",
            "bearing" => "bearing",
            "destination" => "destination",
            "now" => "now",
            "navigate" => "navigate",
            other => return Err(CommandError::UnknownCommand { name: other.to_string() }),
        };
        let mut args = Args { command: command_name, rest: rest.iter() };

        let command = match command_name {
            "to-radians" => Command::ToRadians { degrees: args.number("degrees")? },
            "to-degrees" => Command::ToDegrees { radians: args.number("radians")? },
            "distance" => Command::Distance {
                from: args.coordinate("lat1", "lon1")?,
                to: args.coordinate("lat2", "lon2")?,
            },
            "bearing" => Command::Bearing {
                from: args.coordinate("lat1", "lon1")?,
                to: args.coordinate("lat2", "lon2")?,
            },
            "destination" => Command::Destination {
                start: args.coordinate("lat", "lon")?,
                bearing_deg: args.number("bearing_deg")?,
                distance_m: args.number("distance_m")?,
            },
            "navigate" => Command::Navigate {
                position: args.coordinate("lat", "lon")?,
                heading_deg: args.optional_number("heading_deg")?.unwrap_or(0.0),
            },
            _ => Command::Now,
        };

        args.finish()?;
        Ok(command)
    }

    /// Run the command. Only `navigate` consults the configuration, and only
    /// `navigate` can fail.
    pub fn execute(&self, config: &GeoConfig) -> Result<GeoOutput, CommandError> {
        let output = match *self {
            Command::ToRadians { degrees } => GeoOutput::Radians {
                degrees,
                radians: great_circle::degrees_to_radians(degrees),
            },
            Command::ToDegrees { radians } => GeoOutput::Degrees {
                radians,
                degrees: great_circle::radians_to_degrees(radians),
            },
            Command::Distance { from, to } => GeoOutput::Distance {
                from,
                to,
                distance_m: from.distance_to(&to),
            },
            Command::Bearing { from, to } => GeoOutput::Bearing {
                from,
                to,
                bearing_deg: from.bearing_to(&to),
            },
            Command::Destination { start, bearing_deg, distance_m } => GeoOutput::Destination {
                start,
                bearing_deg,
                distance_m,
                destination: start.destination(bearing_deg, distance_m),
            },
            Command::Now => GeoOutput::Timestamp {
                epoch_seconds: clock::now_epoch_seconds(),
            },
            Command::Navigate { position, heading_deg } => {
                let mut navigator = Navigator::new(config);
                navigator.update_position(position);
                navigator.update_heading(heading_deg);
                let readout = navigator.readout().ok_or(CommandError::NoFix { position })?;
                GeoOutput::Navigation(readout)
            }
        };
        Ok(output)
    }
}
