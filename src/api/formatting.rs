//! Result output formatting and serialization
//!
//! Every command produces a [`GeoOutput`]. A [`GeoFormatter`] rounds it to
//! the configured number of decimals and renders it as human-readable text,
//! JSON or CSV.

use crate::core::Coordinate;
use crate::navigation::NavigationReadout;
use crate::utils::config::GeoConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON object
    Json,
    /// Header line plus one CSV row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Result of a single geodesy operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeoOutput {
    /// Degrees converted to radians
    Radians { degrees: f64, radians: f64 },
    /// Radians converted to degrees
    Degrees { radians: f64, degrees: f64 },
    /// Great-circle distance between two points
    Distance { from: Coordinate, to: Coordinate, distance_m: f64 },
    /// Initial bearing from one point to another
    Bearing { from: Coordinate, to: Coordinate, bearing_deg: f64 },
    /// Point reached from a start along a bearing
    Destination { start: Coordinate, bearing_deg: f64, distance_m: f64, destination: Coordinate },
    /// Seconds since the Unix epoch
    Timestamp { epoch_seconds: i64 },
    /// Target navigation snapshot
    Navigation(NavigationReadout),
}

/// Renders [`GeoOutput`] values in the configured format
#[derive(Debug, Clone)]
pub struct GeoFormatter {
    pub format: OutputFormat,
    /// Decimals for latitude, longitude and angle conversions
    pub coordinate_decimals: u8,
    /// Decimals for distances and bearings
    pub distance_decimals: u8,
}

impl Default for GeoFormatter {
    fn default() -> Self {
        Self::from_config(&GeoConfig::default())
    }
}

impl GeoFormatter {
    pub fn from_config(config: &GeoConfig) -> Self {
        Self {
            format: config.output_format,
            coordinate_decimals: config.coordinate_decimals,
            distance_decimals: config.distance_decimals,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Round and render `output`
    pub fn format(&self, output: &GeoOutput) -> String {
        let rounded = self.round(output);
        match self.format {
            OutputFormat::Text => format_text(&rounded),
            OutputFormat::Json => format_json(&rounded),
            OutputFormat::Csv => format_csv(&rounded),
        }
    }

    /// Copy of `output` with every value rounded for display
    pub fn round(&self, output: &GeoOutput) -> GeoOutput {
        let coord = |c: &Coordinate| Coordinate {
            latitude: round_to_precision(c.latitude, self.coordinate_decimals),
            longitude: round_to_precision(c.longitude, self.coordinate_decimals),
        };
        let angle = |v: f64| round_to_precision(v, self.coordinate_decimals);
        let metric = |v: f64| round_to_precision(v, self.distance_decimals);

        match output {
            GeoOutput::Radians { degrees, radians } => GeoOutput::Radians {
                degrees: angle(*degrees),
                radians: angle(*radians),
            },
            GeoOutput::Degrees { radians, degrees } => GeoOutput::Degrees {
                radians: angle(*radians),
                degrees: angle(*degrees),
            },
            GeoOutput::Distance { from, to, distance_m } => GeoOutput::Distance {
                from: coord(from),
                to: coord(to),
                distance_m: metric(*distance_m),
            },
            GeoOutput::Bearing { from, to, bearing_deg } => GeoOutput::Bearing {
                from: coord(from),
                to: coord(to),
                bearing_deg: metric(*bearing_deg),
            },
            GeoOutput::Destination { start, bearing_deg, distance_m, destination } => GeoOutput::Destination {
                start: coord(start),
                bearing_deg: metric(*bearing_deg),
                distance_m: metric(*distance_m),
                destination: coord(destination),
            },
            GeoOutput::Timestamp { epoch_seconds } => GeoOutput::Timestamp { epoch_seconds: *epoch_seconds },
            GeoOutput::Navigation(readout) => GeoOutput::Navigation(NavigationReadout {
                position: coord(&readout.position),
                target: coord(&readout.target),
                distance_m: metric(readout.distance_m),
                bearing_deg: metric(readout.bearing_deg),
                arrow_rotation_deg: metric(readout.arrow_rotation_deg),
                arrived: readout.arrived,
            }),
        }
    }
}

/// Round to `decimals` places, ties to even. NaN and infinities pass through.
pub fn round_to_precision(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let multiplier = 10_f64.powi(decimals as i32);
    (value * multiplier).round_ties_even() / multiplier
}

fn format_text(output: &GeoOutput) -> String {
    match output {
        GeoOutput::Radians { radians, .. } => format!("{} rad", radians),
        GeoOutput::Degrees { degrees, .. } => format!("{} deg", degrees),
        GeoOutput::Distance { distance_m, .. } => format!("{} m", distance_m),
        GeoOutput::Bearing { bearing_deg, .. } => format!("{} deg", bearing_deg),
        GeoOutput::Destination { destination, .. } => destination.to_string(),
        GeoOutput::Timestamp { epoch_seconds } => epoch_seconds.to_string(),
        GeoOutput::Navigation(readout) => format!(
            "position: {}\ntarget: {}\ndistance: {} m\nbearing: {} deg\narrow rotation: {} deg\narrived: {}",
            readout.position,
            readout.target,
            readout.distance_m,
            readout.bearing_deg,
            readout.arrow_rotation_deg,
            if readout.arrived { "yes" } else { "no" },
        ),
    }
}

fn format_json(output: &GeoOutput) -> String {
    // Non-finite floats serialize as null
    serde_json::to_string_pretty(output)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize output: {}\"}}", e))
}

fn format_csv(output: &GeoOutput) -> String {
    let fields = csv_fields(output);
    let header: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    let row: Vec<String> = fields.into_iter().map(|(_, value)| value).collect();
    format!("{}\n{}", header.join(","), row.join(","))
}

fn csv_fields(output: &GeoOutput) -> Vec<(&'static str, String)> {
    fn coord(prefix: (&'static str, &'static str), c: &Coordinate) -> [(&'static str, String); 2] {
        [(prefix.0, c.latitude.to_string()), (prefix.1, c.longitude.to_string())]
    }

    let mut fields = Vec::new();
    match output {
        GeoOutput::Radians { degrees, radians } | GeoOutput::Degrees { degrees, radians } => {
            fields.push(("degrees", degrees.to_string()));
            fields.push(("radians", radians.to_string()));
        }
        GeoOutput::Distance { from, to, distance_m } => {
            fields.extend(coord(("from_latitude", "from_longitude"), from));
            fields.extend(coord(("to_latitude", "to_longitude"), to));
            fields.push(("distance_m", distance_m.to_string()));
        }
        GeoOutput::Bearing { from, to, bearing_deg } => {
            fields.extend(coord(("from_latitude", "from_longitude"), from));
            fields.extend(coord(("to_latitude", "to_longitude"), to));
            fields.push(("bearing_deg", bearing_deg.to_string()));
        }
        GeoOutput::Destination { start, bearing_deg, distance_m, destination } => {
            fields.extend(coord(("start_latitude", "start_longitude"), start));
            fields.push(("bearing_deg", bearing_deg.to_string()));
            fields.push(("distance_m", distance_m.to_string()));
            fields.extend(coord(("latitude", "longitude"), destination));
        }
        GeoOutput::Timestamp { epoch_seconds } => {
            fields.push(("epoch_seconds", epoch_seconds.to_string()));
        }
        GeoOutput::Navigation(readout) => {
            fields.extend(coord(("latitude", "longitude"), &readout.position));
            fields.extend(coord(("target_latitude", "target_longitude"), &readout.target));
            fields.push(("distance_m", readout.distance_m.to_string()));
            fields.push(("bearing_deg", readout.bearing_deg.to_string()));
            fields.push(("arrow_rotation_deg", readout.arrow_rotation_deg.to_string()));
            fields.push(("arrived", readout.arrived.to_string()));
        }
    }
    fields
}
