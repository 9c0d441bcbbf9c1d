//! Target finding on top of the great-circle helpers
//!
//! A [`Navigator`] waits for the first usable position fix, hides a target
//! a configured distance away in a random direction, and from then on
//! reports how far away the target is, which way to turn, and whether the
//! user has arrived.

use crate::core::{Coordinate, DEGREES_IN_CIRCLE};
use crate::utils::clock;
use crate::utils::config::GeoConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Snapshot of where the target lies relative to the current position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationReadout {
    pub position: Coordinate,
    pub target: Coordinate,
    /// Great-circle distance to the target (meters)
    pub distance_m: f64,
    /// Initial bearing toward the target, within (-180, 180]
    pub bearing_deg: f64,
    /// Device heading minus bearing; rotating a north-up arrow by this much
    /// points it at the target. Not normalized.
    pub arrow_rotation_deg: f64,
    /// Whether the distance is within the arrival threshold
    pub arrived: bool,
}

/// Places a random target near the first fix and tracks progress toward it
#[derive(Debug)]
pub struct Navigator<R: Rng = StdRng> {
    target_distance_m: f64,
    arrival_threshold_m: f64,
    rng: R,
    position: Option<Coordinate>,
    heading_deg: f64,
    target: Option<Coordinate>,
    target_bearing_deg: Option<i32>,
    arrived: bool,
}

impl Navigator<StdRng> {
    /// Navigator whose random directions are seeded from the wall clock
    pub fn new(config: &GeoConfig) -> Self {
        Self::with_seed(config, clock::now_epoch_seconds() as u64)
    }

    pub fn with_seed(config: &GeoConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Navigator<R> {
    /// Navigator drawing target directions from `rng`
    pub fn with_rng(config: &GeoConfig, rng: R) -> Self {
        Self {
            target_distance_m: config.target_distance_m,
            arrival_threshold_m: config.arrival_threshold_m,
            rng,
            position: None,
            heading_deg: 0.0,
            target: None,
            target_bearing_deg: None,
            arrived: false,
        }
    }

    /// Record a new position fix.
    ///
    /// Until a target exists, fixes with a zero latitude or longitude are
    /// treated as "no fix yet" and ignored; the first usable fix places the
    /// target. Afterwards every fix is accepted, equator and prime meridian
    /// included.
    pub fn update_position(&mut self, fix: Coordinate) {
        if self.target.is_none() {
            if fix.is_unset() {
                tracing::trace!(%fix, "ignoring empty position fix");
                return;
            }
            self.place_target(fix);
        }
        self.position = Some(fix);
    }

    /// Record the device's heading relative to north (degrees)
    pub fn update_heading(&mut self, heading_deg: f64) {
        self.heading_deg = heading_deg;
    }

    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    pub fn target(&self) -> Option<Coordinate> {
        self.target
    }

    /// Whole-degree bearing the target was placed along, in 0..=360
    pub fn target_bearing(&self) -> Option<i32> {
        self.target_bearing_deg
    }

    pub fn heading(&self) -> f64 {
        self.heading_deg
    }

    /// Current distance and direction to the target, once one is placed
    pub fn readout(&mut self) -> Option<NavigationReadout> {
        let position = self.position?;
        let target = self.target?;

        let distance_m = position.distance_to(&target);
        let bearing_deg = position.bearing_to(&target);
        let arrived = distance_m <= self.arrival_threshold_m;

        if arrived != self.arrived {
            if arrived {
                tracing::info!(distance_m, "target reached");
            } else {
                tracing::info!(distance_m, "left target area");
            }
            self.arrived = arrived;
        }

        Some(NavigationReadout {
            position,
            target,
            distance_m,
            bearing_deg,
            arrow_rotation_deg: self.heading_deg - bearing_deg,
            arrived,
        })
    }

    fn place_target(&mut self, origin: Coordinate) {
        let bearing = self.rng.gen_range(0..=DEGREES_IN_CIRCLE);
        let target = origin.destination(bearing as f64, self.target_distance_m);

        tracing::info!(%origin, %target, bearing, distance_m = self.target_distance_m, "placed target");
        self.target = Some(target);
        self.target_bearing_deg = Some(bearing);
    }
}
