//! Core types for the traffic simulation
//!
//! Configuration and vehicle records shared by the road, step and driver
//! modules.

use super::error::SimError;

/// Vehicles on the default road
pub const DEFAULT_VEHICLES: usize = 250;

/// Zones on the default road
pub const DEFAULT_ROAD_ZONES: usize = 1000;

/// Speed limit in zones per tick
pub const DEFAULT_V_MAX: usize = 5;

/// Probability that a moving vehicle randomly slows down by one
pub const DEFAULT_SLOWING_CHANCE: f64 = 1.0 / 3.0;

/// Recorded ticks
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Discarded ticks before recording starts
pub const DEFAULT_BURN_IN_ITERS: usize = 2500;

/// How vehicles are laid out on the road before the first tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitMode {
    /// Distinct zones drawn uniformly at random
    #[default]
    Random,
    /// Zones `i * (road_length / vehicles)`
    Equidistant,
    /// A contiguous block starting at zone 0
    FirstK,
}

/// A vehicle on the circular road
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    /// Zone index, always below the road length
    pub position: usize,
    /// Zones advanced during the last tick
    pub velocity: usize,
}

impl Vehicle {
    pub fn new(position: usize, velocity: usize) -> Self {
        Self { position, velocity }
    }

    /// A vehicle standing still at `position`
    pub fn parked(position: usize) -> Self {
        Self::new(position, 0)
    }
}

/// Immutable parameters of a single traffic run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub vehicle_count: usize,
    pub road_length: usize,
    pub v_max: usize,
    pub slowing_chance: f64,
    pub burn_in_iters: usize,
    pub iterations: usize,
    pub init_mode: InitMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            vehicle_count: DEFAULT_VEHICLES,
            road_length: DEFAULT_ROAD_ZONES,
            v_max: DEFAULT_V_MAX,
            slowing_chance: DEFAULT_SLOWING_CHANCE,
            burn_in_iters: DEFAULT_BURN_IN_ITERS,
            iterations: DEFAULT_ITERATIONS,
            init_mode: InitMode::Random,
        }
    }
}

impl SimulationConfig {
    /// A short run on a small road, handy for eyeballing the output
    pub fn small() -> Self {
        Self {
            vehicle_count: 10,
            road_length: 100,
            iterations: 10,
            burn_in_iters: 10,
            ..Self::default()
        }
    }

    /// Copy of this config with a different number of vehicles
    pub fn with_vehicle_count(&self, vehicle_count: usize) -> Self {
        Self {
            vehicle_count,
            ..self.clone()
        }
    }

    /// Reject configurations the model can't run.
    ///
    /// Values are never clamped; the first violated constraint is reported.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.vehicle_count == 0 {
            return Err(SimError::InvalidConfiguration(
                "at least one vehicle is required".to_string(),
            ));
        }
        if self.vehicle_count > self.road_length {
            return Err(SimError::InvalidConfiguration(format!(
                "{} vehicles don't fit on a road of {} zones",
                self.vehicle_count, self.road_length
            )));
        }
        if !(0.0..=1.0).contains(&self.slowing_chance) {
            return Err(SimError::InvalidConfiguration(format!(
                "slowing chance {} is outside [0, 1]",
                self.slowing_chance
            )));
        }
        Ok(())
    }

    /// Vehicles per zone
    pub fn density(&self) -> f64 {
        self.vehicle_count as f64 / self.road_length as f64
    }
}
