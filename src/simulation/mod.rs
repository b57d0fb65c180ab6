//! Nagel-Schreckenberg traffic on a circular single-lane road
//!
//! Vehicles move on a ring of discrete zones. Each tick every vehicle
//! accelerates, brakes to the gap in front of it and randomly slows down,
//! all decided from the previous tick's snapshot. Nothing here depends on
//! the CLI, so the model can be driven and tested directly.

mod driver;
mod error;
mod metrics;
mod rng;
mod road;
mod step;
mod sweep;
mod types;

pub use driver::{Phase, Simulation, SimulationOutcome, Trajectory};
pub use error::SimError;
pub use metrics::{flow, fundamental_diagram_points, mean_velocity, total_distance_travelled};
pub use rng::{time_seed, RandomSource, SimRng};
pub use road::{forward_gap, RoadState};
pub use step::{next_velocity, step};
pub use sweep::{run_density_sweep, vehicle_counts, SweepPoint};
pub use types::{
    InitMode, SimulationConfig, Vehicle, DEFAULT_BURN_IN_ITERS, DEFAULT_ITERATIONS,
    DEFAULT_ROAD_ZONES, DEFAULT_SLOWING_CHANCE, DEFAULT_VEHICLES, DEFAULT_V_MAX,
};
