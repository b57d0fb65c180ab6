//! Small Monte-Carlo experiments
//!
//! Each one draws from a [`RandomSource`](crate::simulation::RandomSource)
//! so results replay from a seed, like the traffic runs.

pub mod coin;
pub mod expressway;
pub mod pi;

pub use coin::{toss, toss_stats, toss_sweep, Face, TossStats};
pub use expressway::{
    actual_travel_time, average_time, fixed_trips, random_trips, simulate_trips, Point, Route,
    Trip, TravelTime, EXPRESSWAY_RADIUS, UNIVERSE_HEIGHT, UNIVERSE_WIDTH,
};
pub use pi::{dart_in_circle, estimate_pi, PiEstimate};
