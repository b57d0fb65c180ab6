//! One tick of the Nagel-Schreckenberg rules
//!
//! Every vehicle decides from the pre-tick snapshot only; the new state is
//! written into a separate buffer.

use super::rng::RandomSource;
use super::road::RoadState;
use super::types::{SimulationConfig, Vehicle};

/// New velocity for a vehicle currently at `velocity` with `gap` empty zones
/// ahead: accelerate, brake to the gap, then maybe dawdle.
///
/// The slowdown is drawn on every call so the random sequence does not
/// depend on the traffic situation.
pub fn next_velocity<R: RandomSource + ?Sized>(
    velocity: usize,
    gap: usize,
    v_max: usize,
    slowing_chance: f64,
    rng: &mut R,
) -> usize {
    let accelerated = (velocity + 1).min(v_max);
    let braked = accelerated.min(gap);
    let slow = rng.bernoulli(slowing_chance);
    if slow && braked > 0 {
        braked - 1
    } else {
        braked
    }
}

/// Advance every vehicle by one tick and return the resulting road
pub fn step<R: RandomSource + ?Sized>(
    road: &RoadState,
    config: &SimulationConfig,
    rng: &mut R,
) -> RoadState {
    let road_length = road.road_length();
    let next = road
        .vehicles()
        .iter()
        .enumerate()
        .map(|(i, vehicle)| {
            let gap = road.gap(i);
            let velocity = next_velocity(
                vehicle.velocity,
                gap,
                config.v_max,
                config.slowing_chance,
                rng,
            );
            Vehicle::new((vehicle.position + velocity) % road_length, velocity)
        })
        .collect();

    RoadState::from_vehicles(road_length, next)
}
