//! Runs over a range of vehicle counts, for fundamental-diagram data

use log::info;

use super::driver::Simulation;
use super::error::SimError;
use super::metrics::{flow, total_distance_travelled};
use super::rng::RandomSource;
use super::types::SimulationConfig;

/// Summary of one run within a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub vehicle_count: usize,
    pub density: f64,
    pub total_distance: u64,
    pub flow: f64,
}

/// Run `base` once per vehicle count, sharing one random source.
///
/// Every count is validated up front so a bad entry fails the sweep before
/// any run starts.
pub fn run_density_sweep<R: RandomSource + ?Sized>(
    base: &SimulationConfig,
    vehicle_counts: &[usize],
    rng: &mut R,
) -> Result<Vec<SweepPoint>, SimError> {
    let configs = vehicle_counts
        .iter()
        .map(|&count| {
            let config = base.with_vehicle_count(count);
            config.validate().map(|_| config)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut points = Vec::with_capacity(configs.len());
    for config in configs {
        let density = config.density();
        let vehicle_count = config.vehicle_count;
        let outcome = Simulation::new(config)?.run(rng)?;
        let point = SweepPoint {
            vehicle_count,
            density,
            total_distance: total_distance_travelled(&outcome.trajectory),
            flow: flow(&outcome.trajectory),
        };
        info!(
            "Sweep: {} vehicles, density {:.3}, flow {:.4}",
            point.vehicle_count, point.density, point.flow
        );
        points.push(point);
    }
    Ok(points)
}

/// Vehicle counts from `step` up to `road_length`, in increments of `step`
pub fn vehicle_counts(road_length: usize, step: usize) -> Vec<usize> {
    let step = step.max(1);
    (1..=road_length / step).map(|k| k * step).collect()
}
