//! Aggregate statistics over recorded trajectories
//!
//! These feed external plotting and reporting; nothing here renders.

use log::warn;

use super::driver::Trajectory;

/// Sum of every recorded position value, over all vehicles and ticks.
///
/// This is a raw position sum, not tick-over-tick displacement. Existing
/// fundamental-diagram datasets were produced with this definition.
pub fn total_distance_travelled(trajectory: &Trajectory) -> u64 {
    trajectory
        .snapshots()
        .iter()
        .flat_map(|state| state.vehicles())
        .map(|vehicle| vehicle.position as u64)
        .sum()
}

/// Pair each vehicle count with the distance statistic of its run.
///
/// Values pass through untouched. Mismatched series are cut to the shorter
/// one.
pub fn fundamental_diagram_points(
    vehicle_counts: &[usize],
    distances: &[u64],
) -> Vec<(usize, u64)> {
    if vehicle_counts.len() != distances.len() {
        warn!(
            "Fundamental diagram got {} vehicle counts but {} distances, dropping the extra tail",
            vehicle_counts.len(),
            distances.len()
        );
    }
    vehicle_counts
        .iter()
        .copied()
        .zip(distances.iter().copied())
        .collect()
}

/// Mean velocity over every vehicle and recorded tick
pub fn mean_velocity(trajectory: &Trajectory) -> f64 {
    let samples: usize = trajectory.snapshots().iter().map(|s| s.len()).sum();
    if samples == 0 {
        return 0.0;
    }
    let total: usize = trajectory
        .snapshots()
        .iter()
        .flat_map(|state| state.vehicles())
        .map(|vehicle| vehicle.velocity)
        .sum();
    total as f64 / samples as f64
}

/// Vehicles passing a fixed zone per tick, averaged over the recording.
///
/// Each tick's flow is the summed velocity divided by the road length.
pub fn flow(trajectory: &Trajectory) -> f64 {
    if trajectory.is_empty() {
        return 0.0;
    }
    let per_tick: f64 = trajectory
        .snapshots()
        .iter()
        .map(|state| {
            let moved: usize = state.vehicles().iter().map(|v| v.velocity).sum();
            moved as f64 / state.road_length() as f64
        })
        .sum();
    per_tick / trajectory.len() as f64
}
