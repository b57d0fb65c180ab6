//! The circular road and the vehicles on it
//!
//! Vehicles are stored in cyclic position order: walking the vector from
//! index 0 and wrapping back to it visits the vehicles in driving order.
//! Right after initialization the order is plainly ascending; once vehicles
//! cross zone 0 the vector becomes a rotation of an ascending sequence.

use std::collections::HashSet;

use sorted_vec::SortedVec;

use super::error::SimError;
use super::rng::RandomSource;
use super::types::{InitMode, SimulationConfig, Vehicle};

/// Positions and velocities of every vehicle at one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadState {
    road_length: usize,
    vehicles: Vec<Vehicle>,
}

impl RoadState {
    /// Lay the configured vehicles out on an empty road, all standing still
    pub fn initialize<R: RandomSource + ?Sized>(
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        config.validate()?;

        let n = config.vehicle_count;
        let positions: Vec<usize> = match config.init_mode {
            InitMode::Random => {
                let drawn = rng.uniform_int_without_replacement(config.road_length, n);
                SortedVec::from_unsorted(drawn).into_vec()
            }
            InitMode::Equidistant => {
                let spacing = config.road_length / n;
                (0..n).map(|i| i * spacing).collect()
            }
            InitMode::FirstK => (0..n).collect(),
        };

        Ok(Self {
            road_length: config.road_length,
            vehicles: positions.into_iter().map(Vehicle::parked).collect(),
        })
    }

    /// Build a state from explicit positions and velocities.
    ///
    /// Positions must be distinct, inside the road and in cyclic order.
    pub fn from_parts(
        road_length: usize,
        positions: Vec<usize>,
        velocities: Vec<usize>,
    ) -> Result<Self, SimError> {
        if positions.len() != velocities.len() {
            return Err(SimError::InvalidRoadState(format!(
                "{} positions but {} velocities",
                positions.len(),
                velocities.len()
            )));
        }
        if positions.is_empty() {
            return Err(SimError::InvalidRoadState(
                "at least one vehicle is required".to_string(),
            ));
        }
        if let Some(&p) = positions.iter().find(|&&p| p >= road_length) {
            return Err(SimError::InvalidRoadState(format!(
                "position {} is outside a road of {} zones",
                p, road_length
            )));
        }
        let distinct: HashSet<usize> = positions.iter().copied().collect();
        if distinct.len() != positions.len() {
            return Err(SimError::InvalidRoadState(
                "two vehicles share a zone".to_string(),
            ));
        }

        let state = Self {
            road_length,
            vehicles: positions
                .into_iter()
                .zip(velocities)
                .map(|(p, v)| Vehicle::new(p, v))
                .collect(),
        };

        // Distinct positions in cyclic order leave exactly L - N empty zones
        // between consecutive vehicles; any other order wraps more than once.
        let empty_zones: usize = state.gaps().iter().sum();
        if empty_zones != road_length - state.len() {
            return Err(SimError::InvalidRoadState(
                "vehicles are not in driving order".to_string(),
            ));
        }

        Ok(state)
    }

    pub(crate) fn from_vehicles(road_length: usize, vehicles: Vec<Vehicle>) -> Self {
        Self {
            road_length,
            vehicles,
        }
    }

    pub fn road_length(&self) -> usize {
        self.road_length
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn positions(&self) -> Vec<usize> {
        self.vehicles.iter().map(|v| v.position).collect()
    }

    pub fn velocities(&self) -> Vec<usize> {
        self.vehicles.iter().map(|v| v.velocity).collect()
    }

    /// Index of the vehicle driving directly ahead of vehicle `i`
    pub fn front_of(&self, i: usize) -> usize {
        (i + 1) % self.vehicles.len()
    }

    /// Empty zones strictly between vehicle `i` and the vehicle ahead of it
    pub fn gap(&self, i: usize) -> usize {
        let own = self.vehicles[i].position;
        let front = self.vehicles[self.front_of(i)].position;
        forward_gap(own, front, self.road_length)
    }

    /// Gap ahead of every vehicle, in storage order
    pub fn gaps(&self) -> Vec<usize> {
        (0..self.vehicles.len()).map(|i| self.gap(i)).collect()
    }

    /// Render the road as one line: `.` for an empty zone, the vehicle's
    /// velocity (capped at 9) for an occupied one.
    pub fn draw(&self) -> String {
        let mut line = vec!['.'; self.road_length];
        for vehicle in &self.vehicles {
            let digit = vehicle.velocity.min(9) as u32;
            line[vehicle.position] = char::from_digit(digit, 10).unwrap_or('#');
        }
        line.into_iter().collect()
    }
}

/// Empty zones driving forward from `own` until `front`, wrapping around a
/// road of `road_length` zones.
///
/// When `front == own` (a lone vehicle) the whole rest of the road is free.
pub fn forward_gap(own: usize, front: usize, road_length: usize) -> usize {
    (front + road_length - own - 1) % road_length
}
