//! Simulation driver that ties the road and step function together
//!
//! A run goes through Init, Burn-in and Recording, always in that order.
//! Burn-in ticks are thrown away so the recorded ticks reflect steady-state
//! traffic rather than the initial layout.

use std::fmt;

use log::{debug, info};

use super::error::SimError;
use super::rng::RandomSource;
use super::road::RoadState;
use super::step::step;
use super::types::SimulationConfig;

/// Stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    BurnIn,
    Recording,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Init => "init",
            Phase::BurnIn => "burn-in",
            Phase::Recording => "recording",
            Phase::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Road states recorded after each tick of the recording phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trajectory {
    snapshots: Vec<RoadState>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: RoadState) {
        self.snapshots.push(state);
    }

    pub fn snapshots(&self) -> &[RoadState] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// One row of positions per recorded tick
    pub fn position_matrix(&self) -> Vec<Vec<usize>> {
        self.snapshots.iter().map(RoadState::positions).collect()
    }

    /// One row of velocities per recorded tick
    pub fn velocity_matrix(&self) -> Vec<Vec<usize>> {
        self.snapshots.iter().map(RoadState::velocities).collect()
    }

    /// Space-time diagram, one text line per recorded tick
    pub fn draw(&self) -> String {
        self.snapshots
            .iter()
            .map(RoadState::draw)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// What a finished run hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub trajectory: Trajectory,
    pub final_state: RoadState,
    /// Phase the run ended in, always `Complete` for a finished run
    pub phase: Phase,
}

/// A single traffic run over a validated configuration
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    phase: Phase,
}

impl Simulation {
    /// Fails fast if the configuration can't be simulated
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: Phase::Init,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Lay out the vehicles per the configured init mode and run to completion
    pub fn run<R: RandomSource + ?Sized>(
        mut self,
        rng: &mut R,
    ) -> Result<SimulationOutcome, SimError> {
        let initial = RoadState::initialize(&self.config, rng)?;
        info!(
            "Initialization complete ({} vehicles on {} zones)...",
            initial.len(),
            initial.road_length()
        );
        Ok(self.simulate(initial, rng))
    }

    /// Run to completion from an explicit starting road
    pub fn run_from<R: RandomSource + ?Sized>(
        mut self,
        initial: RoadState,
        rng: &mut R,
    ) -> Result<SimulationOutcome, SimError> {
        if initial.road_length() != self.config.road_length {
            return Err(SimError::InvalidConfiguration(format!(
                "starting road has {} zones, config expects {}",
                initial.road_length(),
                self.config.road_length
            )));
        }
        if initial.len() != self.config.vehicle_count {
            return Err(SimError::InvalidConfiguration(format!(
                "starting road has {} vehicles, config expects {}",
                initial.len(),
                self.config.vehicle_count
            )));
        }
        if let Some(v) = initial
            .vehicles()
            .iter()
            .map(|vehicle| vehicle.velocity)
            .find(|&v| v > self.config.v_max)
        {
            return Err(SimError::InvalidConfiguration(format!(
                "starting road has a vehicle at velocity {}, config allows at most {}",
                v, self.config.v_max
            )));
        }
        Ok(self.simulate(initial, rng))
    }

    fn simulate<R: RandomSource + ?Sized>(
        &mut self,
        initial: RoadState,
        rng: &mut R,
    ) -> SimulationOutcome {
        let steady = self.burn_in(initial, rng);
        let (trajectory, final_state) = self.record(steady, rng);
        self.enter(Phase::Complete);
        info!(
            "Simulation complete ({} iterations)...",
            self.config.iterations
        );
        SimulationOutcome {
            trajectory,
            final_state,
            phase: self.phase,
        }
    }

    fn burn_in<R: RandomSource + ?Sized>(&mut self, initial: RoadState, rng: &mut R) -> RoadState {
        self.enter(Phase::BurnIn);
        let mut state = initial;
        for _ in 0..self.config.burn_in_iters {
            state = step(&state, &self.config, rng);
        }
        info!(
            "Burn-in period over ({} iterations)...",
            self.config.burn_in_iters
        );
        state
    }

    fn record<R: RandomSource + ?Sized>(
        &mut self,
        start: RoadState,
        rng: &mut R,
    ) -> (Trajectory, RoadState) {
        self.enter(Phase::Recording);
        let mut trajectory = Trajectory::new();
        let mut state = start;
        for _ in 0..self.config.iterations {
            state = step(&state, &self.config, rng);
            trajectory.push(state.clone());
        }
        (trajectory, state)
    }

    fn enter(&mut self, phase: Phase) {
        debug!("Phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }
}
