//! Traffic and Monte-Carlo Simulation Library
//!
//! A Nagel-Schreckenberg traffic model plus a few small Monte-Carlo
//! experiments, all driven by a seedable random source.

pub mod montecarlo;
pub mod simulation;
