//! Estimate pi by throwing darts at a unit square with an inscribed circle

use crate::simulation::{RandomSource, SimError};

/// Result of a dart-throwing run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiEstimate {
    pub inside: usize,
    pub throws: usize,
    pub value: f64,
}

impl PiEstimate {
    pub fn error(&self) -> f64 {
        (self.value - std::f64::consts::PI).abs()
    }
}

/// Whether a dart at `(x, y)` lands inside the circle of radius 0.5 centred
/// on the square
pub fn dart_in_circle(x: f64, y: f64) -> bool {
    (x - 0.5) * (x - 0.5) + (y - 0.5) * (y - 0.5) <= 0.5 * 0.5
}

/// Throw `throws` darts and scale the hit ratio by 4
pub fn estimate_pi<R: RandomSource + ?Sized>(
    throws: usize,
    rng: &mut R,
) -> Result<PiEstimate, SimError> {
    if throws == 0 {
        return Err(SimError::InvalidConfiguration(
            "at least one dart is required".to_string(),
        ));
    }

    let inside = (0..throws)
        .filter(|_| {
            let x = rng.uniform_real(0.0, 1.0);
            let y = rng.uniform_real(0.0, 1.0);
            dart_in_circle(x, y)
        })
        .count();

    Ok(PiEstimate {
        inside,
        throws,
        value: inside as f64 * 4.0 / throws as f64,
    })
}
