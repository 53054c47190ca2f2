//! Point sources emitting a causal sinusoid.

use std::f64::consts::TAU;

/// A fixed point emitting `amplitude * sin(omega * t + phase)` from t = 0 on.
///
/// Numeric inputs are taken as-is: zero or negative frequency and amplitude
/// are legal (amplitude acts as a weighting in the height normalization).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSource {
    /// Position in meters
    x: f64,
    y: f64,
    amplitude: f64,
    /// Angular frequency (rad/s)
    omega: f64,
    /// Phase offset (rad)
    phase: f64,
}

impl PointSource {
    /// Create a source at `(x, y)` oscillating at `frequency_hz`.
    pub fn new(x: f64, y: f64, amplitude: f64, frequency_hz: f64, phase: f64) -> Self {
        Self {
            x,
            y,
            amplitude,
            omega: TAU * frequency_hz,
            phase,
        }
    }

    /// Signal emitted at time `t`; zero before the source starts.
    #[inline]
    pub fn signal(&self, t: f64) -> f64 {
        if t >= 0.0 {
            self.amplitude * (self.omega * t + self.phase).sin()
        } else {
            0.0
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn angular_frequency(&self) -> f64 {
        self.omega
    }

    pub fn frequency_hz(&self) -> f64 {
        self.omega / TAU
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}
