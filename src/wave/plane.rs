//! Plane waves: a source observed away from its position.

use std::sync::Arc;

use super::PointSource;

/// A point source's signal delayed by propagation along a wavevector.
///
/// The delay at `(x, y)` is the offset from the source projected on
/// `(kx, ky)`, divided by the source's angular frequency.
#[derive(Debug, Clone)]
pub struct PlaneWave {
    source: Arc<PointSource>,
    kx: f64,
    ky: f64,
}

impl PlaneWave {
    pub fn new(source: Arc<PointSource>, kx: f64, ky: f64) -> Self {
        Self { source, kx, ky }
    }

    /// Signal observed at `(x, y)` at simulation time `t`.
    ///
    /// A source with zero angular frequency has no phase velocity; its signal
    /// is returned undelayed instead of dividing by zero.
    pub fn signal(&self, x: f64, y: f64, t: f64) -> f64 {
        let omega = self.source.angular_frequency();
        if omega.abs() <= f64::EPSILON {
            return self.source.signal(t);
        }

        let (sx, sy) = self.source.position();
        let path = self.kx * (x - sx) + self.ky * (y - sy);
        self.source.signal(t - path / omega)
    }

    pub fn source(&self) -> &Arc<PointSource> {
        &self.source
    }

    pub fn wavevector(&self) -> (f64, f64) {
        (self.kx, self.ky)
    }

    /// Magnitude of the wavevector (rad/m)
    pub fn wavenumber(&self) -> f64 {
        self.kx.hypot(self.ky)
    }
}
