//! Randomized plane-wave construction for the spawn keys.

use std::f64::consts::TAU;
use std::sync::Arc;

use rand::Rng;

use super::{PlaneWave, PointSource};
use crate::params::{SimulationParams, SpawnYRange, WaveDefaults};

/// Which kind of wave a spawn request produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    /// Default amplitude, frequency and phase; random position and wavevector
    Coherent,

    /// Amplitude, frequency and phase drawn at random as well
    Random,
}

/// Builds randomized plane waves inside the simulation extent.
///
/// Every draw is `uniform[0, 1) * bound`, so bounds of zero (or negative
/// defaults) produce values instead of failing.
pub struct WaveSpawner<R: Rng> {
    rng: R,
    defaults: WaveDefaults,
    extent_x: f64,
    extent_y: f64,
}

impl<R: Rng> WaveSpawner<R> {
    /// Create a spawner for the extent described by `params`
    pub fn new(params: &SimulationParams, rng: R) -> Self {
        let extent_y = match params.spawn_y_range {
            SpawnYRange::Width => params.size_x_m,
            SpawnYRange::Height => params.size_y_m,
        };

        Self {
            rng,
            defaults: params.wave_defaults(),
            extent_x: params.size_x_m,
            extent_y,
        }
    }

    pub fn defaults(&self) -> &WaveDefaults {
        &self.defaults
    }

    /// Build one new wave of the requested kind
    pub fn spawn(&mut self, kind: SpawnKind) -> PlaneWave {
        let x = self.draw(self.extent_x);
        let y = self.draw(self.extent_y);

        let source = match kind {
            SpawnKind::Coherent => PointSource::new(
                x,
                y,
                self.defaults.amplitude,
                self.defaults.frequency_hz,
                self.defaults.phase_rad,
            ),
            SpawnKind::Random => {
                let amplitude = self.draw(10.0 * self.defaults.amplitude);
                let frequency_hz = self.draw(self.defaults.frequency_hz);
                let phase_rad = self.draw(TAU);
                PointSource::new(x, y, amplitude, frequency_hz, phase_rad)
            }
        };

        let theta = self.draw(TAU);
        let k = self.draw(self.defaults.max_wavenumber());

        PlaneWave::new(Arc::new(source), k * theta.cos(), k * theta.sin())
    }

    fn draw(&mut self, bound: f64) -> f64 {
        self.rng.gen::<f64>() * bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawner(params: &SimulationParams, seed: u64) -> WaveSpawner<StdRng> {
        WaveSpawner::new(params, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_coherent_uses_defaults() {
        let params = SimulationParams::default();
        let defaults = params.wave_defaults();
        let mut spawner = spawner(&params, 7);

        for _ in 0..500 {
            let wave = spawner.spawn(SpawnKind::Coherent);
            let source = wave.source();

            assert_eq!(source.amplitude(), defaults.amplitude);
            assert_eq!(source.phase(), defaults.phase_rad);
            assert_eq!(
                source.angular_frequency(),
                PointSource::new(0.0, 0.0, 1.0, defaults.frequency_hz, 0.0).angular_frequency()
            );
            assert!(wave.wavenumber() < defaults.max_wavenumber());
        }
    }

    #[test]
    fn test_positions_reuse_width_for_y() {
        let params = SimulationParams {
            size_x_m: 50.0,
            size_y_m: 5.0,
            ..SimulationParams::default()
        };
        let mut spawner = spawner(&params, 11);

        let mut max_y: f64 = 0.0;
        for _ in 0..500 {
            let wave = spawner.spawn(SpawnKind::Coherent);
            let (x, y) = wave.source().position();
            assert!((0.0..50.0).contains(&x));
            assert!((0.0..50.0).contains(&y));
            max_y = max_y.max(y);
        }

        // Draws escape the 5m height when width is reused
        assert!(max_y > 5.0);
    }

    #[test]
    fn test_positions_with_height_range() {
        let params = SimulationParams {
            size_x_m: 50.0,
            size_y_m: 5.0,
            spawn_y_range: SpawnYRange::Height,
            ..SimulationParams::default()
        };
        let mut spawner = spawner(&params, 11);

        for _ in 0..500 {
            let (_, y) = spawner.spawn(SpawnKind::Random).source().position();
            assert!((0.0..5.0).contains(&y));
        }
    }

    #[test]
    fn test_random_draw_bounds() {
        let params = SimulationParams::default();
        let defaults = params.wave_defaults();
        let mut spawner = spawner(&params, 3);

        for _ in 0..500 {
            let wave = spawner.spawn(SpawnKind::Random);
            let source = wave.source();

            assert!(source.amplitude() >= 0.0);
            assert!(source.amplitude() < 10.0 * defaults.amplitude);
            assert!(source.frequency_hz() >= 0.0);
            assert!(source.frequency_hz() < defaults.frequency_hz + 1e-15);
            assert!((0.0..TAU).contains(&source.phase()));
            assert!(wave.wavenumber() < defaults.max_wavenumber());
        }
    }

    #[test]
    fn test_seeded_spawns_repeat() {
        let params = SimulationParams::default();
        let mut a = spawner(&params, 42);
        let mut b = spawner(&params, 42);

        for kind in [SpawnKind::Coherent, SpawnKind::Random, SpawnKind::Random] {
            let wa = a.spawn(kind);
            let wb = b.spawn(kind);
            assert_eq!(**wa.source(), **wb.source());
            assert_eq!(wa.wavevector(), wb.wavevector());
        }
    }

    #[test]
    fn test_zero_defaults_do_not_panic() {
        let mut params = SimulationParams::default();
        params.default_frequency_hz = 0.0;
        params.default_amplitude = 0.0;
        let mut spawner = spawner(&params, 5);

        let wave = spawner.spawn(SpawnKind::Random);
        assert_eq!(wave.source().amplitude(), 0.0);
        assert_eq!(wave.source().frequency_hz(), 0.0);
    }
}
