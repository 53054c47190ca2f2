//! Simulation grid, clock and default wave parameters.

use std::f64::consts::TAU;

use crate::error::ConfigError;

/// Range used for the y coordinate of spawned sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SpawnYRange {
    /// Draw y from [0, size_x) like x (the long-standing behaviour)
    #[default]
    Width,

    /// Draw y from [0, size_y)
    Height,
}

/// Simulation sizing, timing and default wave constants
#[derive(Debug, Clone)]
pub struct SimulationParams {
    /// Grid extent along x (meters)
    pub size_x_m: f64,

    /// Grid extent along y (meters)
    pub size_y_m: f64,

    /// Vertex spacing along x (meters)
    pub dx_m: f64,

    /// Vertex spacing along y (meters)
    pub dy_m: f64,

    /// Target frame rate (Hz); the clock advances `dt / frames_per_second` per tick
    pub frames_per_second: f64,

    /// Simulated seconds per wall-clock second at the target frame rate
    pub dt: f64,

    /// Amplitude of coherent sources (dimensionless weighting)
    pub default_amplitude: f64,

    /// Frequency of coherent sources (Hz)
    pub default_frequency_hz: f64,

    /// Phase of coherent sources (radians)
    pub default_phase_rad: f64,

    /// Upper bound on live waves; `None` lets the field grow without limit
    pub max_waves: Option<usize>,

    /// Where spawned sources draw their y coordinate from
    pub spawn_y_range: SpawnYRange,

    /// Seed for the spawn RNG; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Insert the reference wave at start-up instead of starting flat
    pub with_default_wave: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            size_x_m: 50.0,
            size_y_m: 50.0,
            dx_m: 0.5,
            dy_m: 0.5,
            frames_per_second: 60.0,
            dt: 10.0,
            default_amplitude: 1.0,
            default_frequency_hz: 0.1,
            default_phase_rad: 0.0,
            max_waves: None,
            spawn_y_range: SpawnYRange::Width,
            seed: None,
            with_default_wave: false,
        }
    }
}

impl SimulationParams {
    /// Simulated seconds added per frame
    pub fn time_step(&self) -> f64 {
        self.dt / self.frames_per_second
    }

    /// Number of cells along x and y (at least one each way)
    pub fn segments(&self) -> (usize, usize) {
        (
            (self.size_x_m / self.dx_m).round().max(1.0) as usize,
            (self.size_y_m / self.dy_m).round().max(1.0) as usize,
        )
    }

    /// Default wave constants derived from these parameters
    pub fn wave_defaults(&self) -> WaveDefaults {
        WaveDefaults {
            amplitude: self.default_amplitude,
            frequency_hz: self.default_frequency_hz,
            phase_rad: self.default_phase_rad,
            wavelength_m: self.size_x_m / 10.0,
        }
    }

    /// Validate configuration before building the grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("size_x", self.size_x_m), ("size_y", self.size_y_m)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Extent { name, value });
            }
        }
        for (name, value) in [("dx", self.dx_m), ("dy", self.dy_m)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Spacing { name, value });
            }
        }
        if !(self.frames_per_second.is_finite() && self.frames_per_second > 0.0) {
            return Err(ConfigError::FrameRate(self.frames_per_second));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::TimeStep(self.dt));
        }
        if self.max_waves == Some(0) {
            return Err(ConfigError::ZeroWaveCap);
        }
        Ok(())
    }
}

/// Constants for coherent waves and the bound on random wavevectors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveDefaults {
    pub amplitude: f64,
    pub frequency_hz: f64,
    pub phase_rad: f64,

    /// Reference wavelength (meters), a tenth of the grid width
    pub wavelength_m: f64,
}

impl WaveDefaults {
    /// Wavenumber of the reference wavelength (rad/m); random wavevectors
    /// have magnitude strictly below this
    pub fn max_wavenumber(&self) -> f64 {
        TAU / self.wavelength_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SimulationParams::default();
        assert_eq!(params.segments(), (100, 100));
        assert!((params.time_step() - 10.0 / 60.0).abs() < 1e-15);

        let defaults = params.wave_defaults();
        assert_eq!(defaults.wavelength_m, 5.0);
        assert!((defaults.max_wavenumber() - TAU / 5.0).abs() < 1e-15);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_grid() {
        let mut params = SimulationParams::default();
        params.dx_m = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::Spacing { name: "dx", .. })
        ));

        let mut params = SimulationParams::default();
        params.size_y_m = -3.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::Extent { name: "size_y", .. })
        ));

        let mut params = SimulationParams::default();
        params.frames_per_second = 0.0;
        assert!(matches!(params.validate(), Err(ConfigError::FrameRate(_))));

        for dt in [0.0, -10.0] {
            let params = SimulationParams {
                dt,
                ..SimulationParams::default()
            };
            assert!(matches!(params.validate(), Err(ConfigError::TimeStep(_))));
        }

        let mut params = SimulationParams::default();
        params.max_waves = Some(0);
        assert!(matches!(params.validate(), Err(ConfigError::ZeroWaveCap)));
    }

    #[test]
    fn test_segments_round_to_nearest() {
        let params = SimulationParams {
            dx_m: 0.3,
            ..SimulationParams::default()
        };
        assert_eq!(params.segments(), (167, 100));

        let params = SimulationParams {
            dy_m: 400.0,
            ..SimulationParams::default()
        };
        assert_eq!(params.segments(), (100, 1));
    }

    #[test]
    fn test_validate_accepts_degenerate_wave_defaults() {
        let params = SimulationParams {
            default_amplitude: -2.0,
            default_frequency_hz: 0.0,
            ..SimulationParams::default()
        };
        assert!(params.validate().is_ok());
    }
}
