//! Simulation context: clock, wave field, surface and spawner in one place.

use std::f64::consts::TAU;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::SimulationClock;
use crate::error::ConfigError;
use crate::params::SimulationParams;
use crate::surface::SurfaceGrid;
use crate::wave::{PlaneWave, PointSource, SpawnKind, WaveField, WaveSpawner};

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Before the first frame
    Idle,

    /// Ticking once per frame
    Running,
}

/// Owns everything a frame update reads and writes
pub struct Simulation {
    pub grid: SurfaceGrid,
    field: WaveField,
    clock: SimulationClock,
    spawner: WaveSpawner<StdRng>,
    params: SimulationParams,
    state: LoopState,
}

impl Simulation {
    /// Create a simulation from validated parameters
    pub fn new(params: SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut field = WaveField::with_max_waves(params.max_waves);
        if params.with_default_wave {
            field.add_wave(reference_wave(&params));
        }

        Ok(Self {
            grid: SurfaceGrid::new(&params),
            field,
            clock: SimulationClock::new(params.dt, params.frames_per_second),
            spawner: WaveSpawner::new(&params, rng),
            params,
            state: LoopState::Idle,
        })
    }

    /// Enter the running state (no-op once running)
    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            log::info!(
                "Simulation started: {}x{} vertices, step {:.4}s, {} wave(s)",
                self.grid.dimensions().0,
                self.grid.dimensions().1,
                self.clock.step(),
                self.field.len()
            );
            self.state = LoopState::Running;
        }
    }

    /// Run one frame: write heights at the current time, then advance the clock.
    ///
    /// # Returns
    /// The simulation time the heights were computed for
    pub fn tick(&mut self) -> f64 {
        self.start();

        let t = self.clock.time();
        self.field.update_heights(&mut self.grid, t);
        self.clock.advance();
        t
    }

    /// Append a freshly randomized wave of the given kind
    pub fn spawn(&mut self, kind: SpawnKind) {
        let wave = self.spawner.spawn(kind);
        let (x, y) = wave.source().position();
        let (kx, ky) = wave.wavevector();
        log::info!(
            "Spawned {:?} wave at ({:.2}, {:.2}) k=({:.3}, {:.3}) amp={:.3} f={:.4}Hz",
            kind,
            x,
            y,
            kx,
            ky,
            wave.source().amplitude(),
            wave.source().frequency_hz()
        );

        self.field.add_wave(wave);
        log::info!("{} wave(s) active", self.field.len());
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.ticks()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }
}

/// The reference wave: a default source at the origin travelling along +x
/// at the reference wavelength
pub fn reference_wave(params: &SimulationParams) -> PlaneWave {
    let defaults = params.wave_defaults();
    let source = PointSource::new(
        0.0,
        0.0,
        defaults.amplitude,
        defaults.frequency_hz,
        defaults.phase_rad,
    );
    PlaneWave::new(Arc::new(source), TAU / defaults.wavelength_m, 0.0)
}
