//! Command-line argument parsing.

use clap::Parser;

use crate::params::{RecordingConfig, RenderConfig, SimulationParams, SpawnYRange};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavefield")]
#[command(about = "Interactive plane-wave interference visualizer", long_about = None)]
pub struct Args {
    /// Grid extent along x (meters)
    #[arg(long, value_name = "METERS", default_value_t = 50.0)]
    pub size_x: f64,

    /// Grid extent along y (meters)
    #[arg(long, value_name = "METERS", default_value_t = 50.0)]
    pub size_y: f64,

    /// Vertex spacing along x (meters)
    #[arg(long, value_name = "METERS", default_value_t = 0.5)]
    pub dx: f64,

    /// Vertex spacing along y (meters)
    #[arg(long, value_name = "METERS", default_value_t = 0.5)]
    pub dy: f64,

    /// Target frame rate; simulation time advances dt/fps per frame
    #[arg(long, value_name = "HZ", default_value_t = 60.0)]
    pub fps: f64,

    /// Simulated seconds per second at the target frame rate
    #[arg(long, default_value_t = 10.0)]
    pub dt: f64,

    /// Seed for spawned waves (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep at most this many waves, dropping the oldest
    #[arg(long, value_name = "COUNT")]
    pub max_waves: Option<usize>,

    /// Range for the y coordinate of spawned sources
    #[arg(long, value_enum, default_value_t = SpawnYRange::Width)]
    pub spawn_y_range: SpawnYRange,

    /// Start with the reference wave instead of a flat surface
    #[arg(long)]
    pub default_wave: bool,

    /// Record frames to PNG for this many seconds, then exit
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Window width (pixels)
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

impl Args {
    /// Build simulation parameters from command-line arguments
    pub fn simulation_params(&self) -> SimulationParams {
        SimulationParams {
            size_x_m: self.size_x,
            size_y_m: self.size_y,
            dx_m: self.dx,
            dy_m: self.dy,
            frames_per_second: self.fps,
            dt: self.dt,
            max_waves: self.max_waves,
            spawn_y_range: self.spawn_y_range,
            seed: self.seed,
            with_default_wave: self.default_wave,
            ..SimulationParams::default()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            ..RenderConfig::default()
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn recording_config(&self) -> std::io::Result<Option<RecordingConfig>> {
        let Some(duration) = self.record else {
            return Ok(None);
        };

        let config = RecordingConfig::new(duration, self.fps.round().max(1.0) as u32);
        std::fs::create_dir_all(config.frames_dir())?;
        log::info!(
            "Recording {} frames to {}",
            config.total_frames(),
            config.frames_dir().display()
        );
        Ok(Some(config))
    }
}
