//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (meters, seconds, Hz, etc.)
//! - Documented ranges and meanings

mod camera;
mod render;
mod simulation;

// Re-export all types
pub use camera::OrbitControlsParams;
pub use render::{hex_to_linear_rgba, RecordingConfig, RenderConfig};
pub use simulation::{SimulationParams, SpawnYRange, WaveDefaults};
