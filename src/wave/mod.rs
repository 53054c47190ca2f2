//! Wave-superposition core: sources, plane waves, the wave field and spawning.

mod field;
mod plane;
mod source;
mod spawn;

// Re-export public types
pub use field::WaveField;
pub use plane::PlaneWave;
pub use source::PointSource;
pub use spawn::{SpawnKind, WaveSpawner};
