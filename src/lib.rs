//! Wavefield library - plane-wave interference on a height-field surface

pub mod camera;
pub mod cli;
pub mod clock;
pub mod error;
pub mod input;
pub mod params;
pub mod rendering;
pub mod simulation;
pub mod surface;
pub mod wave;
