//! Error types for configuration, GPU setup, frame capture and the app shell.

use thiserror::Error;

/// Invalid simulation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid extent {name} must be a positive finite number, got {value}")]
    Extent { name: &'static str, value: f64 },

    #[error("grid spacing {name} must be a positive finite number, got {value}")]
    Spacing { name: &'static str, value: f64 },

    #[error("frame rate must be a positive finite number, got {0}")]
    FrameRate(f64),

    #[error("time step multiplier must be a positive finite number, got {0}")]
    TimeStep(f64),

    #[error("wave cap must be at least 1")]
    ZeroWaveCap,
}

/// Errors that can occur while setting up the GPU renderer
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors raised while saving a recorded frame
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to map capture buffer: {0}")]
    BufferMapping(#[from] wgpu::BufferAsyncError),

    #[error("capture buffer callback dropped before mapping finished")]
    ChannelDisconnected,

    #[error("failed to save frame: {0}")]
    Image(#[from] image::ImageError),
}

/// Top-level application errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
