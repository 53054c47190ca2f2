//! Rendering and recording configuration.

use std::path::PathBuf;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    /// Narrow lens, close to the surface
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,

    /// Surface fill colour (0xRRGGBB, sRGB)
    pub surface_color: u32,

    /// Vertex point overlay colour (0xRRGGBB, sRGB)
    pub point_color: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 20.0,
            near_plane_m: 0.01,
            far_plane_m: 1000.0,
            surface_color: 0x2BC3CC,
            point_color: 0xFFFFFF,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Convert a 0xRRGGBB sRGB colour to linear RGBA for an sRGB render target
pub fn hex_to_linear_rgba(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xFF) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0), 1.0]
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32, fps: u32) -> Self {
        Self {
            duration_secs,
            output_dir: PathBuf::from("recording"),
            fps,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> u64 {
        (self.duration_secs * self.fps as f32).ceil().max(0.0) as u64
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of a single captured frame
    pub fn frame_path(&self, frame: u64) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame))
    }
}
