//! Orbit camera configuration.

/// Orbit controls tuning and initial placement
#[derive(Debug, Clone)]
pub struct OrbitControlsParams {
    /// Initial eye position relative to the orbit target (meters, Z up)
    pub initial_offset: [f32; 3],

    /// Rotation sensitivity (full turn per viewport height at 1.0)
    pub rotate_speed: f32,

    /// Pan sensitivity (1.0 moves the target with the cursor)
    pub pan_speed: f32,

    /// Zoom sensitivity (each wheel line scales distance by 0.95^zoom_speed)
    pub zoom_speed: f32,

    /// Closest allowed distance to the target (meters)
    pub min_distance_m: f32,

    /// Farthest allowed distance to the target (meters)
    pub max_distance_m: f32,
}

impl Default for OrbitControlsParams {
    fn default() -> Self {
        Self {
            initial_offset: [0.0, -10.0, 10.0],
            rotate_speed: 0.5,
            pan_speed: 0.5,
            zoom_speed: 0.5,
            min_distance_m: 0.5,
            max_distance_m: 800.0,
        }
    }
}
