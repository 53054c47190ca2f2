//! Orbit camera around the surface centre (Z up).

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Vec3};

use crate::params::{OrbitControlsParams, RenderConfig};

/// Keeps the camera off the poles so `look_at` stays well defined
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Orbit camera driven by mouse drag and wheel
pub struct OrbitCamera {
    /// Horizontal angle around +Z (radians, 0 = looking along +Y)
    pub yaw: f32,

    /// Elevation above the XY plane (radians)
    pub pitch: f32,

    /// Distance from the target (meters)
    pub distance: f32,

    /// Point the camera orbits around
    pub target: Vec3,

    controls: OrbitControlsParams,
}

impl OrbitCamera {
    /// Create a camera placed at `target + controls.initial_offset`
    pub fn new(target: Vec3, controls: OrbitControlsParams) -> Self {
        let offset = Vec3::from_array(controls.initial_offset);
        let distance = offset
            .length()
            .clamp(controls.min_distance_m, controls.max_distance_m);
        let planar = offset.truncate().length();

        Self {
            yaw: offset.x.atan2(-offset.y),
            pitch: offset.z.atan2(planar).clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance,
            target,
            controls,
        }
    }

    /// Calculate the camera's world position
    pub fn position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        let offset = Vec3::new(
            horizontal * self.yaw.sin(),
            -horizontal * self.yaw.cos(),
            self.distance * self.pitch.sin(),
        );
        self.target + offset
    }

    /// Rotate by a cursor drag of `(dx, dy)` pixels in a viewport `height` pixels tall
    pub fn rotate(&mut self, dx: f32, dy: f32, height: f32) {
        let scale = TAU * self.controls.rotate_speed / height.max(1.0);
        self.yaw -= dx * scale;
        self.pitch = (self.pitch + dy * scale).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Move the target so the surface follows a cursor drag of `(dx, dy)` pixels
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32, render_config: &RenderConfig) {
        // World size of one pixel at the target distance
        let half_fov = render_config.fov_degrees.to_radians() / 2.0;
        let per_pixel =
            2.0 * self.distance * half_fov.tan() / height.max(1.0) * self.controls.pan_speed;

        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Z).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();

        self.target += (-dx * right + dy * up) * per_pixel;
    }

    /// Dolly by `lines` wheel notches (positive zooms in)
    pub fn zoom(&mut self, lines: f32) {
        let scale = 0.95_f32.powf(self.controls.zoom_speed * lines);
        self.distance = (self.distance * scale)
            .clamp(self.controls.min_distance_m, self.controls.max_distance_m);
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Arguments
    /// * `aspect_ratio` - Current viewport width / height
    /// * `render_config` - Rendering configuration (FOV, clip planes)
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn view_proj_matrix(
        &self,
        aspect_ratio: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let eye = self.position();

        let view = Mat4::look_at_rh(eye, self.target, Vec3::Z);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            aspect_ratio,
            render_config.near_plane_m,
            render_config.far_plane_m,
        );

        (proj * view, eye)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_initial_offset() {
        let target = Vec3::new(25.0, 25.0, 0.0);
        let camera = OrbitCamera::new(target, OrbitControlsParams::default());

        assert_close(camera.position(), Vec3::new(25.0, 15.0, 10.0));
        assert!((camera.distance - 200.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_keeps_distance_and_clamps_pitch() {
        let mut camera = OrbitCamera::new(Vec3::ZERO, OrbitControlsParams::default());

        camera.rotate(120.0, 0.0, 720.0);
        assert!(((camera.position() - camera.target).length() - camera.distance).abs() < 1e-4);

        for _ in 0..100 {
            camera.rotate(0.0, 500.0, 720.0);
        }
        assert!(camera.pitch <= PITCH_LIMIT);

        for _ in 0..100 {
            camera.rotate(0.0, -500.0, 720.0);
        }
        assert!(camera.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_is_bounded() {
        let controls = OrbitControlsParams::default();
        let mut camera = OrbitCamera::new(Vec3::ZERO, controls.clone());

        let before = camera.distance;
        camera.zoom(1.0);
        assert!(camera.distance < before);

        for _ in 0..10_000 {
            camera.zoom(10.0);
        }
        assert_eq!(camera.distance, controls.min_distance_m);

        for _ in 0..10_000 {
            camera.zoom(-10.0);
        }
        assert_eq!(camera.distance, controls.max_distance_m);
    }

    #[test]
    fn test_pan_moves_target_sideways() {
        let mut camera = OrbitCamera::new(Vec3::ZERO, OrbitControlsParams::default());
        let render_config = RenderConfig::default();

        camera.pan(100.0, 0.0, 720.0, &render_config);
        // Looking along +Y, dragging right moves the target towards -X
        assert!(camera.target.x < 0.0);
        assert!(camera.target.y.abs() < 1e-4);
        assert!(camera.target.z.abs() < 1e-4);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let target = Vec3::new(25.0, 25.0, 0.0);
        let camera = OrbitCamera::new(target, OrbitControlsParams::default());
        let render_config = RenderConfig::default();

        let (view_proj, eye) =
            camera.view_proj_matrix(render_config.aspect_ratio(), &render_config);

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert!(view_proj.is_finite());

        // Target projects to the screen centre
        let clip = view_proj * camera.target.extend(1.0);
        assert!((clip.x / clip.w).abs() < 1e-4);
        assert!((clip.y / clip.w).abs() < 1e-4);
        assert!(eye.is_finite());
    }
}
