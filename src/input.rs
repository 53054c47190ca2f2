//! Keyboard and mouse handling.
//!
//! Keys map to spawn requests; mouse drags and the wheel drive the orbit
//! camera. Raw winit events are folded into an [`InputState`] that reports
//! what the app should do next.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::wave::SpawnKind;

/// Pixels treated as one wheel line for touchpads reporting pixel deltas
const PIXELS_PER_LINE: f64 = 40.0;

/// Spawn variant bound to a key, if any
pub fn spawn_for_key(key: KeyCode) -> Option<SpawnKind> {
    match key {
        KeyCode::KeyW => Some(SpawnKind::Coherent),
        KeyCode::KeyR => Some(SpawnKind::Random),
        _ => None,
    }
}

/// Camera action produced by mouse input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraAction {
    Rotate { dx: f32, dy: f32 },
    Pan { dx: f32, dy: f32 },
    Zoom { lines: f32 },
}

/// Mouse state tracked between events
#[derive(Debug, Default)]
pub struct InputState {
    cursor: Option<PhysicalPosition<f64>>,
    rotating: bool,
    panning: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.rotating = pressed,
            MouseButton::Right | MouseButton::Middle => self.panning = pressed,
            _ => {}
        }
    }

    /// Record a cursor move; returns the drag action if a button is held
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<CameraAction> {
        let previous = self.cursor.replace(position)?;
        let dx = (position.x - previous.x) as f32;
        let dy = (position.y - previous.y) as f32;

        if self.rotating {
            Some(CameraAction::Rotate { dx, dy })
        } else if self.panning {
            Some(CameraAction::Pan { dx, dy })
        } else {
            None
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
        self.rotating = false;
        self.panning = false;
    }

    pub fn wheel(&self, delta: MouseScrollDelta) -> CameraAction {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
        };
        CameraAction::Zoom { lines }
    }
}
