//! Wavefield - watch plane waves interfere on a deforming surface.
//!
//! Press W for a coherent wave, R for a fully random one. Drag to orbit,
//! right-drag to pan, scroll to zoom.

use std::sync::Arc;

use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavefield::camera::OrbitCamera;
use wavefield::cli::Args;
use wavefield::error::AppError;
use wavefield::input::{spawn_for_key, CameraAction, InputState};
use wavefield::params::{OrbitControlsParams, RecordingConfig, RenderConfig};
use wavefield::rendering::{RenderSystem, Uniforms};
use wavefield::simulation::Simulation;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    simulation: Simulation,
    camera: OrbitCamera,
    input: InputState,

    // Configuration
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    // First fatal error raised inside the event loop
    error: Option<AppError>,
}

impl App {
    fn new(
        simulation: Simulation,
        render_config: RenderConfig,
        recording_config: Option<RecordingConfig>,
    ) -> Self {
        let target = Vec3::from_array(simulation.grid.center());
        let camera = OrbitCamera::new(target, OrbitControlsParams::default());

        Self {
            window: None,
            render_system: None,
            simulation,
            camera,
            input: InputState::new(),
            render_config,
            recording_config,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attributes = Window::default_attributes()
            .with_title("Wavefield - Plane Wave Interference")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.simulation.grid,
            &self.render_config,
            self.recording_config.clone(),
        ))?;

        log::info!("Wavefield is running");
        log::info!("W: coherent wave, R: random wave, drag/right-drag/scroll: camera, ESC: quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.simulation.start();
        Ok(())
    }

    fn apply_camera(&mut self, action: CameraAction) {
        let height = self
            .render_system
            .as_ref()
            .map(|r| r.size().1)
            .unwrap_or(self.render_config.window_height) as f32;

        match action {
            CameraAction::Rotate { dx, dy } => self.camera.rotate(dx, dy, height),
            CameraAction::Pan { dx, dy } => self.camera.pan(dx, dy, height, &self.render_config),
            CameraAction::Zoom { lines } => self.camera.zoom(lines),
        }
    }

    /// Advance the simulation one tick and draw it
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        let frame = self.simulation.frame_count();
        self.simulation.tick();
        render_system.sync_vertices(&mut self.simulation.grid);

        let (view_proj, _eye) = self
            .camera
            .view_proj_matrix(render_system.aspect_ratio(), &self.render_config);
        render_system.update_uniforms(&Uniforms::new(view_proj, &self.render_config));

        match render_system.render(frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if let Some(ref recording) = self.recording_config {
            if frame + 1 >= recording.total_frames() {
                log::info!("Recording complete ({} frames)", frame + 1);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else if let Some(kind) = spawn_for_key(code) {
                    self.simulation.spawn(kind);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.mouse_button(button, state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(action) = self.input.cursor_moved(position) {
                    self.apply_camera(action);
                }
            }
            WindowEvent::CursorLeft { .. } => self.input.cursor_left(),
            WindowEvent::MouseWheel { delta, .. } => {
                let action = self.input.wheel(delta);
                self.apply_camera(action);
            }
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();

    let simulation = Simulation::new(args.simulation_params())?;
    let recording_config = args.recording_config()?;

    let mut app = App::new(simulation, args.render_config(), recording_config);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
