//! Vantage - first-person glTF viewer
//!
//! Loads a single mesh, opens a window and flies a first-person camera with
//! WASD/arrows, left-drag look and scroll zoom. Drawing belongs to an external
//! renderer; each frame's model/view/projection matrices are traced.

mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, trace, warn};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use vantage_assets::MeshAsset;
use vantage_camera::{CameraState, InputHandler};
use vantage_core::GameTime;

use settings::ViewerSettings;

/// How often the window title is refreshed with the camera readout
const TITLE_REFRESH_FRAMES: u64 = 30;

/// Application state
struct ViewerApp {
    settings: ViewerSettings,
    window: Option<Window>,
    input: InputHandler,
    camera: CameraState,
    game_time: GameTime,
    last_frame: Instant,
    mesh: MeshAsset,
}

impl ViewerApp {
    fn new(settings: ViewerSettings, mesh: MeshAsset) -> Self {
        Self {
            camera: CameraState::with_config(settings.camera),
            game_time: GameTime::new(settings.time.clone()),
            input: InputHandler::new(),
            window: None,
            last_frame: Instant::now(),
            mesh,
            settings,
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        self.game_time
            .update(now.duration_since(self.last_frame).as_secs_f32());
        self.last_frame = now;

        self.camera = self
            .camera
            .update_movement(self.input.state.held, self.game_time.delta_time);

        let Some(window) = &self.window else {
            return;
        };
        let size = window.inner_size();
        // Minimized
        if size.width == 0 || size.height == 0 {
            return;
        }
        let aspect_ratio = size.width as f32 / size.height as f32;

        let model = self.mesh.model_matrix();
        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix(aspect_ratio);
        trace!(
            frame = self.game_time.frame_count,
            "mvp = {:?}",
            projection * view * model
        );

        if self.game_time.frame_count % TITLE_REFRESH_FRAMES == 1 {
            let p = self.camera.position;
            window.set_title(&format!(
                "{} - pos ({:.1}, {:.1}, {:.1}) fov {:.0}",
                self.settings.window.title, p.x, p.y, p.z, self.camera.fov
            ));
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.settings.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.settings.window.width,
                self.settings.window.height,
            ));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                info!(
                    "Window created ({}x{})",
                    self.settings.window.width, self.settings.window.height
                );
                self.window = Some(window);
                self.last_frame = Instant::now();
            }
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::RedrawRequested => {
                self.frame();
                return;
            }
            _ => {}
        }

        if let Some(camera_event) = self.input.handle_window_event(&event) {
            self.camera = self.camera.handle_event(camera_event);
        }

        if self.input.state.quit_requested {
            info!("Quit requested");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Vantage viewer...");

    let settings = ViewerSettings::load();

    let model_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.model.path.clone());

    let mesh = match &model_path {
        Some(path) => {
            info!("Loading model {:?}", path);
            vantage_assets::load_mesh(path)
        }
        None => {
            warn!("No model given; pass a .gltf/.glb path or set model.path in settings.toml");
            MeshAsset::empty()
        }
    };

    if mesh.is_empty() {
        warn!("Mesh is empty, nothing will be drawn");
    } else {
        info!(
            "Mesh ready: {} vertices, {} indices, transform {:?}",
            mesh.vertex_count(),
            mesh.indices.len(),
            mesh.transform
        );
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(settings, mesh);
    event_loop
        .run_app(&mut app)
        .context("Event loop exited with an error")?;

    info!("Shutting down");
    Ok(())
}
