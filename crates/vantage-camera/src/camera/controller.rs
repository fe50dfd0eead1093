//! First-person camera state with mouse look and zoom

use glam::{Mat4, Vec2, Vec3};

use crate::input::{MovementAxes, MovementAxis};

use super::{CameraConfig, DepthRange};

/// Pitch is kept within `[-PITCH_LIMIT, PITCH_LIMIT]` degrees so the view
/// never flips over the poles.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view in degrees
pub const FOV_MIN: f32 = 1.0;
/// Widest field of view in degrees
pub const FOV_MAX: f32 = 45.0;

/// Whether mouse movement currently steers the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookMode {
    /// Look button released, cursor motion ignored
    #[default]
    Idle,
    /// Look button held, cursor motion turns the camera
    Tracking,
}

/// Camera-relevant input, already translated from window events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// Look button pressed, start tracking the cursor
    LookPressed,
    /// Look button released, stop tracking
    LookReleased,
    /// Absolute cursor position in window pixels
    CursorMoved(Vec2),
    /// Vertical scroll in lines (positive zooms in)
    Scrolled(f32),
}

/// First-person camera state.
///
/// A plain value: every update consumes the state and returns the next one,
/// so the frame loop owns the only live copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Configuration
    pub config: CameraConfig,
    /// Eye position in world space
    pub position: Vec3,
    /// Unit view direction, derived from yaw and pitch
    pub front: Vec3,
    /// World up
    pub up: Vec3,
    /// Horizontal angle in degrees (unbounded)
    pub yaw: f32,
    /// Vertical angle in degrees
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Last cursor position seen, in window pixels
    pub last_cursor: Vec2,
    /// No look baseline yet; the next delta is discarded
    pub first_mouse: bool,
    /// Current look mode
    pub mode: LookMode,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::with_config(CameraConfig::default())
    }
}

impl CameraState {
    /// Create a camera with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera at `(0, 0, 3)` looking down `-Z` with custom config
    pub fn with_config(config: CameraConfig) -> Self {
        Self {
            config,
            position: Vec3::new(0.0, 0.0, 3.0),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            fov: FOV_MAX,
            last_cursor: Vec2::new(400.0, 300.0),
            first_mouse: true,
            mode: LookMode::Idle,
        }
    }

    /// Unit strafe direction (`front x up`)
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    /// Move along the held axes for `dt` seconds.
    ///
    /// Each axis contributes `move_speed * dt` on its own, so holding two
    /// perpendicular axes moves faster than one.
    #[must_use]
    pub fn update_movement(mut self, axes: MovementAxes, dt: f32) -> Self {
        let velocity = self.config.move_speed * dt.max(0.0);
        let right = self.right();

        for axis in axes.iter() {
            let direction = match axis {
                MovementAxis::Forward => self.front,
                MovementAxis::Back => -self.front,
                MovementAxis::Left => -right,
                MovementAxis::Right => right,
            };
            self.position += direction * velocity;
        }
        self
    }

    /// Start tracking the mouse. The first delta afterwards only sets the
    /// baseline.
    #[must_use]
    pub fn begin_look(mut self) -> Self {
        if self.mode == LookMode::Idle {
            self.mode = LookMode::Tracking;
            self.first_mouse = true;
        }
        self
    }

    /// Stop tracking the mouse and arm the baseline for the next press.
    #[must_use]
    pub fn end_look(mut self) -> Self {
        self.mode = LookMode::Idle;
        self.first_mouse = true;
        self
    }

    /// Turn the camera by a pixel delta while tracking.
    ///
    /// Screen Y grows downward, so `dy` is negated before it reaches pitch.
    #[must_use]
    pub fn apply_look_delta(mut self, dx: f32, dy: f32, sensitivity: f32) -> Self {
        if self.mode == LookMode::Idle {
            return self;
        }
        if self.first_mouse {
            self.first_mouse = false;
            return self;
        }

        self.yaw += dx * sensitivity;
        self.pitch = (self.pitch - dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = direction_from_angles(self.yaw, self.pitch);
        self
    }

    /// Feed an absolute cursor position; the delta from the previous one is
    /// applied with the configured sensitivity.
    #[must_use]
    pub fn cursor_moved(mut self, cursor: Vec2) -> Self {
        let delta = cursor - self.last_cursor;
        self.last_cursor = cursor;
        self.apply_look_delta(delta.x, delta.y, self.config.sensitivity)
    }

    /// Zoom by a scroll amount, clamping the field of view afterwards.
    #[must_use]
    pub fn apply_zoom_delta(mut self, scroll_y: f32) -> Self {
        self.fov = (self.fov - scroll_y).clamp(FOV_MIN, FOV_MAX);
        self
    }

    /// Apply a translated input event
    #[must_use]
    pub fn handle_event(self, event: CameraEvent) -> Self {
        match event {
            CameraEvent::LookPressed => self.begin_look(),
            CameraEvent::LookReleased => self.end_look(),
            CameraEvent::CursorMoved(cursor) => self.cursor_moved(cursor),
            CameraEvent::Scrolled(scroll_y) => self.apply_zoom_delta(scroll_y),
        }
    }

    /// Get the view matrix (right-handed look-at)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Get the right-handed perspective projection for the configured depth range
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let fov_radians = self.fov.to_radians();
        let aspect_ratio = aspect_ratio.max(f32::EPSILON);
        let (near, far) = (self.config.near, self.config.far);

        match self.config.depth_range {
            DepthRange::ZeroToOne => Mat4::perspective_rh(fov_radians, aspect_ratio, near, far),
            DepthRange::NegativeOneToOne => {
                Mat4::perspective_rh_gl(fov_radians, aspect_ratio, near, far)
            }
        }
    }
}

/// Unit direction for yaw/pitch given in degrees
fn direction_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}
