//! Camera system module
//!
//! First-person fly camera with click-to-look mouse control and scroll zoom.

mod config;
mod controller;

pub use config::{CameraConfig, DepthRange};
pub use controller::{CameraEvent, CameraState, LookMode, FOV_MAX, FOV_MIN, PITCH_LIMIT};
