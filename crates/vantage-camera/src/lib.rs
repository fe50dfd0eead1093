//! Vantage Camera - First-person camera and input handling
//!
//! Provides the camera state machine (keyboard movement, mouse look, scroll
//! zoom, view/projection matrices) and the mapping from winit events onto it.

pub mod camera;
pub mod input;

pub use camera::{CameraConfig, CameraEvent, CameraState, DepthRange, LookMode};
pub use input::{
    InputAction, InputBinding, InputBindings, InputHandler, InputState, MovementAxes, MovementAxis,
};
