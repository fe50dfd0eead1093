//! Camera configuration

use serde::{Deserialize, Serialize};

/// Clip-space depth convention of the target graphics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthRange {
    /// OpenGL: near plane at -1, far plane at 1.
    #[default]
    NegativeOneToOne,
    /// Vulkan, Metal, D3D and wgpu: near plane at 0, far plane at 1.
    ZeroToOne,
}

/// Camera configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Mouse sensitivity (degrees per pixel)
    pub sensitivity: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
    /// Depth convention for the projection matrix
    pub depth_range: DepthRange,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            sensitivity: 0.1,
            near: 0.1,
            far: 100.0,
            depth_range: DepthRange::NegativeOneToOne,
        }
    }
}
