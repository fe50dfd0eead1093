//! Frame clock for Vantage
//!
//! Turns the raw wall-clock delta between frames into the `dt` the camera
//! integrates with.

use serde::{Deserialize, Serialize};

/// Configuration for the frame clock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many simulated seconds pass per real second
    pub time_scale: f32,
    /// Maximum delta time, so a stalled frame does not teleport the camera
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
        }
    }
}

/// Frame time tracking
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
}

impl GameTime {
    /// Create a new frame clock with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Update the clock with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        self.unscaled_delta_time = raw_delta.clamp(0.0, self.config.max_delta_time);
        self.frame_count += 1;

        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
    }
}
