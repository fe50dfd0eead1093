//! Vantage Core - Core types and utilities shared by the Vantage crates
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Mathematical primitives (re-exported from glam)
//! - Transform with matrix composition and decomposition
//! - Frame clock turning raw frame deltas into clamped `dt` values

pub mod time;
pub mod types;

pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
pub use time::{GameTime, TimeConfig};
pub use types::{Transform, SCALE_EPSILON};
