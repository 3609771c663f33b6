//! Peg Drop - impulse-based 2D physics core for a Plinko-style drop game
//!
//! Core module:
//! - `sim`: Deterministic physics simulation (bodies, contacts, impulse resolution)
//!
//! The crate draws nothing and reads no input. The owning application feeds
//! its body and obstacle lists into [`sim::step`] once per tick and reads the
//! returned [`sim::StepReport`] to drive scoring, spawning, removal and
//! rendering.

pub mod sim;

pub use sim::{Body, Contact, Obstacle, SimParams, StepReport, Strike};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Width of the reference playfield
    pub const FIELD_WIDTH: f32 = 480.0;
    /// Height of the reference playfield; bodies below this are reported as exited
    pub const FIELD_HEIGHT: f32 = 640.0;
    /// Downward gravity force (y-down screen coordinates)
    pub const GRAVITY: f32 = 980.0;
    /// Fraction of horizontal speed kept after bouncing off a lateral bound
    pub const WALL_DAMPING: f32 = 0.9;
    /// Inverse-mass tolerance below which a body counts as static
    pub const STATIC_EPSILON: f32 = 0.005;
    /// Restitution of player-dropped bodies (low enough to settle)
    pub const DROP_RESTITUTION: f32 = 0.4;
    /// Soft cap on live bodies; the pair scan is O(n²)
    pub const MAX_BODIES: usize = 40;
}

/// Rotate a vector by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
