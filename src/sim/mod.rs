//! Deterministic physics simulation module
//!
//! Everything here is pure and synchronous:
//! - One [`step`] call performs a whole tick and returns
//! - No rendering, input, or I/O
//! - The caller owns the body and obstacle lists and may add or remove
//!   entries only between ticks, never during `step`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    Contact, circle_circle_contact, circle_rect_overlap, resolve_contact, resolve_obstacle,
    resolve_penetration,
};
pub use state::{Body, BodyConfigError, Obstacle};
pub use tick::{SimParams, StepReport, Strike, step};
