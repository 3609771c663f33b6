//! Fixed-step simulation driver
//!
//! One [`step`] call performs a whole tick in order: gravity, integration,
//! lateral containment, the O(n²) circle pair scan, obstacle bounces, and
//! the exit/strike report. The caller owns the lists and mutates them only
//! between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{circle_circle_contact, circle_rect_overlap, resolve_contact, resolve_obstacle};
use super::state::{Body, Obstacle};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, GRAVITY, WALL_DAMPING};

/// Per-tick tunables
///
/// `Default` matches the reference 480x640 playfield with y-down gravity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimParams {
    /// Uniform external force applied to every dynamic body each tick
    pub gravity: Vec2,
    /// Left lateral bound
    pub min_x: f32,
    /// Right lateral bound
    pub max_x: f32,
    /// Bodies below this y are reported as exited
    pub floor_y: f32,
    /// Fraction of horizontal speed kept after a lateral-bound bounce
    pub wall_damping: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, GRAVITY),
            min_x: 0.0,
            max_x: FIELD_WIDTH,
            floor_y: FIELD_HEIGHT,
            wall_damping: WALL_DAMPING,
        }
    }
}

/// A body/obstacle hit recorded during the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    pub body: usize,
    pub obstacle: usize,
}

/// What happened during one tick
///
/// Indices refer to the slices passed to [`step`]. Scoring and removal are
/// the caller's job; `exited` is ascending, so removing by index in reverse
/// order stays stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepReport {
    /// Bodies past the lower bound, candidates for removal
    pub exited: Vec<usize>,
    /// Obstacle hits, in scan order
    pub strikes: Vec<Strike>,
}

/// Advance the world by `dt` seconds
pub fn step(
    params: &SimParams,
    bodies: &mut [Body],
    obstacles: &[Obstacle],
    dt: f32,
) -> StepReport {
    for body in bodies.iter_mut() {
        if !body.is_static() {
            body.apply_force(params.gravity);
        }
    }

    for body in bodies.iter_mut() {
        body.integrate(dt);
    }

    // lateral containment; a wall bounce is not a contact
    for body in bodies.iter_mut() {
        if body.pos.x - body.radius <= params.min_x {
            body.pos.x = params.min_x + body.radius;
            body.vel.x *= -params.wall_damping;
        } else if body.pos.x + body.radius >= params.max_x {
            body.pos.x = params.max_x - body.radius;
            body.vel.x *= -params.wall_damping;
        }
    }

    // exhaustive unordered pair scan; fine at the supported body counts
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if let Some(contact) = circle_circle_contact(a, b) {
                resolve_contact(a, b, &contact);
            }
        }
    }

    let mut report = StepReport::default();

    for (bi, body) in bodies.iter_mut().enumerate() {
        for (oi, obstacle) in obstacles.iter().enumerate() {
            if circle_rect_overlap(body, obstacle) {
                resolve_obstacle(body, obstacle);
                report.strikes.push(Strike {
                    body: bi,
                    obstacle: oi,
                });
            }
        }
    }

    for (i, body) in bodies.iter().enumerate() {
        if body.pos.y > params.floor_y {
            log::debug!("body {i} exited at x={:.1}", body.pos.x);
            report.exited.push(i);
        }
    }

    report
}
