//! Core simulation state types
//!
//! A [`Body`] is a circular point mass, dynamic or static. An [`Obstacle`]
//! is an immutable axis-aligned rectangle that reflects colliding bodies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::STATIC_EPSILON;

/// Rejected body configuration, caught at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyConfigError {
    /// Radius must be strictly positive
    NonPositiveRadius(f32),
    /// Mass must be zero (static) or positive
    NegativeMass(f32),
}

impl std::fmt::Display for BodyConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveRadius(r) => write!(f, "body radius must be positive, got {r}"),
            Self::NegativeMass(m) => write!(f, "body mass must be non-negative, got {m}"),
        }
    }
}

impl std::error::Error for BodyConfigError {}

/// A simulated disk
///
/// Mass `0` makes the body static: it never moves and silently ignores
/// impulses. Mass and the accumulated force sum are private so they cannot
/// drift out of sync with the cached inverse mass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Forces accumulated since the last integration
    sum_force: Vec2,
    pub radius: f32,
    mass: f32,
    inv_mass: f32,
    /// Bounce-energy retention in [0, 1]
    pub restitution: f32,
}

impl Body {
    /// Create a body at `(x, y)` with default restitution 1.0
    pub fn new(x: f32, y: f32, radius: f32, mass: f32) -> Result<Self, BodyConfigError> {
        if radius <= 0.0 {
            return Err(BodyConfigError::NonPositiveRadius(radius));
        }
        if mass < 0.0 {
            return Err(BodyConfigError::NegativeMass(mass));
        }
        let inv_mass = if mass != 0.0 { 1.0 / mass } else { 0.0 };
        Ok(Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            sum_force: Vec2::ZERO,
            radius,
            mass,
            inv_mass,
            restitution: 1.0,
        })
    }

    /// Same as [`Body::new`] with an explicit restitution
    pub fn with_restitution(
        x: f32,
        y: f32,
        radius: f32,
        mass: f32,
        restitution: f32,
    ) -> Result<Self, BodyConfigError> {
        let mut body = Self::new(x, y, radius, mass)?;
        body.restitution = restitution;
        Ok(body)
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// True when the body has (numerically) zero inverse mass
    ///
    /// This is the single gate for all motion: static bodies never integrate
    /// and never accept impulses.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.inv_mass.abs() < STATIC_EPSILON
    }

    /// Accumulate `f` into this tick's force sum
    pub fn apply_force(&mut self, f: Vec2) {
        self.sum_force += f;
    }

    /// Instantaneous velocity change; no-op on static bodies
    pub fn apply_impulse(&mut self, j: Vec2) {
        if self.is_static() {
            return;
        }
        self.vel += j * self.inv_mass;
    }

    /// Explicit Euler step: force sum becomes acceleration, then velocity,
    /// then position. Clears the force sum; no-op on static bodies.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_static() {
            return;
        }
        let acc = self.sum_force * self.inv_mass;
        self.vel += acc * dt;
        self.pos += self.vel * dt;
        self.sum_force = Vec2::ZERO;
    }
}

/// An immutable axis-aligned rectangle
///
/// Obstacles have no mass or velocity; colliding bodies treat them as
/// infinitely massive reflectors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Closest point on the rectangle to `p` (equals `p` when `p` is inside)
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.width),
            p.y.clamp(self.y, self.y + self.height),
        )
    }
}
