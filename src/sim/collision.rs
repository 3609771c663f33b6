//! Contact generation and resolution
//!
//! Circle-circle pairs get the full treatment: positional correction to
//! remove the overlap, then a normal-direction impulse scaled by restitution.
//! Circle-rectangle contacts use a cheaper angle-reflection response, since
//! obstacles are always static.

use glam::Vec2;

use super::state::{Body, Obstacle};
use crate::rotate;

/// Geometry of a detected circle-circle overlap
///
/// Transient: computed fresh for every pair check, never kept across ticks.
/// Holds no body references; resolvers take the two bodies alongside it.
#[derive(Debug, Clone)]
pub struct Contact {
    /// Unit normal from body `a` toward body `b`
    pub normal: Vec2,
    /// Surface point of `b` along the negative normal
    pub start: Vec2,
    /// Surface point of `a` along the normal
    pub end: Vec2,
    /// Penetration distance, `|end - start|`
    pub depth: f32,
}

/// Detect overlap between two disks
///
/// Concentric centers have no meaningful normal; an arbitrary `+X` fallback
/// keeps the tick alive, since two bodies spawned on the same point is a
/// valid state rather than an error.
pub fn circle_circle_contact(a: &Body, b: &Body) -> Option<Contact> {
    let ab = b.pos - a.pos;
    let radius_sum = a.radius + b.radius;
    if ab.length_squared() > radius_sum * radius_sum {
        return None;
    }

    let normal = ab.try_normalize().unwrap_or(Vec2::X);
    let start = b.pos - normal * b.radius;
    let end = a.pos + normal * a.radius;
    let depth = (end - start).length();

    Some(Contact {
        normal,
        start,
        end,
        depth,
    })
}

/// True when the disk overlaps the rectangle
///
/// Boolean only; [`resolve_obstacle`] recomputes the geometry it needs. Also
/// useful to the owner for sensor rectangles (prize slots).
pub fn circle_rect_overlap(body: &Body, rect: &Obstacle) -> bool {
    let nearest = rect.closest_point(body.pos);
    (body.pos - nearest).length_squared() <= body.radius * body.radius
}

/// Positional correction: push the bodies apart along the contact normal in
/// proportion to their inverse masses
///
/// Heavier bodies move less; static bodies not at all. No-op when both are
/// static (guards the division).
pub fn resolve_penetration(a: &mut Body, b: &mut Body, contact: &Contact) {
    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum <= 0.0 {
        return;
    }

    let da = contact.depth * a.inv_mass() / inv_mass_sum;
    let db = contact.depth * b.inv_mass() / inv_mass_sum;

    a.pos -= contact.normal * da;
    b.pos += contact.normal * db;
}

/// Full circle-circle response: de-penetrate, then exchange a single
/// normal-direction impulse
///
/// Effective restitution is the smaller of the two. No friction or
/// tangential component is modeled.
pub fn resolve_contact(a: &mut Body, b: &mut Body, contact: &Contact) {
    resolve_penetration(a, b, contact);

    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum <= 0.0 {
        return;
    }

    let e = a.restitution.min(b.restitution);
    let vrel = a.vel - b.vel;
    let v_rel_dot_normal = vrel.dot(contact.normal);

    let magnitude = -(1.0 + e) * v_rel_dot_normal / inv_mass_sum;
    let impulse = contact.normal * magnitude;

    a.apply_impulse(impulse);
    b.apply_impulse(-impulse);
}

/// Peg/wall bounce against a static rectangle
///
/// Cheaper than the impulse path: when the body is moving toward the
/// rectangle, rotate its velocity by twice the angle from the incoming
/// direction to the surface tangent, then push the body out with an impulse
/// equal to the penetration depth along the separation direction.
pub fn resolve_obstacle(body: &mut Body, rect: &Obstacle) {
    let nearest = rect.closest_point(body.pos);
    let dist = body.pos - nearest;

    if body.vel.dot(dist) < 0.0 {
        let surface = Vec2::new(-dist.y, dist.x);
        let theta = surface.y.atan2(surface.x) - body.vel.y.atan2(body.vel.x);
        body.vel = rotate(body.vel, 2.0 * theta);
    }

    let depth = body.radius - dist.length();
    // center exactly on the rectangle: no separation direction, pick +X
    let outward = dist.try_normalize().unwrap_or(Vec2::X);
    body.apply_impulse(outward * depth);
}
