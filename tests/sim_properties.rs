//! Property tests for the contact pipeline

use glam::Vec2;
use proptest::prelude::*;

use peg_drop::sim::{Body, circle_circle_contact, resolve_contact, resolve_penetration};

fn body_at(pos: Vec2, radius: f32, mass: f32) -> Body {
    Body::new(pos.x, pos.y, radius, mass).unwrap()
}

proptest! {
    /// Circles farther apart than the sum of radii never produce a contact.
    #[test]
    fn separated_circles_never_contact(
        ra in 1.0f32..50.0,
        rb in 1.0f32..50.0,
        gap in 0.1f32..100.0,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let a = body_at(Vec2::ZERO, ra, 1.0);
        let dir = Vec2::from_angle(angle);
        let b = body_at(dir * (ra + rb + gap), rb, 1.0);

        prop_assert!(circle_circle_contact(&a, &b).is_none());
    }

    /// After positional correction, two dynamic bodies no longer overlap.
    #[test]
    fn penetration_resolution_separates(
        ra in 1.0f32..50.0,
        rb in 1.0f32..50.0,
        ma in 0.1f32..10.0,
        mb in 0.1f32..10.0,
        overlap in 0.0f32..0.99,
        angle in 0.0f32..std::f32::consts::TAU,
    ) {
        let sum = ra + rb;
        let mut a = body_at(Vec2::ZERO, ra, ma);
        let mut b = body_at(Vec2::from_angle(angle) * (sum * overlap), rb, mb);

        let contact = circle_circle_contact(&a, &b).unwrap();
        resolve_penetration(&mut a, &mut b, &contact);

        let dist = (b.pos - a.pos).length();
        prop_assert!(dist >= sum - sum * 1e-4 - 1e-3, "dist {} < {}", dist, sum);
    }

    /// Impulse resolution conserves linear momentum for dynamic pairs.
    #[test]
    fn impulse_resolution_conserves_momentum(
        ma in 0.1f32..10.0,
        mb in 0.1f32..10.0,
        vax in -100.0f32..100.0, vay in -100.0f32..100.0,
        vbx in -100.0f32..100.0, vby in -100.0f32..100.0,
        overlap in 0.0f32..0.99,
        e in 0.0f32..=1.0,
    ) {
        let mut a = Body::with_restitution(0.0, 0.0, 10.0, ma, e).unwrap();
        a.vel = Vec2::new(vax, vay);
        let mut b = Body::with_restitution(20.0 * overlap, 0.0, 10.0, mb, e).unwrap();
        b.vel = Vec2::new(vbx, vby);

        let before = a.vel * ma + b.vel * mb;

        let contact = circle_circle_contact(&a, &b).unwrap();
        resolve_contact(&mut a, &mut b, &contact);

        let after = a.vel * ma + b.vel * mb;
        let drift = (after - before).length();
        prop_assert!(
            drift <= 1e-2 * (1.0 + before.length()),
            "momentum drift {}",
            drift
        );
    }

    /// Kinetic energy never increases through an impulse with restitution <= 1.
    #[test]
    fn impulse_resolution_never_adds_energy(
        ma in 0.1f32..10.0,
        mb in 0.1f32..10.0,
        vax in -100.0f32..100.0, vay in -100.0f32..100.0,
        vbx in -100.0f32..100.0, vby in -100.0f32..100.0,
        overlap in 0.0f32..0.99,
        e in 0.0f32..=1.0,
    ) {
        let mut a = Body::with_restitution(0.0, 0.0, 10.0, ma, e).unwrap();
        a.vel = Vec2::new(vax, vay);
        let mut b = Body::with_restitution(20.0 * overlap, 0.0, 10.0, mb, e).unwrap();
        b.vel = Vec2::new(vbx, vby);

        let ke = |a: &Body, b: &Body| {
            0.5 * ma * a.vel.length_squared() + 0.5 * mb * b.vel.length_squared()
        };
        let before = ke(&a, &b);

        let contact = circle_circle_contact(&a, &b).unwrap();
        resolve_contact(&mut a, &mut b, &contact);

        let after = ke(&a, &b);
        prop_assert!(
            after <= before + 1e-2 * (1.0 + before),
            "energy rose from {} to {}",
            before,
            after
        );
    }

    /// No force, impulse, or timestep moves a static body.
    #[test]
    fn static_bodies_are_invariant(
        fx in -1e4f32..1e4, fy in -1e4f32..1e4,
        jx in -1e4f32..1e4, jy in -1e4f32..1e4,
        dt in 0.0f32..10.0,
    ) {
        let mut peg = body_at(Vec2::new(45.0, 100.0), 5.0, 0.0);
        peg.apply_force(Vec2::new(fx, fy));
        peg.apply_impulse(Vec2::new(jx, jy));
        peg.integrate(dt);

        prop_assert_eq!(peg.pos, Vec2::new(45.0, 100.0));
        prop_assert_eq!(peg.vel, Vec2::ZERO);
    }
}
