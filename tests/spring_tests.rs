// Host-side tests for the spring primitives.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod spring {
    include!("../src/core/spring.rs");
}

use glam::Vec2;
use spring::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn spring_starts_settled_at_initial() {
    let s = Spring::new(3.0, 100.0, 25.0);
    assert_eq!(s.position(), 3.0);
    assert_eq!(s.target(), 3.0);
    assert!(s.settled(1e-6));
}

#[test]
fn spring_converges_to_target() {
    let mut s = Spring::new(0.0, 100.0, 25.0);
    s.set_target(10.0);
    assert!(!s.settled(0.005));

    for _ in 0..600 {
        s.step(DT);
    }
    assert!((s.position() - 10.0).abs() < 1e-2);
    assert!(s.settled(0.05));
}

#[test]
fn overdamped_spring_does_not_overshoot() {
    // damping 25 vs stiffness 100 is past critical; the approach is one-sided
    let mut s = Spring::new(0.0, 100.0, 25.0);
    s.set_target(1.0);
    for _ in 0..600 {
        let p = s.step(DT);
        assert!(p <= 1.0 + 1e-3, "overshot to {p}");
    }
}

#[test]
fn snap_drops_in_flight_motion() {
    let mut s = Spring::new(0.0, 100.0, 25.0);
    s.set_target(10.0);
    for _ in 0..10 {
        s.step(DT);
    }
    s.snap_to(5.0);
    assert_eq!(s.position(), 5.0);
    assert_eq!(s.target(), 5.0);
    assert!(s.settled(1e-6));

    // No residual velocity: stepping stays put
    s.step(DT);
    assert!((s.position() - 5.0).abs() < 1e-6);
}

#[test]
fn spring2_tracks_both_axes() {
    let mut s = Spring2::new(Vec2::ZERO, 100.0, 25.0);
    s.set_target(Vec2::new(4.0, -2.0));
    for _ in 0..600 {
        s.step(DT);
    }
    let p = s.position();
    assert!((p.x - 4.0).abs() < 1e-2);
    assert!((p.y + 2.0).abs() < 1e-2);
    assert!(s.settled(0.05));
}

#[test]
fn spring2_snap_and_settle() {
    let mut s = Spring2::new(Vec2::new(1.0, 1.0), 100.0, 25.0);
    s.set_target(Vec2::new(9.0, 9.0));
    s.step(DT);
    assert!(!s.settled(0.005));
    s.snap_to(Vec2::ZERO);
    assert_eq!(s.position(), Vec2::ZERO);
    assert!(s.settled(1e-6));
}
