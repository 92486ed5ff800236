// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::{Vec2, Vec3};
use input::*;

#[test]
fn ray_sphere_hits_head_on_at_the_near_surface() {
    let origin = Vec3::ZERO;
    let dir = Vec3::Z;
    let t = ray_sphere(origin, dir, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_some());
    assert!((t.unwrap() - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_misses_off_axis() {
    let origin = Vec3::ZERO;
    let dir = Vec3::X;
    assert!(ray_sphere(origin, dir, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_ignores_spheres_behind_the_origin() {
    let origin = Vec3::ZERO;
    let dir = Vec3::Z;
    assert!(ray_sphere(origin, dir, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_grazes_a_tangent_sphere() {
    // Sphere offset exactly one radius off the ray axis
    let origin = Vec3::ZERO;
    let dir = Vec3::Z;
    let t = ray_sphere(origin, dir, Vec3::new(0.0, 2.0, 5.0), 2.0);
    assert!(t.is_some());
    assert!((t.unwrap() - 5.0).abs() < 1e-3);
}

#[test]
fn ray_sphere_reports_no_hit_from_inside() {
    // The near intersection is behind the origin, so an eye inside the
    // sphere does not count as pointing at it
    let center = Vec3::new(0.0, 0.0, 1.0);
    assert!(ray_sphere(center, Vec3::Z, center, 0.5).is_none());
}

#[test]
fn viewport_normalized_centers_at_zero() {
    let viewport = Vec2::new(800.0, 600.0);
    assert_eq!(
        viewport_normalized(Vec2::new(400.0, 300.0), viewport),
        Vec2::ZERO
    );
    assert_eq!(
        viewport_normalized(Vec2::ZERO, viewport),
        Vec2::new(-1.0, -1.0)
    );
    assert_eq!(
        viewport_normalized(Vec2::new(800.0, 600.0), viewport),
        Vec2::new(1.0, 1.0)
    );
}

const PARKED_AT: Vec2 = Vec2::new(-1000.0, -1000.0);

#[test]
fn sampler_first_sample_has_zero_velocity() {
    let mut sampler = PointerSampler::new();
    let intent = PointerIntent {
        position: Vec2::new(10.0, 10.0),
        parked: false,
    };
    let sample = sampler.publish(&intent, Vec2::new(800.0, 600.0), PARKED_AT);
    assert!(!sample.parked);
    assert_eq!(sample.velocity, Vec2::ZERO);
    assert_eq!(sample.position, Vec2::new(10.0, 10.0));
}

#[test]
fn sampler_velocity_is_movement_between_samples() {
    let mut sampler = PointerSampler::new();
    let viewport = Vec2::new(800.0, 600.0);
    let mut intent = PointerIntent {
        position: Vec2::new(10.0, 10.0),
        parked: false,
    };
    sampler.publish(&intent, viewport, PARKED_AT);

    intent.position = Vec2::new(30.0, 25.0);
    let sample = sampler.publish(&intent, viewport, PARKED_AT);
    assert_eq!(sample.velocity, Vec2::new(20.0, 15.0));
}

#[test]
fn sampler_parks_at_the_sentinel() {
    let mut sampler = PointerSampler::new();
    let viewport = Vec2::new(800.0, 600.0);
    let intent = PointerIntent {
        position: Vec2::new(400.0, 300.0),
        parked: true,
    };
    let sample = sampler.publish(&intent, viewport, PARKED_AT);
    assert!(sample.parked);
    assert_eq!(sample.position, PARKED_AT);
    assert_eq!(sample.normalized, Vec2::ZERO);
    assert_eq!(sample.velocity, Vec2::ZERO);
}

#[test]
fn sampler_re_entry_does_not_spike_velocity() {
    let mut sampler = PointerSampler::new();
    let viewport = Vec2::new(800.0, 600.0);
    let mut intent = PointerIntent {
        position: Vec2::new(10.0, 10.0),
        parked: false,
    };
    sampler.publish(&intent, viewport, PARKED_AT);

    // Leave the page, then re-enter far away
    intent.parked = true;
    sampler.publish(&intent, viewport, PARKED_AT);
    intent.parked = false;
    intent.position = Vec2::new(790.0, 590.0);
    let sample = sampler.publish(&intent, viewport, PARKED_AT);
    assert_eq!(sample.velocity, Vec2::ZERO);
}

#[test]
fn default_intent_reads_as_parked() {
    let intent = PointerIntent::default();
    assert!(intent.parked);
}
