// Host-side tests for procedural scene geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use glam::{Mat4, Vec3};
use scene::*;
use std::f32::consts::TAU;

fn assert_mesh_well_formed(mesh: &Mesh) {
    assert!(!mesh.vertices.is_empty());
    assert!(!mesh.indices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0, "partial triangle");
    let n = mesh.vertices.len() as u32;
    for &i in &mesh.indices {
        assert!(i < n, "index {i} out of range {n}");
    }
}

#[test]
fn satellite_mesh_is_well_formed() {
    let mesh = build_satellite();
    assert_mesh_well_formed(&mesh);

    // Normals are unit length
    for v in &mesh.vertices {
        let len = Vec3::from(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4);
    }
}

#[test]
fn satellite_spans_the_solar_wings() {
    let mesh = build_satellite();
    let max_x = mesh
        .vertices
        .iter()
        .map(|v| v.position[0])
        .fold(f32::MIN, f32::max);
    let min_x = mesh
        .vertices
        .iter()
        .map(|v| v.position[0])
        .fold(f32::MAX, f32::min);
    // Wings reach past +/-2 on X; the bus alone is only half a unit
    assert!(max_x > 2.0);
    assert!(min_x < -2.0);
}

#[test]
fn marker_sphere_is_a_unit_sphere() {
    let mesh = build_marker_sphere(12, 18);
    assert_mesh_well_formed(&mesh);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - 1.0).abs() < 1e-4);
        // On a unit sphere the normal is the position
        assert!((p - Vec3::from(v.normal)).length() < 1e-6);
    }
}

#[test]
fn marker_sphere_clamps_tiny_parameters() {
    let mesh = build_marker_sphere(0, 0);
    assert_mesh_well_formed(&mesh);
}

#[test]
fn starfield_is_deterministic_for_a_seed() {
    let a = build_starfield(64, 100.0, 50.0, 42);
    let b = build_starfield(64, 100.0, 50.0, 42);
    assert_eq!(a.len(), 64);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.size, y.size);
        assert_eq!(x.phase, y.phase);
    }

    let c = build_starfield(64, 100.0, 50.0, 43);
    assert!(a.iter().zip(&c).any(|(x, y)| x.position != y.position));
}

#[test]
fn starfield_stays_inside_its_shell() {
    let stars = build_starfield(500, 100.0, 50.0, 7);
    for star in &stars {
        let r = Vec3::from(star.position).length();
        assert!(r >= 100.0 - 1e-2 && r <= 150.0 + 1e-2, "radius {r}");
        assert!(star.size >= 0.5 && star.size < 2.0);
        assert!(star.phase >= 0.0 && star.phase < TAU);
    }
}

#[test]
fn float_pose_is_identity_at_time_zero() {
    let pose = float_pose(0.0, 1.5, 0.1, 0.3);
    let diff = pose - Mat4::IDENTITY;
    for value in diff.to_cols_array() {
        assert!(value.abs() < 1e-6);
    }
}

#[test]
fn float_pose_drift_stays_bounded() {
    for i in 0..200 {
        let t = i as f32 * 0.37;
        let pose = float_pose(t, 1.5, 0.1, 0.3);
        let origin = pose.transform_point3(Vec3::ZERO);
        // Bob amplitude is 0.25 * intensity
        assert!(origin.x.abs() < 1e-5);
        assert!(origin.z.abs() < 1e-5);
        assert!(origin.y.abs() <= 0.25 * 0.3 + 1e-4);

        // The rotation part keeps its scale
        let unit = pose.transform_vector3(Vec3::X);
        assert!((unit.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn cylinder_produces_walls_and_caps() {
    let mut mesh = Mesh::default();
    let segments = 10;
    mesh.push_cylinder(Vec3::ZERO, 1.0, 0.25, segments, [1.0, 1.0, 1.0]);
    assert_mesh_well_formed(&mesh);

    // Walls: segments quads; caps: segments triangles each
    let expected_indices = (segments * 6 + 2 * segments * 3) as usize;
    assert_eq!(mesh.indices.len(), expected_indices);
}
