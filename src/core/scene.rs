use glam::{EulerRot, Mat4, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// Mesh vertex for the satellite and marker geometry.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// One background star; a static instance expanded to a billboard quad.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    pub position: [f32; 3],
    pub size: f32,
    /// Twinkle phase offset so stars do not pulse in unison.
    pub phase: f32,
    pub _pad: [f32; 3],
}

/// CPU-side triangle mesh, indices into `vertices`.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: [f32; 3]) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices.push(Vertex {
                position: corner.to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Axis-aligned box with per-face normals.
    pub fn push_box(&mut self, center: Vec3, half: Vec3, color: [f32; 3]) {
        let (c, h) = (center, half);
        // +X, -X
        self.push_quad(
            [
                Vec3::new(c.x + h.x, c.y - h.y, c.z - h.z),
                Vec3::new(c.x + h.x, c.y + h.y, c.z - h.z),
                Vec3::new(c.x + h.x, c.y + h.y, c.z + h.z),
                Vec3::new(c.x + h.x, c.y - h.y, c.z + h.z),
            ],
            Vec3::X,
            color,
        );
        self.push_quad(
            [
                Vec3::new(c.x - h.x, c.y - h.y, c.z + h.z),
                Vec3::new(c.x - h.x, c.y + h.y, c.z + h.z),
                Vec3::new(c.x - h.x, c.y + h.y, c.z - h.z),
                Vec3::new(c.x - h.x, c.y - h.y, c.z - h.z),
            ],
            Vec3::NEG_X,
            color,
        );
        // +Y, -Y
        self.push_quad(
            [
                Vec3::new(c.x - h.x, c.y + h.y, c.z - h.z),
                Vec3::new(c.x - h.x, c.y + h.y, c.z + h.z),
                Vec3::new(c.x + h.x, c.y + h.y, c.z + h.z),
                Vec3::new(c.x + h.x, c.y + h.y, c.z - h.z),
            ],
            Vec3::Y,
            color,
        );
        self.push_quad(
            [
                Vec3::new(c.x - h.x, c.y - h.y, c.z + h.z),
                Vec3::new(c.x - h.x, c.y - h.y, c.z - h.z),
                Vec3::new(c.x + h.x, c.y - h.y, c.z - h.z),
                Vec3::new(c.x + h.x, c.y - h.y, c.z + h.z),
            ],
            Vec3::NEG_Y,
            color,
        );
        // +Z, -Z
        self.push_quad(
            [
                Vec3::new(c.x - h.x, c.y - h.y, c.z + h.z),
                Vec3::new(c.x + h.x, c.y - h.y, c.z + h.z),
                Vec3::new(c.x + h.x, c.y + h.y, c.z + h.z),
                Vec3::new(c.x - h.x, c.y + h.y, c.z + h.z),
            ],
            Vec3::Z,
            color,
        );
        self.push_quad(
            [
                Vec3::new(c.x + h.x, c.y - h.y, c.z - h.z),
                Vec3::new(c.x - h.x, c.y - h.y, c.z - h.z),
                Vec3::new(c.x - h.x, c.y + h.y, c.z - h.z),
                Vec3::new(c.x + h.x, c.y + h.y, c.z - h.z),
            ],
            Vec3::NEG_Z,
            color,
        );
    }

    /// Closed cylinder along +Z from `base` with the given length.
    pub fn push_cylinder(
        &mut self,
        base: Vec3,
        length: f32,
        radius: f32,
        segments: u32,
        color: [f32; 3],
    ) {
        let segments = segments.max(3);
        let start = self.vertices.len() as u32;
        for i in 0..segments {
            let a = i as f32 / segments as f32 * TAU;
            let (sin, cos) = a.sin_cos();
            let n = Vec3::new(cos, sin, 0.0);
            let ring = base + n * radius;
            self.vertices.push(Vertex {
                position: ring.to_array(),
                normal: n.to_array(),
                color,
            });
            self.vertices.push(Vertex {
                position: (ring + Vec3::new(0.0, 0.0, length)).to_array(),
                normal: n.to_array(),
                color,
            });
        }
        for i in 0..segments {
            let j = (i + 1) % segments;
            let (a0, a1) = (start + i * 2, start + i * 2 + 1);
            let (b0, b1) = (start + j * 2, start + j * 2 + 1);
            self.indices.extend_from_slice(&[a0, b0, b1, a0, b1, a1]);
        }
        // End caps as triangle fans
        for (offset, normal) in [(0.0, Vec3::NEG_Z), (length, Vec3::Z)] {
            let center_index = self.vertices.len() as u32;
            self.vertices.push(Vertex {
                position: (base + Vec3::new(0.0, 0.0, offset)).to_array(),
                normal: normal.to_array(),
                color,
            });
            for i in 0..segments {
                let a = i as f32 / segments as f32 * TAU;
                let (sin, cos) = a.sin_cos();
                self.vertices.push(Vertex {
                    position: (base + Vec3::new(cos * radius, sin * radius, offset)).to_array(),
                    normal: normal.to_array(),
                    color,
                });
            }
            for i in 0..segments {
                let j = (i + 1) % segments;
                if offset == 0.0 {
                    self.indices.extend_from_slice(&[
                        center_index,
                        center_index + 1 + j,
                        center_index + 1 + i,
                    ]);
                } else {
                    self.indices.extend_from_slice(&[
                        center_index,
                        center_index + 1 + i,
                        center_index + 1 + j,
                    ]);
                }
            }
        }
    }
}

// Hull palette
const BODY_ALUMINUM: [f32; 3] = [0.62, 0.66, 0.72];
const PANEL_BLUE: [f32; 3] = [0.08, 0.16, 0.38];
const PANEL_FRAME: [f32; 3] = [0.30, 0.32, 0.36];
const FOIL_GOLD: [f32; 3] = [0.78, 0.62, 0.20];
const ANTENNA_GRAY: [f32; 3] = [0.82, 0.84, 0.88];

/// The satellite body: a 2U-style bus with two solar wings, an MLI-wrapped
/// payload bay on +X, and a forward antenna boom toward the TT&C anchor.
pub fn build_satellite() -> Mesh {
    let mut mesh = Mesh::default();

    // Main bus, spanning y 0..1.2
    mesh.push_box(
        Vec3::new(0.0, 0.6, 0.0),
        Vec3::new(0.5, 0.6, 0.5),
        BODY_ALUMINUM,
    );
    // MLI wrap around the lower bus
    mesh.push_box(
        Vec3::new(0.0, 0.25, 0.0),
        Vec3::new(0.52, 0.25, 0.52),
        FOIL_GOLD,
    );
    // Top instrument deck under the EPS anchor
    mesh.push_box(
        Vec3::new(0.0, 1.26, 0.0),
        Vec3::new(0.30, 0.06, 0.30),
        PANEL_FRAME,
    );

    // Solar wings on +/-X with slim yokes
    for side in [1.0f32, -1.0] {
        mesh.push_box(
            Vec3::new(side * 0.6, 0.8, 0.0),
            Vec3::new(0.1, 0.03, 0.1),
            PANEL_FRAME,
        );
        mesh.push_box(
            Vec3::new(side * 1.45, 0.8, 0.0),
            Vec3::new(0.75, 0.02, 0.4),
            PANEL_BLUE,
        );
    }

    // Payload bay toward the +X anchor
    mesh.push_box(
        Vec3::new(0.85, 0.5, 0.0),
        Vec3::new(0.35, 0.22, 0.22),
        FOIL_GOLD,
    );

    // Antenna boom out the front face
    mesh.push_cylinder(Vec3::new(0.0, 1.0, 0.5), 0.6, 0.04, 10, ANTENNA_GRAY);
    mesh.push_box(
        Vec3::new(0.0, 1.0, 1.14),
        Vec3::new(0.10, 0.10, 0.04),
        ANTENNA_GRAY,
    );

    mesh
}

/// Unit sphere used for the subsystem markers, scaled per instance.
pub fn build_marker_sphere(rings: u32, segments: u32) -> Mesh {
    let rings = rings.max(2);
    let segments = segments.max(3);
    let mut mesh = Mesh::default();
    for r in 0..=rings {
        let v = r as f32 / rings as f32;
        let polar = v * std::f32::consts::PI;
        let (sp, cp) = polar.sin_cos();
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let azimuth = u * TAU;
            let (sa, ca) = azimuth.sin_cos();
            let n = Vec3::new(sp * ca, cp, sp * sa);
            mesh.vertices.push(Vertex {
                position: n.to_array(),
                normal: n.to_array(),
                color: [1.0, 1.0, 1.0],
            });
        }
    }
    let stride = segments + 1;
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + stride;
            mesh.indices
                .extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    mesh
}

/// Deterministic starfield in a spherical shell.
///
/// `seed` fixes the layout, so the sky is identical across visits and the
/// buffer never needs re-uploading.
pub fn build_starfield(count: usize, inner_radius: f32, depth: f32, seed: u64) -> Vec<StarInstance> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        let z: f32 = rng.gen_range(-1.0..1.0);
        let azimuth: f32 = rng.gen_range(0.0..TAU);
        let planar = (1.0 - z * z).max(0.0).sqrt();
        let dir = Vec3::new(planar * azimuth.cos(), z, planar * azimuth.sin());
        let radius = inner_radius + rng.gen_range(0.0..depth.max(1e-3));
        stars.push(StarInstance {
            position: (dir * radius).to_array(),
            size: rng.gen_range(0.5..2.0),
            phase: rng.gen_range(0.0..TAU),
            _pad: [0.0; 3],
        });
    }
    stars
}

/// Gentle idle drift for the satellite group: a slow vertical bob plus small
/// rotation wobbles. Identity at `t = 0`.
pub fn float_pose(t: f32, speed: f32, rotation_intensity: f32, float_intensity: f32) -> Mat4 {
    let s = t * speed;
    let bob = (s * 0.5).sin() * 0.25 * float_intensity;
    let rx = (s * 0.30).sin() * 0.15 * rotation_intensity;
    let ry = (s * 0.23).sin() * 0.20 * rotation_intensity;
    let rz = (s * 0.17).sin() * 0.10 * rotation_intensity;
    Mat4::from_translation(Vec3::new(0.0, bob, 0.0)) * Mat4::from_euler(EulerRot::XYZ, rx, ry, rz)
}
