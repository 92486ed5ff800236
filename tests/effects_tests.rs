// Host-side tests for the pure effect models and rect math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod geom {
        include!("../src/core/geom.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
}

use glam::Vec2;
use motion::effects::*;
use motion::geom::Rect;

const DT: f32 = 1.0 / 60.0;

// ---------------- Rect ----------------

#[test]
fn rect_normalized_within_maps_corners_and_center() {
    let r = Rect::new(100.0, 50.0, 200.0, 100.0);
    assert_eq!(r.normalized_within(r.center()), Some(Vec2::ZERO));
    assert_eq!(
        r.normalized_within(Vec2::new(100.0, 50.0)),
        Some(Vec2::new(-1.0, -1.0))
    );
    assert_eq!(
        r.normalized_within(Vec2::new(300.0, 150.0)),
        Some(Vec2::new(1.0, 1.0))
    );
}

#[test]
fn rect_degenerate_boxes_yield_none() {
    let flat = Rect::new(0.0, 0.0, 100.0, 0.0);
    assert_eq!(flat.normalized_within(Vec2::new(10.0, 0.0)), None);
    assert_eq!(flat.fraction_within(Vec2::new(10.0, 0.0)), None);
}

#[test]
fn rect_denormalize_inverts_normalized_within() {
    let r = Rect::new(40.0, 20.0, 160.0, 90.0);
    let p = Vec2::new(72.0, 95.0);
    let n = r.normalized_within(p).unwrap();
    let back = r.denormalize(n);
    assert!((back - p).length() < 1e-4);
}

#[test]
fn rect_contains_is_edge_inclusive() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Vec2::new(0.0, 0.0)));
    assert!(r.contains(Vec2::new(10.0, 10.0)));
    assert!(!r.contains(Vec2::new(10.1, 5.0)));
}

// ---------------- Magnetic ----------------

#[test]
fn magnetic_attraction_is_zero_at_and_beyond_radius() {
    let config = MagneticConfig {
        strength: 50.0,
        radius: 100.0,
    };
    let center = Vec2::new(500.0, 500.0);
    assert_eq!(
        Magnetic::attraction(&config, center + Vec2::new(100.0, 0.0), center),
        Vec2::ZERO
    );
    assert_eq!(
        Magnetic::attraction(&config, center + Vec2::new(250.0, 0.0), center),
        Vec2::ZERO
    );
}

#[test]
fn magnetic_attraction_falls_off_linearly() {
    let config = MagneticConfig {
        strength: 50.0,
        radius: 100.0,
    };
    let center = Vec2::ZERO;
    // Halfway out: delta * (1 - 0.5) * (strength / 50)
    let pull = Magnetic::attraction(&config, Vec2::new(50.0, 0.0), center);
    assert!((pull.x - 25.0).abs() < 1e-4);
    assert_eq!(pull.y, 0.0);

    // Strength scales the same geometry
    let weak = MagneticConfig {
        strength: 20.0,
        radius: 100.0,
    };
    let pull = Magnetic::attraction(&weak, Vec2::new(50.0, 0.0), center);
    assert!((pull.x - 10.0).abs() < 1e-4);
}

#[test]
fn magnetic_zero_radius_never_pulls() {
    let config = MagneticConfig {
        strength: 50.0,
        radius: 0.0,
    };
    assert_eq!(
        Magnetic::attraction(&config, Vec2::new(1.0, 1.0), Vec2::ZERO),
        Vec2::ZERO
    );
}

#[test]
fn magnetic_engages_inside_radius_and_releases_clean() {
    let rect = Rect::new(450.0, 450.0, 100.0, 100.0); // center (500, 500)
    let mut m = Magnetic::new(MagneticConfig::default());
    assert!(!m.engaged());

    m.set_pointer(Vec2::new(520.0, 500.0), &rect);
    assert!(m.engaged());
    assert!(m.target().length() > 0.0);

    m.release();
    assert!(!m.engaged());
    assert_eq!(m.target(), Vec2::ZERO);

    for _ in 0..600 {
        m.step(DT);
    }
    assert!(m.settled());
}

#[test]
fn magnetic_pointer_outside_radius_targets_rest() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0); // center (5, 5)
    let mut m = Magnetic::new(MagneticConfig {
        strength: 50.0,
        radius: 40.0,
    });
    m.set_pointer(Vec2::new(200.0, 5.0), &rect);
    assert!(!m.engaged());
    assert_eq!(m.target(), Vec2::ZERO);
}

// ---------------- Tilt ----------------

#[test]
fn tilt_center_is_flat() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let mut card = TiltCard::new(TiltConfig::default());
    card.set_pointer(rect.center(), &rect);
    assert_eq!(card.rotate_targets(), Vec2::ZERO);
}

#[test]
fn tilt_top_edge_tips_back_left_edge_swings_left() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let mut card = TiltCard::new(TiltConfig::default());

    // Top center: positive X rotation, no Y rotation
    card.set_pointer(Vec2::new(100.0, 0.0), &rect);
    let t = card.rotate_targets();
    assert!((t.x - 6.0).abs() < 1e-4);
    assert!(t.y.abs() < 1e-4);

    // Left center: negative Y rotation
    card.set_pointer(Vec2::new(0.0, 50.0), &rect);
    let t = card.rotate_targets();
    assert!(t.x.abs() < 1e-4);
    assert!((t.y + 6.0).abs() < 1e-4);
}

#[test]
fn tilt_glare_follows_pointer_fraction() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let mut card = TiltCard::new(TiltConfig::default());
    card.set_pointer(Vec2::new(50.0, 75.0), &rect);
    let g = card.glare_target();
    assert!((g.x - 25.0).abs() < 1e-4);
    assert!((g.y - 75.0).abs() < 1e-4);
}

#[test]
fn tilt_leave_retargets_rest() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let mut card = TiltCard::new(TiltConfig::default());
    card.set_hovered(true);
    card.set_pointer(Vec2::new(0.0, 0.0), &rect);
    assert!(card.rotate_targets().length() > 0.0);

    card.set_hovered(false);
    assert_eq!(card.rotate_targets(), Vec2::ZERO);
    assert_eq!(card.glare_target(), TiltCard::GLARE_REST);

    for _ in 0..900 {
        card.step(DT);
    }
    assert!(card.settled());
    let frame = card.step(DT);
    assert!((frame.scale - 1.0).abs() < 0.01);
    assert!(frame.rotate_x.abs() < 0.01);
}

#[test]
fn tilt_hover_scales_up() {
    let mut card = TiltCard::new(TiltConfig::default());
    card.set_hovered(true);
    for _ in 0..600 {
        card.step(DT);
    }
    let frame = card.step(DT);
    assert!((frame.scale - 1.02).abs() < 1e-3);
}

#[test]
fn tilt_ignores_degenerate_rect() {
    let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
    let mut card = TiltCard::new(TiltConfig::default());
    card.set_pointer(Vec2::new(10.0, 10.0), &rect);
    assert_eq!(card.rotate_targets(), Vec2::ZERO);
}

// ---------------- Parallax ----------------

#[test]
fn parallax_offset_scales_with_depth() {
    let mut layer = ParallaxLayer::new(ParallaxConfig {
        depth: 0.05,
        invert: false,
    });
    layer.set_pointer(Vec2::new(1.0, 0.5));
    let t = layer.target();
    assert!((t.x - 5.0).abs() < 1e-4);
    assert!((t.y - 2.5).abs() < 1e-4);
}

#[test]
fn parallax_invert_flips_direction() {
    let mut layer = ParallaxLayer::new(ParallaxConfig {
        depth: 0.1,
        invert: true,
    });
    layer.set_pointer(Vec2::new(1.0, -1.0));
    let t = layer.target();
    assert!((t.x + 10.0).abs() < 1e-4);
    assert!((t.y - 10.0).abs() < 1e-4);
}

#[test]
fn parallax_new_layer_is_settled() {
    let layer = ParallaxLayer::new(ParallaxConfig::default());
    assert!(layer.settled());
}

// ---------------- Spotlight and glow ----------------

#[test]
fn spotlight_tracks_pointer_in_local_space() {
    let rect = Rect::new(100.0, 50.0, 400.0, 300.0);
    let mut spot = Spotlight::new(SpotlightConfig::default(), Vec2::ZERO);
    spot.set_pointer(Vec2::new(150.0, 80.0), &rect);
    for _ in 0..600 {
        spot.step(DT);
    }
    let c = spot.step(DT);
    assert!((c.x - 50.0).abs() < 0.1);
    assert!((c.y - 30.0).abs() < 0.1);
}

#[test]
fn cursor_glow_rests_parked_until_pointed() {
    let mut glow = CursorGlow::new(500.0);
    assert!(glow.settled());

    glow.set_pointer(Vec2::new(300.0, 200.0));
    assert!(!glow.settled());
    for _ in 0..600 {
        glow.step(DT);
    }
    let c = glow.step(DT);
    assert!((c - Vec2::new(300.0, 200.0)).length() < 0.5);

    glow.park();
    for _ in 0..2000 {
        glow.step(DT);
    }
    assert!((glow.step(DT) - POINTER_PARKED).length() < 1.0);
}
