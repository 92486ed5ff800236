// Host-side tests for easing curves and entrance transitions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod ease {
        include!("../src/core/ease.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use glam::Vec2;
use motion::ease::{CubicBezier, EASE_IN_OUT, EASE_OUT};
use motion::reveal::*;

#[test]
fn bezier_hits_its_endpoints() {
    for curve in [EASE_OUT, EASE_IN_OUT, CubicBezier::new(0.4, 0.1, 0.6, 0.9)] {
        assert_eq!(curve.eval(0.0), 0.0);
        assert_eq!(curve.eval(1.0), 1.0);
    }
}

#[test]
fn bezier_clamps_out_of_range_input() {
    assert_eq!(EASE_OUT.eval(-0.5), 0.0);
    assert_eq!(EASE_OUT.eval(1.5), 1.0);
}

#[test]
fn bezier_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=100 {
        let y = EASE_OUT.eval(i as f32 / 100.0);
        assert!(y >= prev - 1e-4, "dip at sample {i}");
        prev = y;
    }
}

#[test]
fn ease_out_front_loads_progress() {
    // The entrance curve covers most of its travel in the first half
    assert!(EASE_OUT.eval(0.5) > 0.8);
}

#[test]
fn reveal_stays_hidden_until_triggered() {
    let r = Reveal::new(RevealKind::Fade, 0.0);
    assert!(!r.triggered());
    assert_eq!(r.progress(100.0), 0.0);
    assert_eq!(r.style(100.0).opacity, 0.0);
    assert!(!r.done(100.0));
}

#[test]
fn reveal_trigger_latches_the_first_crossing() {
    let mut r = Reveal::new(RevealKind::Fade, 0.0).with_duration(1.0);
    r.trigger(10.0);
    // A later trigger must not restart the entrance
    r.trigger(50.0);
    assert_eq!(r.progress(11.0), 1.0);
    assert!(r.done(11.0));
}

#[test]
fn reveal_delay_holds_the_initial_style() {
    let mut r = Reveal::new(RevealKind::SlideUp(30.0), 0.5).with_duration(1.0);
    r.trigger(0.0);
    let style = r.style(0.25);
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.translate, Vec2::new(0.0, 30.0));
    assert!(!r.done(1.4));
    assert!(r.done(1.5));
}

#[test]
fn slide_kinds_start_offset_toward_their_origin() {
    // Each variant travels toward rest from the opposite side
    let cases = [
        (RevealKind::SlideUp(24.0), Vec2::new(0.0, 24.0)),
        (RevealKind::SlideDown(24.0), Vec2::new(0.0, -24.0)),
        (RevealKind::SlideLeft(24.0), Vec2::new(24.0, 0.0)),
        (RevealKind::SlideRight(24.0), Vec2::new(-24.0, 0.0)),
    ];
    for (kind, expected) in cases {
        let mut r = Reveal::new(kind, 0.0).with_duration(1.0);
        r.trigger(0.0);
        assert_eq!(r.style(0.0).translate, expected, "{kind:?}");
        // And every kind lands exactly at rest
        let done = r.style(2.0);
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.translate, Vec2::ZERO);
    }
}

#[test]
fn word_rise_keeps_words_opaque() {
    let mut r = Reveal::new(RevealKind::WordRise, 0.0);
    r.trigger(0.0);
    let style = r.style(0.0);
    assert_eq!(style.opacity, 1.0);
    // Starts a full line-height below, in percent
    assert_eq!(style.translate, Vec2::new(0.0, 100.0));
}

#[test]
fn blur_kind_resolves_to_sharp() {
    let mut r = Reveal::new(RevealKind::Blur, 0.0);
    r.trigger(0.0);
    assert_eq!(r.style(0.0).blur_px, 10.0);
    assert_eq!(r.style(5.0).blur_px, 0.0);
    assert_eq!(r.style(5.0).scale, 1.0);
}

#[test]
fn stagger_delay_steps_linearly() {
    assert_eq!(stagger_delay(0.1, 0, 0.08), 0.1);
    assert!((stagger_delay(0.1, 3, 0.08) - 0.34).abs() < 1e-6);
}

#[test]
fn fade_slide_runs_both_directions() {
    let mut fade = FadeSlide::new(0.4, 10.0);
    assert!(fade.resting_hidden());
    assert_eq!(fade.style().opacity, 0.0);

    fade.set_visible(true);
    fade.step(0.2);
    assert!(!fade.resting_hidden());
    let mid = fade.style();
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    assert!(mid.translate.y > 0.0 && mid.translate.y < 10.0);

    fade.step(0.4);
    let shown = fade.style();
    assert_eq!(shown.opacity, 1.0);
    assert_eq!(shown.translate, Vec2::ZERO);
    assert!((shown.scale - 1.0).abs() < 1e-6);

    fade.set_visible(false);
    fade.step(0.2);
    assert!(!fade.resting_hidden());
    fade.step(1.0);
    assert!(fade.resting_hidden());
}

#[test]
fn fade_slide_turns_around_mid_flight() {
    let mut fade = FadeSlide::new(1.0, 10.0);
    fade.set_visible(true);
    fade.step(0.5);
    fade.set_visible(false);
    fade.step(0.2);
    let dipped = fade.style().opacity;

    // Re-hovering resumes from where it was, not from zero
    fade.set_visible(true);
    fade.step(0.1);
    assert!(fade.style().opacity > dipped);
}
