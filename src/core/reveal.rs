use glam::Vec2;

use super::ease::{CubicBezier, EASE_OUT};

/// How an element enters when it first scrolls into view.
///
/// Slide variants carry their travel distance in CSS pixels. `WordRise`
/// distances are percentages of the word's own line box instead, so clipped
/// spans rise out of their own height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealKind {
    Fade,
    SlideUp(f32),
    SlideDown(f32),
    SlideLeft(f32),
    SlideRight(f32),
    Blur,
    Scale,
    WordRise,
}

impl RevealKind {
    /// Default duration for this kind, seconds.
    pub fn duration(self) -> f32 {
        match self {
            RevealKind::Blur => super::ease::DUR_BLUR,
            RevealKind::SlideUp(_)
            | RevealKind::SlideDown(_)
            | RevealKind::SlideLeft(_)
            | RevealKind::SlideRight(_) => 0.6,
            RevealKind::Fade | RevealKind::Scale | RevealKind::WordRise => super::ease::DUR_NORMAL,
        }
    }
}

/// Style values for one frame of an entrance or tooltip transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    /// Translation offset; pixels except for `WordRise` (percent).
    pub translate: Vec2,
    pub blur_px: f32,
    pub scale: f32,
}

impl RevealStyle {
    pub const REST: RevealStyle = RevealStyle {
        opacity: 1.0,
        translate: Vec2::ZERO,
        blur_px: 0.0,
        scale: 1.0,
    };

    fn initial(kind: RevealKind) -> RevealStyle {
        let mut style = RevealStyle {
            opacity: 0.0,
            ..RevealStyle::REST
        };
        match kind {
            RevealKind::Fade => {}
            RevealKind::SlideUp(d) => style.translate = Vec2::new(0.0, d),
            RevealKind::SlideDown(d) => style.translate = Vec2::new(0.0, -d),
            RevealKind::SlideLeft(d) => style.translate = Vec2::new(d, 0.0),
            RevealKind::SlideRight(d) => style.translate = Vec2::new(-d, 0.0),
            RevealKind::Blur => style.blur_px = 10.0,
            RevealKind::Scale => style.scale = 0.9,
            RevealKind::WordRise => {
                // Words stay opaque; the overflow-hidden wrapper clips them.
                style.opacity = 1.0;
                style.translate = Vec2::new(0.0, 100.0);
            }
        }
        style
    }

    fn lerp(a: &RevealStyle, b: &RevealStyle, t: f32) -> RevealStyle {
        RevealStyle {
            opacity: a.opacity + (b.opacity - a.opacity) * t,
            translate: a.translate + (b.translate - a.translate) * t,
            blur_px: a.blur_px + (b.blur_px - a.blur_px) * t,
            scale: a.scale + (b.scale - a.scale) * t,
        }
    }
}

/// One-way entrance transition for a single element.
///
/// Starts hidden. `trigger` latches the start time on the first viewport
/// crossing; later triggers are ignored, so scrolling away and back never
/// replays the entrance. Progress runs `delay` seconds after the trigger
/// and eases over `duration`.
#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    kind: RevealKind,
    delay: f32,
    duration: f32,
    ease: CubicBezier,
    started_at: Option<f32>,
}

impl Reveal {
    pub fn new(kind: RevealKind, delay: f32) -> Self {
        Self {
            kind,
            delay,
            duration: kind.duration(),
            ease: EASE_OUT,
            started_at: None,
        }
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(1e-3);
        self
    }

    /// Latch the start of the entrance at timeline second `now`.
    pub fn trigger(&mut self, now: f32) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    #[inline]
    pub fn triggered(&self) -> bool {
        self.started_at.is_some()
    }

    #[inline]
    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    /// Eased progress in [0, 1] at timeline second `now`.
    pub fn progress(&self, now: f32) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        let t = (now - start - self.delay) / self.duration;
        self.ease.eval(t.clamp(0.0, 1.0))
    }

    pub fn style(&self, now: f32) -> RevealStyle {
        RevealStyle::lerp(
            &RevealStyle::initial(self.kind),
            &RevealStyle::REST,
            self.progress(now),
        )
    }

    /// Finished entrances need no further style writes.
    pub fn done(&self, now: f32) -> bool {
        match self.started_at {
            Some(start) => now - start >= self.delay + self.duration,
            None => false,
        }
    }
}

/// Delay for the `index`-th child of a staggered group.
#[inline]
pub fn stagger_delay(base: f32, index: usize, step: f32) -> f32 {
    base + index as f32 * step
}

/// Reversible eased fade-and-rise used by the scene tooltips.
///
/// Unlike `Reveal` this runs both directions: progress moves linearly toward
/// the visibility flag and the output styles are eased, so a tooltip that is
/// re-hovered mid-exit turns around smoothly from wherever it is.
#[derive(Clone, Copy, Debug)]
pub struct FadeSlide {
    visible: bool,
    progress: f32,
    duration: f32,
    /// Hidden-state downward offset in CSS pixels.
    pub rise: f32,
}

impl FadeSlide {
    pub fn new(duration: f32, rise: f32) -> Self {
        Self {
            visible: false,
            progress: 0.0,
            duration: duration.max(1e-3),
            rise,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn step(&mut self, dt: f32) -> f32 {
        let rate = dt / self.duration;
        self.progress = if self.visible {
            (self.progress + rate).min(1.0)
        } else {
            (self.progress - rate).max(0.0)
        };
        self.progress
    }

    pub fn style(&self) -> RevealStyle {
        let e = EASE_OUT.eval(self.progress);
        RevealStyle {
            opacity: e,
            translate: Vec2::new(0.0, (1.0 - e) * self.rise),
            blur_px: 0.0,
            scale: 0.95 + 0.05 * e,
        }
    }

    /// Fully faded out and not coming back this frame.
    #[inline]
    pub fn resting_hidden(&self) -> bool {
        !self.visible && self.progress <= 0.0
    }
}
