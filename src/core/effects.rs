use glam::Vec2;

use super::geom::Rect;
use super::spring::{Spring, Spring2};

// Spring presets (stiffness, damping) for each effect family
pub const PARALLAX_STIFFNESS: f32 = 80.0;
pub const PARALLAX_DAMPING: f32 = 40.0;
pub const MAGNETIC_STIFFNESS: f32 = 100.0;
pub const MAGNETIC_DAMPING: f32 = 25.0;
pub const TILT_STIFFNESS: f32 = 200.0;
pub const TILT_DAMPING: f32 = 20.0;
pub const TILT_SCALE_STIFFNESS: f32 = 300.0;
pub const TILT_SCALE_DAMPING: f32 = 25.0;
pub const SPOTLIGHT_STIFFNESS: f32 = 150.0;
pub const SPOTLIGHT_DAMPING: f32 = 25.0;
pub const GLOW_STIFFNESS: f32 = 200.0;
pub const GLOW_DAMPING: f32 = 25.0;

/// Off-screen resting point for the pointer when it is not over the page.
/// Far enough out that distance-based effects read as fully disengaged.
pub const POINTER_PARKED: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Settle threshold below which per-frame style writes are skipped.
pub const SETTLE_EPSILON: f32 = 0.005;

// ---------------- Parallax ----------------

/// Depth-scaled drift following the viewport-normalized pointer.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxConfig {
    /// Scales normalized pointer [-1, 1] to a pixel offset; 0.05 moves ±5px.
    pub depth: f32,
    /// Drift against the pointer instead of with it.
    pub invert: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            depth: 0.05,
            invert: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ParallaxLayer {
    config: ParallaxConfig,
    offset: Spring2,
}

impl ParallaxLayer {
    pub fn new(config: ParallaxConfig) -> Self {
        Self {
            config,
            offset: Spring2::new(Vec2::ZERO, PARALLAX_STIFFNESS, PARALLAX_DAMPING),
        }
    }

    /// Retarget from the latest pointer position in [-1, 1] viewport space.
    pub fn set_pointer(&mut self, normalized: Vec2) {
        let direction = if self.config.invert { -1.0 } else { 1.0 };
        self.offset
            .set_target(normalized * self.config.depth * 100.0 * direction);
    }

    pub fn step(&mut self, dt: f32) -> Vec2 {
        self.offset.step(dt)
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset.position()
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.offset.target()
    }

    #[inline]
    pub fn settled(&self) -> bool {
        self.offset.settled(SETTLE_EPSILON)
    }
}

// ---------------- Magnetic ----------------

/// Pull toward a nearby pointer with linear falloff inside `radius`.
#[derive(Clone, Copy, Debug)]
pub struct MagneticConfig {
    /// Pull amount; 50 maps a pointer at the center of the falloff band 1:1.
    pub strength: f32,
    /// Activation radius in CSS pixels around the element center.
    pub radius: f32,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            strength: 20.0,
            radius: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Magnetic {
    config: MagneticConfig,
    offset: Spring2,
    engaged: bool,
}

impl Magnetic {
    pub fn new(config: MagneticConfig) -> Self {
        Self {
            config,
            offset: Spring2::new(Vec2::ZERO, MAGNETIC_STIFFNESS, MAGNETIC_DAMPING),
            engaged: false,
        }
    }

    /// Raw attraction offset for a pointer at `pointer` given an element
    /// center. Exactly zero at or beyond the radius, so disengagement never
    /// leaves a residual offset.
    pub fn attraction(config: &MagneticConfig, pointer: Vec2, center: Vec2) -> Vec2 {
        if config.radius <= 0.0 {
            return Vec2::ZERO;
        }
        let delta = pointer - center;
        let distance = delta.length();
        if distance >= config.radius {
            return Vec2::ZERO;
        }
        delta * (1.0 - distance / config.radius) * (config.strength / 50.0)
    }

    pub fn set_pointer(&mut self, pointer: Vec2, rect: &Rect) {
        let center = rect.center();
        self.engaged =
            self.config.radius > 0.0 && (pointer - center).length() < self.config.radius;
        self.offset
            .set_target(Self::attraction(&self.config, pointer, center));
    }

    /// Pointer left the page; glide back to rest.
    pub fn release(&mut self) {
        self.engaged = false;
        self.offset.set_target(Vec2::ZERO);
    }

    #[inline]
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    pub fn step(&mut self, dt: f32) -> Vec2 {
        self.offset.step(dt)
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.offset.target()
    }

    #[inline]
    pub fn settled(&self) -> bool {
        self.offset.settled(SETTLE_EPSILON)
    }
}

// ---------------- Tilt card ----------------

/// 3D tilt toward the pointer with a moving glare highlight and hover scale.
#[derive(Clone, Copy, Debug)]
pub struct TiltConfig {
    /// Peak rotation in degrees at the card edges.
    pub tilt_amount: f32,
    /// Glare highlight opacity while hovered.
    pub glare_opacity: f32,
    /// Scale factor while hovered.
    pub hover_scale: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            tilt_amount: 6.0,
            glare_opacity: 0.1,
            hover_scale: 1.02,
        }
    }
}

/// Smoothed outputs for one frame of a tilt card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltFrame {
    /// Rotation about the horizontal axis, degrees.
    pub rotate_x: f32,
    /// Rotation about the vertical axis, degrees.
    pub rotate_y: f32,
    pub scale: f32,
    /// Glare anchor as percentages of the card box.
    pub glare: Vec2,
}

#[derive(Clone, Copy, Debug)]
pub struct TiltCard {
    config: TiltConfig,
    rotate_x: Spring,
    rotate_y: Spring,
    scale: Spring,
    glare: Spring2,
    hovered: bool,
}

impl TiltCard {
    /// Glare rest anchor: centered.
    pub const GLARE_REST: Vec2 = Vec2::new(50.0, 50.0);

    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            rotate_x: Spring::new(0.0, TILT_STIFFNESS, TILT_DAMPING),
            rotate_y: Spring::new(0.0, TILT_STIFFNESS, TILT_DAMPING),
            scale: Spring::new(1.0, TILT_SCALE_STIFFNESS, TILT_SCALE_DAMPING),
            glare: Spring2::new(Self::GLARE_REST, TILT_STIFFNESS, TILT_DAMPING),
            hovered: false,
        }
    }

    /// Retarget rotations and glare for a pointer inside the card. A pointer
    /// at the top edge tips the card back (positive X rotation), one at the
    /// left edge swings it left (negative Y rotation).
    pub fn set_pointer(&mut self, pointer: Vec2, rect: &Rect) {
        let Some(n) = rect.normalized_within(pointer) else {
            return;
        };
        self.rotate_x.set_target(-n.y * self.config.tilt_amount);
        self.rotate_y.set_target(n.x * self.config.tilt_amount);
        if let Some(f) = rect.fraction_within(pointer) {
            self.glare.set_target(f * 100.0);
        }
    }

    /// Hover transitions drive scale up on enter; everything re-targets rest
    /// on leave so the card glides back instead of snapping.
    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if hovered {
            self.scale.set_target(self.config.hover_scale);
        } else {
            self.rotate_x.set_target(0.0);
            self.rotate_y.set_target(0.0);
            self.scale.set_target(1.0);
            self.glare.set_target(Self::GLARE_REST);
        }
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    #[inline]
    pub fn rotate_targets(&self) -> Vec2 {
        Vec2::new(self.rotate_x.target(), self.rotate_y.target())
    }

    #[inline]
    pub fn glare_target(&self) -> Vec2 {
        self.glare.target()
    }

    pub fn step(&mut self, dt: f32) -> TiltFrame {
        TiltFrame {
            rotate_x: self.rotate_x.step(dt),
            rotate_y: self.rotate_y.step(dt),
            scale: self.scale.step(dt),
            glare: self.glare.step(dt),
        }
    }

    pub fn settled(&self) -> bool {
        self.rotate_x.settled(SETTLE_EPSILON)
            && self.rotate_y.settled(SETTLE_EPSILON)
            && self.scale.settled(SETTLE_EPSILON)
            && self.glare.settled(SETTLE_EPSILON)
    }
}

// ---------------- Spotlight ----------------

/// Radial highlight tracking the pointer in element-local pixels.
#[derive(Clone, Copy, Debug)]
pub struct SpotlightConfig {
    /// Highlight circle radius in CSS pixels.
    pub radius: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self { radius: 400.0 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Spotlight {
    config: SpotlightConfig,
    center: Spring2,
}

impl Spotlight {
    pub fn new(config: SpotlightConfig, rest: Vec2) -> Self {
        Self {
            config,
            center: Spring2::new(rest, SPOTLIGHT_STIFFNESS, SPOTLIGHT_DAMPING),
        }
    }

    pub fn set_pointer(&mut self, pointer: Vec2, rect: &Rect) {
        self.center.set_target(pointer - rect.origin());
    }

    pub fn step(&mut self, dt: f32) -> Vec2 {
        self.center.step(dt)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    #[inline]
    pub fn settled(&self) -> bool {
        self.center.settled(SETTLE_EPSILON)
    }
}

// ---------------- Cursor glow ----------------

/// Full-page glow centered on the pointer. Rests at the parked sentinel, so
/// it stays invisible until the pointer first moves and after it leaves.
#[derive(Clone, Copy, Debug)]
pub struct CursorGlow {
    center: Spring2,
    /// Gradient circle size in CSS pixels.
    pub size: f32,
}

impl CursorGlow {
    pub fn new(size: f32) -> Self {
        Self {
            center: Spring2::new(POINTER_PARKED, GLOW_STIFFNESS, GLOW_DAMPING),
            size,
        }
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.center.set_target(pointer);
    }

    pub fn park(&mut self) {
        self.center.set_target(POINTER_PARKED);
    }

    pub fn step(&mut self, dt: f32) -> Vec2 {
        self.center.step(dt)
    }

    #[inline]
    pub fn settled(&self) -> bool {
        self.center.settled(SETTLE_EPSILON)
    }
}
