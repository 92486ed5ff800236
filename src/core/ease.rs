// Shared motion timing. Durations and stagger steps are in seconds.

pub const DUR_FAST: f32 = 0.35;
pub const DUR_NORMAL: f32 = 0.5;
pub const DUR_SLOW: f32 = 0.7;
pub const DUR_BLUR: f32 = 0.8;

pub const STAGGER_SECTION: f32 = 0.15;
pub const STAGGER_LIST: f32 = 0.08;
pub const STAGGER_WORDS: f32 = 0.03;
pub const DELAY_CHILDREN: f32 = 0.1;

/// Cubic bezier easing curve with implicit (0,0) and (1,1) endpoints.
///
/// `eval` solves x(t) = input for t by Newton iteration (bisection fallback
/// when the derivative collapses), then returns y(t). Inputs are clamped to
/// [0, 1].
#[derive(Clone, Copy, Debug)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Sharp entrance curve used by nearly every reveal.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.65, 0.0, 0.35, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn sample(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    #[inline]
    fn sample_derivative(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    pub fn eval(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-5 {
                return Self::sample(self.y1, self.y2, t);
            }
            let d = Self::sample_derivative(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }

        // Bisection fallback; x(t) is monotonic for valid control points
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        for _ in 0..24 {
            t = (lo + hi) * 0.5;
            if Self::sample(self.x1, self.x2, t) < x {
                lo = t;
            } else {
                hi = t;
            }
        }
        Self::sample(self.y1, self.y2, t)
    }
}
