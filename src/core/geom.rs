use glam::Vec2;

/// Viewport-space snapshot of an element's bounding box, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }

    /// Map a viewport point to [-1, 1] per axis with the box center at zero.
    /// `None` for a degenerate box, so callers skip rather than divide by zero.
    pub fn normalized_within(&self, point: Vec2) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let c = self.center();
        Some(Vec2::new(
            (point.x - c.x) / (self.width * 0.5),
            (point.y - c.y) / (self.height * 0.5),
        ))
    }

    /// Map a viewport point to [0, 1] fractions of the box.
    pub fn fraction_within(&self, point: Vec2) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            (point.x - self.left) / self.width,
            (point.y - self.top) / self.height,
        ))
    }

    /// Inverse of `normalized_within` for a well-formed box.
    pub fn denormalize(&self, normalized: Vec2) -> Vec2 {
        self.center() + normalized * Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
