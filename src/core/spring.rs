use glam::Vec2;

/// Critically-tunable damped spring tracking a moving target.
///
/// Integrated with semi-implicit Euler: acceleration from the spring force is
/// applied to velocity first, then velocity to position. The frame loop clamps
/// `dt`, so a single step never overshoots into divergence on a stalled tab.
///
/// Fields:
/// - `stiffness`: spring constant k (pull toward the target)
/// - `damping`: damping coefficient c (drag on velocity)
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    target: f32,
    position: f32,
    velocity: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    pub const fn new(initial: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            target: initial,
            position: initial,
            velocity: 0.0,
            stiffness,
            damping,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Jump straight to `value`, dropping any in-flight motion.
    pub fn snap_to(&mut self, value: f32) {
        self.target = value;
        self.position = value;
        self.velocity = 0.0;
    }

    /// Advance one frame and return the new position.
    pub fn step(&mut self, dt: f32) -> f32 {
        let accel = self.stiffness * (self.target - self.position) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        self.position
    }

    /// True once position and velocity are both within `epsilon` of rest.
    #[inline]
    pub fn settled(&self, epsilon: f32) -> bool {
        (self.position - self.target).abs() <= epsilon && self.velocity.abs() <= epsilon
    }
}

/// Two independent springs sharing one config, for 2D offsets.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub const fn new(initial: Vec2, stiffness: f32, damping: f32) -> Self {
        Self {
            x: Spring::new(initial.x, stiffness, damping),
            y: Spring::new(initial.y, stiffness, damping),
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }

    pub fn snap_to(&mut self, value: Vec2) {
        self.x.snap_to(value.x);
        self.y.snap_to(value.y);
    }

    pub fn step(&mut self, dt: f32) -> Vec2 {
        Vec2::new(self.x.step(dt), self.y.step(dt))
    }

    #[inline]
    pub fn settled(&self, epsilon: f32) -> bool {
        self.x.settled(epsilon) && self.y.settled(epsilon)
    }
}
