use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::{FRAC_PI_4, TAU};

/// Right-handed perspective camera.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Project a world position to pixel coordinates on a `viewport`-sized
/// surface. `None` when the point is at or behind the eye plane, so callers
/// hide the overlay instead of drawing it mirrored.
pub fn project_to_screen(camera: &Camera, world: Vec3, viewport: Vec2) -> Option<Vec2> {
    let clip = camera.view_proj() * world.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    ))
}

/// World-space ray through a pixel on a `viewport`-sized surface.
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_to_world_ray(camera: &Camera, pixel: Vec2, viewport: Vec2) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * pixel.x / viewport.x.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * pixel.y / viewport.y.max(1.0));
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p_far: Vec3 = p_far.truncate() / p_far.w;
    let rd = (p_far - camera.eye).normalize_or_zero();
    (camera.eye, rd)
}

/// Orbit rig limits and feel.
#[derive(Clone, Copy, Debug)]
pub struct OrbitConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle from +Y; clamping keeps the camera off the poles.
    pub min_polar: f32,
    pub max_polar: f32,
    /// Full-height drag sweep in turns of yaw.
    pub rotate_speed: f32,
    /// Idle rotation in radians per second; suspended while dragging.
    pub auto_rotate_speed: f32,
    /// Exponential pose smoothing rate, per second.
    pub damping: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: 3.0,
            max_distance: 12.0,
            min_polar: FRAC_PI_4,
            max_polar: TAU * 0.375,
            rotate_speed: 1.0,
            auto_rotate_speed: TAU / 120.0,
            damping: 8.0,
        }
    }
}

/// Spherical camera rig around a fixed target.
///
/// Drag and zoom move goal angles; the realized pose eases toward the goals
/// every tick, so releasing mid-drag coasts to a stop instead of freezing.
#[derive(Clone, Copy, Debug)]
pub struct OrbitRig {
    pub target: Vec3,
    pub config: OrbitConfig,
    yaw: f32,
    polar: f32,
    distance: f32,
    yaw_goal: f32,
    polar_goal: f32,
    distance_goal: f32,
}

impl OrbitRig {
    /// Build a rig whose initial pose looks from `eye` at `target`.
    pub fn new(eye: Vec3, target: Vec3, config: OrbitConfig) -> Self {
        let offset = eye - target;
        let distance = offset
            .length()
            .clamp(config.min_distance, config.max_distance);
        let polar = if distance > 1e-6 {
            (offset.y / distance).clamp(-1.0, 1.0).acos()
        } else {
            FRAC_PI_4
        }
        .clamp(config.min_polar, config.max_polar);
        let yaw = offset.x.atan2(offset.z);
        Self {
            target,
            config,
            yaw,
            polar,
            distance,
            yaw_goal: yaw,
            polar_goal: polar,
            distance_goal: distance,
        }
    }

    /// Apply a pointer drag of `delta_px`, scaled by the viewport height so
    /// one full-height drag sweeps a fixed fraction of a turn.
    pub fn apply_drag(&mut self, delta_px: Vec2, viewport_height: f32) {
        let per_px = TAU * self.config.rotate_speed / viewport_height.max(1.0);
        self.yaw_goal -= delta_px.x * per_px;
        self.polar_goal = (self.polar_goal - delta_px.y * per_px)
            .clamp(self.config.min_polar, self.config.max_polar);
    }

    /// Apply scroll-wheel zoom; one notch scales distance by ~5%.
    /// Positive `notches` (scrolling down) zooms out.
    pub fn apply_zoom(&mut self, notches: f32) {
        let scale = 0.95f32.powf(-notches);
        self.distance_goal = (self.distance_goal * scale)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Advance auto-rotation and ease the pose toward its goals.
    pub fn tick(&mut self, dt: f32, dragging: bool) {
        if !dragging {
            self.yaw_goal += self.config.auto_rotate_speed * dt;
        }
        let alpha = 1.0 - (-dt * self.config.damping).exp();
        self.yaw += (self.yaw_goal - self.yaw) * alpha;
        self.polar += (self.polar_goal - self.polar) * alpha;
        self.distance += (self.distance_goal - self.distance) * alpha;
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn eye(&self) -> Vec3 {
        let sp = self.polar.sin();
        self.target
            + self.distance * Vec3::new(sp * self.yaw.sin(), self.polar.cos(), sp * self.yaw.cos())
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: FRAC_PI_4,
            znear: 0.1,
            zfar: 200.0,
        }
    }
}
