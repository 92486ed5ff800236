use glam::{Vec2, Vec3};
use web_sys as web;

/// Raw pointer state recorded by event handlers between frames.
///
/// Handlers only write intent; the frame loop publishes at most one
/// `PointerSample` per frame from it, so a burst of move events collapses
/// into a single downstream update.
#[derive(Clone, Copy, Debug)]
pub struct PointerIntent {
    /// Latest position in viewport CSS pixels.
    pub position: Vec2,
    /// Set on leave, cleared on the next move. While parked, samples carry
    /// the far-offscreen sentinel so effects decay to rest.
    pub parked: bool,
}

impl Default for PointerIntent {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            // No events yet reads the same as "pointer not on the page"
            parked: true,
        }
    }
}

/// Orbit drag bookkeeping for the scene canvas.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
    /// Total distance travelled this press, to tell clicks from drags.
    pub travel_px: f32,
}

/// The per-frame pointer signal every effect consumes.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    /// Viewport CSS pixels; the parked sentinel when `parked`.
    pub position: Vec2,
    /// Viewport position mapped to [-1, 1] per axis; zero when parked so
    /// normalized-driven effects see a centered (resting) pointer.
    pub normalized: Vec2,
    /// Pixels moved since the previous sample; zero on the first sample
    /// after (re)entry.
    pub velocity: Vec2,
    pub parked: bool,
}

/// Turns raw intent into one published sample per frame.
#[derive(Default, Debug)]
pub struct PointerSampler {
    last_position: Option<Vec2>,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, intent: &PointerIntent, viewport: Vec2, parked_at: Vec2) -> PointerSample {
        if intent.parked {
            self.last_position = None;
            return PointerSample {
                position: parked_at,
                normalized: Vec2::ZERO,
                velocity: Vec2::ZERO,
                parked: true,
            };
        }
        let velocity = match self.last_position {
            Some(prev) => intent.position - prev,
            None => Vec2::ZERO,
        };
        self.last_position = Some(intent.position);
        PointerSample {
            position: intent.position,
            normalized: viewport_normalized(intent.position, viewport),
            velocity,
            parked: false,
        }
    }
}

/// Viewport position mapped to [-1, 1] per axis, origin at the center.
#[inline]
pub fn viewport_normalized(position: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (position.x / viewport.x.max(1.0)) * 2.0 - 1.0,
        (position.y / viewport.y.max(1.0)) * 2.0 - 1.0,
    )
}

/// Pointer-event position in viewport CSS pixels.
#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Ray-sphere hit test; distance along the ray to the near intersection.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
