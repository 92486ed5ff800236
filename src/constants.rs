use glam::Vec3;

// Shared motion/scene tuning constants used by the web frontend.

// Frame pacing
pub const MAX_FRAME_DT: f32 = 0.05; // largest dt fed to springs; tab stalls resume without a lurch

// A click that traveled further than this is a drag, not a selection
pub const CLICK_SLOP_PX: f32 = 5.0;

// Wheel pixels per zoom notch
pub const WHEEL_NOTCH_PX: f32 = 100.0;

// Element ids expected in the host page
pub const SCENE_CANVAS_ID: &str = "sat-canvas";
pub const SCENE_FALLBACK_ID: &str = "scene-fallback";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const TOOLTIP_ID_PREFIX: &str = "tooltip-";

// Camera rig
pub const CAMERA_EYE: Vec3 = Vec3::new(4.0, 2.0, 4.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

// Picking
pub const PICK_SPHERE_RADIUS: f32 = 0.35;

// Marker sizing and emphasis levels fed to the shader
pub const MARKER_RADIUS: f32 = 0.12;
pub const HOVER_BRIGHTEN: f32 = 1.4;
pub const SELECT_BRIGHTEN: f32 = 1.15;

// Satellite idle drift
pub const FLOAT_SPEED: f32 = 1.5;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.1;
pub const FLOAT_INTENSITY: f32 = 0.3;

// Starfield
pub const STAR_COUNT: usize = 2000;
pub const STAR_INNER_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_SEED: u64 = 42;

// Cursor glow defaults
pub const GLOW_SIZE_PX: f32 = 500.0;
pub const GLOW_COLOR: &str = "rgba(180, 120, 90, 0.12)";

// Spotlight defaults
pub const SPOTLIGHT_COLOR: &str = "rgba(120, 119, 198, 0.15)";

// Scene tooltip motion
pub const TOOLTIP_FADE_SEC: f32 = 0.35;
pub const TOOLTIP_RISE_PX: f32 = 10.0;
pub const TOOLTIP_DISTANCE_FACTOR: f32 = 10.0; // world-size scaling for projected tooltips

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.9;
pub const BLOOM_THRESHOLD: f32 = 0.6;
