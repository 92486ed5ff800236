pub mod camera;
pub mod ease;
pub mod effects;
pub mod geom;
pub mod reveal;
pub mod scene;
pub mod spring;
pub mod subsystem;

pub use camera::*;
pub use ease::*;
pub use effects::*;
pub use geom::*;
pub use reveal::*;
pub use scene::*;
pub use spring::*;
pub use subsystem::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
