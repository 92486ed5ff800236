use fnv::FnvHashMap;
use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

use crate::constants::{
    TOOLTIP_DISTANCE_FACTOR, TOOLTIP_FADE_SEC, TOOLTIP_ID_PREFIX, TOOLTIP_RISE_PX,
};
use crate::core::{project_to_screen, Camera, FadeSlide, Rect, SubsystemKey, SCENE_ANCHORS};
use crate::dom;

struct Tooltip {
    el: web::HtmlElement,
    /// Anchor in satellite model space; follows the idle drift each frame.
    anchor: Vec3,
    fade: FadeSlide,
    shown: bool,
}

impl Tooltip {
    fn hide(&mut self) {
        if self.shown {
            dom::set_style(&self.el, "display", "none");
            self.shown = false;
        }
    }
}

/// Pre-rendered `#tooltip-<slug>` elements from the host page, projected onto
/// their subsystem anchors every frame and faded with the hover state. The
/// fade is reversible, so losing hover mid-entrance turns around smoothly.
pub struct OverlaySet {
    tooltips: FnvHashMap<SubsystemKey, Tooltip>,
}

impl OverlaySet {
    pub fn collect(document: &web::Document) -> Self {
        let mut tooltips = FnvHashMap::default();
        for anchor in SCENE_ANCHORS {
            let id = format!("{}{}", TOOLTIP_ID_PREFIX, anchor.subsystem.slug());
            let Some(el) = dom::html_by_id(document, &id) else {
                continue;
            };
            dom::set_style(&el, "position", "fixed");
            dom::set_style(&el, "left", "0");
            dom::set_style(&el, "top", "0");
            dom::set_style(&el, "pointer-events", "none");
            dom::set_style(&el, "display", "none");
            tooltips.insert(
                anchor.subsystem,
                Tooltip {
                    el,
                    anchor: anchor.world,
                    fade: FadeSlide::new(TOOLTIP_FADE_SEC, TOOLTIP_RISE_PX),
                    shown: false,
                },
            );
        }
        log::info!("[scene] {} subsystem tooltips wired", tooltips.len());
        Self { tooltips }
    }

    /// Project every tooltip through the drifting model pose and the current
    /// camera into page coordinates. Resting-hidden tooltips get no style
    /// writes; anchors behind the camera are hidden outright.
    pub fn apply(
        &mut self,
        camera: &Camera,
        model: Mat4,
        canvas_rect: &Rect,
        hovered: Option<SubsystemKey>,
        dt: f32,
    ) {
        let viewport = Vec2::new(canvas_rect.width, canvas_rect.height);
        for (key, tip) in self.tooltips.iter_mut() {
            tip.fade.set_visible(hovered == Some(*key));
            tip.fade.step(dt);
            if tip.fade.resting_hidden() {
                tip.hide();
                continue;
            }

            let world = model.transform_point3(tip.anchor);
            let Some(px) = project_to_screen(camera, world, viewport) else {
                tip.hide();
                continue;
            };
            let page = canvas_rect.origin() + px;

            // Match the scene's perspective: tooltips shrink with distance.
            let dist = (camera.eye - world).length().max(1e-3);
            let world_scale =
                TOOLTIP_DISTANCE_FACTOR / (2.0 * (camera.fovy_radians * 0.5).tan() * dist);

            let style = tip.fade.style();
            if !tip.shown {
                dom::set_style(&tip.el, "display", "block");
                tip.shown = true;
            }
            dom::set_style(&tip.el, "opacity", &format!("{:.3}", style.opacity));
            dom::set_style(
                &tip.el,
                "transform",
                &format!(
                    "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%) \
                     translate3d(0, {:.2}px, 0) scale({:.4})",
                    page.x,
                    page.y,
                    style.translate.y,
                    world_scale * style.scale
                ),
            );
        }
    }
}
