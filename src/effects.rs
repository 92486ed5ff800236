use crate::constants::{GLOW_COLOR, GLOW_SIZE_PX, SPOTLIGHT_COLOR};
use crate::core::{
    CursorGlow, InteractionStore, Magnetic, MagneticConfig, ParallaxConfig, ParallaxLayer,
    Spotlight, SpotlightConfig, SubsystemKey, TiltCard, TiltConfig,
};
use crate::dom;
use crate::input::PointerSample;
use wasm_bindgen::JsCast;
use web_sys as web;

// Host-page markup contract, one attribute family per effect:
//   data-parallax="0.05"  [data-parallax-invert]
//   data-magnetic         [data-magnetic-strength] [data-magnetic-radius]
//   data-tilt             [data-tilt-amount] [data-tilt-glare] [data-tilt-scale]
//   data-spotlight        [data-spotlight-color]
//   data-cursor-glow      [data-glow-size] [data-glow-color]
//   data-subsystem="adcs" marks a hover region tied to a subsystem
// Hover regions get data-hovered / data-selected mirrored back onto them.

struct ParallaxEntry {
    el: web::HtmlElement,
    state: ParallaxLayer,
}

struct MagneticEntry {
    el: web::HtmlElement,
    state: Magnetic,
}

struct TiltEntry {
    el: web::HtmlElement,
    glare_el: Option<web::HtmlElement>,
    glare_opacity: f32,
    state: TiltCard,
}

struct SpotlightEntry {
    el: web::HtmlElement,
    layer_el: web::HtmlElement,
    color: String,
    state: Spotlight,
}

struct HoverRegion {
    el: web::HtmlElement,
    key: SubsystemKey,
}

struct GlowEntry {
    el: web::HtmlElement,
    color: String,
    state: CursorGlow,
}

/// Every effect-annotated element on the page, scanned once at startup.
/// The frame loop drives all entries from a single pointer sample; geometry
/// is re-read per frame so layout changes never stale the effects.
pub struct EffectRegistry {
    parallax: Vec<ParallaxEntry>,
    magnetic: Vec<MagneticEntry>,
    tilt: Vec<TiltEntry>,
    spotlight: Vec<SpotlightEntry>,
    regions: Vec<HoverRegion>,
    glow: Option<GlowEntry>,
    seen_revs: (u64, u64),
}

impl EffectRegistry {
    pub fn scan(document: &web::Document) -> Self {
        let parallax = dom::query_all(document, "[data-parallax]")
            .into_iter()
            .map(|el| {
                let config = ParallaxConfig {
                    depth: dom::attr_f32(&el, "data-parallax", ParallaxConfig::default().depth),
                    invert: dom::has_attr(&el, "data-parallax-invert"),
                };
                ParallaxEntry {
                    el,
                    state: ParallaxLayer::new(config),
                }
            })
            .collect::<Vec<_>>();

        let magnetic = dom::query_all(document, "[data-magnetic]")
            .into_iter()
            .map(|el| {
                let defaults = MagneticConfig::default();
                let config = MagneticConfig {
                    strength: dom::attr_f32(&el, "data-magnetic-strength", defaults.strength),
                    radius: dom::attr_f32(&el, "data-magnetic-radius", defaults.radius),
                };
                MagneticEntry {
                    el,
                    state: Magnetic::new(config),
                }
            })
            .collect::<Vec<_>>();

        let tilt = dom::query_all(document, "[data-tilt]")
            .into_iter()
            .map(|el| {
                let defaults = TiltConfig::default();
                let config = TiltConfig {
                    tilt_amount: dom::attr_f32(&el, "data-tilt-amount", defaults.tilt_amount),
                    glare_opacity: dom::attr_f32(&el, "data-tilt-glare", defaults.glare_opacity),
                    hover_scale: dom::attr_f32(&el, "data-tilt-scale", defaults.hover_scale),
                };
                let glare_el = (config.glare_opacity > 0.0)
                    .then(|| create_overlay_layer(document, &el))
                    .flatten();
                TiltEntry {
                    el,
                    glare_el,
                    glare_opacity: config.glare_opacity,
                    state: TiltCard::new(config),
                }
            })
            .collect::<Vec<_>>();

        let spotlight = dom::query_all(document, "[data-spotlight]")
            .into_iter()
            .filter_map(|el| {
                let layer_el = create_overlay_layer(document, &el)?;
                let color = el
                    .get_attribute("data-spotlight-color")
                    .unwrap_or_else(|| SPOTLIGHT_COLOR.to_string());
                let rect = dom::element_rect(&el);
                let rest = rect.center() - rect.origin();
                Some(SpotlightEntry {
                    el,
                    layer_el,
                    color,
                    state: Spotlight::new(SpotlightConfig::default(), rest),
                })
            })
            .collect::<Vec<_>>();

        let regions = dom::query_all(document, "[data-subsystem]")
            .into_iter()
            .filter_map(|el| {
                let slug = el.get_attribute("data-subsystem")?;
                let key = SubsystemKey::from_slug(&slug)?;
                Some(HoverRegion { el, key })
            })
            .collect::<Vec<_>>();

        let glow = dom::query_all(document, "[data-cursor-glow]")
            .into_iter()
            .next()
            .map(|el| {
                let size = dom::attr_f32(&el, "data-glow-size", GLOW_SIZE_PX);
                let color = el
                    .get_attribute("data-glow-color")
                    .unwrap_or_else(|| GLOW_COLOR.to_string());
                GlowEntry {
                    el,
                    color,
                    state: CursorGlow::new(size),
                }
            });

        log::info!(
            "[effects] scan: {} parallax, {} magnetic, {} tilt, {} spotlight, {} regions, glow={}",
            parallax.len(),
            magnetic.len(),
            tilt.len(),
            spotlight.len(),
            regions.len(),
            glow.is_some()
        );

        Self {
            parallax,
            magnetic,
            tilt,
            spotlight,
            regions,
            glow,
            seen_revs: (u64::MAX, u64::MAX),
        }
    }

    /// Mirror hover/selection onto the region elements as `data-hovered` /
    /// `data-selected`, so host CSS can restyle cards without its own JS.
    /// Cheap no-op while the store revisions are unchanged.
    pub fn mirror_store(&mut self, store: &InteractionStore) {
        let revs = (store.hovered_rev(), store.selected_rev());
        if self.seen_revs == revs {
            return;
        }
        self.seen_revs = revs;
        for region in &self.regions {
            set_flag_attr(&region.el, "data-hovered", store.hovered() == Some(region.key));
            set_flag_attr(
                &region.el,
                "data-selected",
                store.selected() == Some(region.key),
            );
        }
    }

    /// Drop entries whose elements left the document.
    pub fn prune_disconnected(&mut self) {
        self.parallax.retain(|e| e.el.is_connected());
        self.magnetic.retain(|e| e.el.is_connected());
        self.tilt.retain(|e| e.el.is_connected());
        self.spotlight.retain(|e| e.el.is_connected());
        self.regions.retain(|e| e.el.is_connected());
        if let Some(g) = &self.glow {
            if !g.el.is_connected() {
                self.glow = None;
            }
        }
    }

    /// Advance every effect one frame and write styles for the ones still in
    /// motion. Returns the subsystem whose hover region contains the pointer.
    pub fn apply(&mut self, sample: &PointerSample, dt: f32) -> Option<SubsystemKey> {
        for entry in &mut self.parallax {
            entry.state.set_pointer(sample.normalized);
            let offset = entry.state.step(dt);
            if !entry.state.settled() {
                dom::set_style(
                    &entry.el,
                    "transform",
                    &format!("translate3d({:.2}px, {:.2}px, 0)", offset.x, offset.y),
                );
            }
        }

        for entry in &mut self.magnetic {
            if sample.parked {
                entry.state.release();
            } else {
                let rect = dom::element_rect(&entry.el);
                entry.state.set_pointer(sample.position, &rect);
            }
            let offset = entry.state.step(dt);
            if !entry.state.settled() {
                dom::set_style(
                    &entry.el,
                    "transform",
                    &format!("translate3d({:.2}px, {:.2}px, 0)", offset.x, offset.y),
                );
            }
        }

        for entry in &mut self.tilt {
            let rect = dom::element_rect(&entry.el);
            let inside = !sample.parked && rect.contains(sample.position);
            entry.state.set_hovered(inside);
            if inside {
                entry.state.set_pointer(sample.position, &rect);
            }
            let frame = entry.state.step(dt);
            if !entry.state.settled() {
                dom::set_style(
                    &entry.el,
                    "transform",
                    &format!(
                        "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
                        frame.rotate_x, frame.rotate_y, frame.scale
                    ),
                );
                if let Some(glare) = &entry.glare_el {
                    dom::set_style(
                        glare,
                        "background",
                        &format!(
                            "radial-gradient(circle at {:.1}% {:.1}%, rgba(255,255,255,{}), transparent 50%)",
                            frame.glare.x, frame.glare.y, entry.glare_opacity
                        ),
                    );
                }
            }
        }

        for entry in &mut self.spotlight {
            if !sample.parked {
                let rect = dom::element_rect(&entry.el);
                entry.state.set_pointer(sample.position, &rect);
            }
            let center = entry.state.step(dt);
            if !entry.state.settled() {
                dom::set_style(
                    &entry.layer_el,
                    "background",
                    &format!(
                        "radial-gradient({:.0}px circle at {:.1}px {:.1}px, {}, transparent 60%)",
                        entry.state.radius(),
                        center.x,
                        center.y,
                        entry.color
                    ),
                );
            }
        }

        if let Some(glow) = &mut self.glow {
            if sample.parked {
                glow.state.park();
            } else {
                glow.state.set_pointer(sample.position);
            }
            let center = glow.state.step(dt);
            if !glow.state.settled() {
                dom::set_style(
                    &glow.el,
                    "background",
                    &format!(
                        "radial-gradient({:.0}px circle at {:.1}px {:.1}px, {}, transparent 60%)",
                        glow.state.size, center.x, center.y, glow.color
                    ),
                );
            }
        }

        if sample.parked {
            return None;
        }
        self.regions
            .iter()
            .find(|r| dom::element_rect(&r.el).contains(sample.position))
            .map(|r| r.key)
    }
}

fn set_flag_attr(el: &web::HtmlElement, name: &str, on: bool) {
    if on {
        _ = el.set_attribute(name, "");
    } else {
        _ = el.remove_attribute(name);
    }
}

/// Absolutely-positioned child layer for glare/spotlight gradients, so the
/// gradient never fights the host element's own background.
fn create_overlay_layer(
    document: &web::Document,
    host: &web::HtmlElement,
) -> Option<web::HtmlElement> {
    let layer = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    dom::set_style(&layer, "position", "absolute");
    dom::set_style(&layer, "inset", "0");
    dom::set_style(&layer, "pointer-events", "none");
    dom::set_style(&layer, "border-radius", "inherit");
    host.append_child(&layer).ok()?;
    Some(layer)
}
