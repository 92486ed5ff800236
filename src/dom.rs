use crate::core::Rect;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ONE;
    };
    let width = w
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Vec2::new(width as f32, height as f32)
}

/// Element bounding box in viewport CSS pixels.
#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Write one style property, ignoring failures on detached elements.
#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Elements matching `selector`, filtered to `HtmlElement`s.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    let Ok(list) = document.query_selector_all(selector) else {
        return out;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                out.push(el);
            }
        }
    }
    out
}

/// Descendants of `root` matching `selector`, filtered to `HtmlElement`s.
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    let Ok(list) = root.query_selector_all(selector) else {
        return out;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                out.push(el);
            }
        }
    }
    out
}

/// Float attribute with a fallback for absent or malformed values.
pub fn attr_f32(el: &web::Element, name: &str, default: f32) -> f32 {
    el.get_attribute(name)
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(default)
}

pub fn has_attr(el: &web::Element, name: &str) -> bool {
    el.has_attribute(name)
}

/// Match the canvas backing store to CSS size * devicePixelRatio. Writing
/// the width/height attributes resets the drawing buffer, so unchanged
/// values are left alone.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = ((rect.width() * dpr) as u32).max(1);
        let h_px = ((rect.height() * dpr) as u32).max(1);
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}

/// Hide an element with the `hidden` class, with an inline fallback.
pub fn hide_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

/// Show an element previously hidden by `hide_by_id`.
pub fn show_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}
