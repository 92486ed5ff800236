use crate::constants::WHEEL_NOTCH_PX;
use crate::core::InteractionStore;
use crate::input;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared cells the pointer handlers write into. Handlers record intent
/// only; all geometry, picking, and style work happens in the frame loop.
#[derive(Clone)]
pub struct PointerWiring {
    /// Scene canvas, when the page has one. Drag/zoom/select wire to it.
    pub canvas: Option<web::HtmlCanvasElement>,
    pub store: Rc<InteractionStore>,
    pub intent: Rc<RefCell<input::PointerIntent>>,
    pub drag: Rc<RefCell<input::DragState>>,
    /// Drag pixels accumulated since the frame loop last drained them.
    pub drag_delta: Rc<RefCell<Vec2>>,
    /// Wheel notches accumulated since the frame loop last drained them.
    pub zoom_notches: Rc<Cell<f32>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    if w.canvas.is_some() {
        wire_pointerdown(&w);
        wire_pointerup(&w);
        wire_wheel(&w);
    }
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client_px(&ev);
        {
            let mut intent = w.intent.borrow_mut();
            intent.position = pos;
            intent.parked = false;
        }
        let mut drag = w.drag.borrow_mut();
        if drag.active {
            let delta = pos - drag.last;
            drag.last = pos;
            drag.travel_px += delta.length();
            *w.drag_delta.borrow_mut() += delta;
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.intent.borrow_mut().parked = true;
    }) as Box<dyn FnMut(_)>);
    if let Some(doc) = crate::dom::window_document() {
        _ = doc.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let Some(canvas) = w.canvas.clone() else {
        return;
    };
    let listen_target = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        {
            let mut drag = w.drag.borrow_mut();
            drag.active = true;
            drag.last = input::pointer_client_px(&ev);
            drag.travel_px = 0.0;
        }
        _ = canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = listen_target
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let travel = {
            let mut drag = w.drag.borrow_mut();
            let was_active = drag.active;
            drag.active = false;
            was_active.then_some(drag.travel_px)
        };

        // A press that barely moved is a selection, not an orbit drag
        if matches!(travel, Some(t) if t <= crate::constants::CLICK_SLOP_PX) {
            if let Some(key) = w.store.hovered() {
                w.store.set_selected(Some(key));
                log::info!("[pick] selected {} -> {}", key, key.route());
            } else if w.store.selected().is_some() {
                w.store.set_selected(None);
                log::info!("[pick] selection cleared");
            }
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &PointerWiring) {
    let w = w.clone();
    let Some(canvas) = w.canvas.clone() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.zoom_notches
            .set(w.zoom_notches.get() + ev.delta_y() as f32 / WHEEL_NOTCH_PX);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
