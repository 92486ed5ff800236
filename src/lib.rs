#![cfg(target_arch = "wasm32")]
use crate::constants::{SCENE_CANVAS_ID, SCENE_FALLBACK_ID, START_OVERLAY_ID};
use crate::core::InteractionStore;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod reveal;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("astraeus-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // The scene canvas is optional; content pages run the motion layer alone.
    let canvas = document
        .get_element_by_id(SCENE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());

    let store = Rc::new(InteractionStore::new());
    let intent = Rc::new(RefCell::new(input::PointerIntent::default()));
    let drag = Rc::new(RefCell::new(input::DragState::default()));
    let drag_delta = Rc::new(RefCell::new(Vec2::ZERO));
    let zoom_notches = Rc::new(Cell::new(0.0_f32));

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        store: store.clone(),
        intent: intent.clone(),
        drag: drag.clone(),
        drag_delta: drag_delta.clone(),
        zoom_notches: zoom_notches.clone(),
    });

    let effects = effects::EffectRegistry::scan(&document);
    let reveals = reveal::RevealSet::scan(&document);

    let scene = match &canvas {
        Some(canvas) => {
            wire_canvas_resize(canvas);
            let overlays = overlay::OverlaySet::collect(&document);
            let parts = match frame::init_gpu(canvas).await {
                Some(gpu) => Some(frame::SceneParts::new(canvas.clone(), overlays, gpu)),
                None => {
                    dom::show_by_id(&document, SCENE_FALLBACK_ID);
                    None
                }
            };
            // Either way the page is ready; drop the loading overlay.
            dom::hide_by_id(&document, START_OVERLAY_ID);
            parts
        }
        None => {
            log::info!("no #{} element, running the motion layer only", SCENE_CANVAS_ID);
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        store,
        intent,
        drag,
        drag_delta,
        zoom_notches,
        sampler: input::PointerSampler::new(),
        effects,
        reveals,
        scene,
        last_instant: Instant::now(),
        time_accum: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
