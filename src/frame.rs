use crate::constants::*;
use crate::core::{
    float_pose, screen_to_world_ray, InteractionStore, OrbitConfig, OrbitRig, SubsystemKey,
    POINTER_PARKED, SCENE_ANCHORS,
};
use crate::dom;
use crate::effects::EffectRegistry;
use crate::input::{self, DragState, PointerIntent, PointerSampler};
use crate::overlay::OverlaySet;
use crate::render::{self, SceneFrame};
use crate::reveal::RevealSet;
use glam::{Mat4, Vec2, Vec3};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the 3D scene needs that only exists once WebGPU init
/// succeeded. Pages without a scene canvas never build one of these and
/// run the motion layer alone.
pub struct SceneParts {
    pub canvas: web::HtmlCanvasElement,
    pub rig: OrbitRig,
    pub overlays: OverlaySet,
    pub gpu: render::GpuState<'static>,
}

impl SceneParts {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        overlays: OverlaySet,
        gpu: render::GpuState<'static>,
    ) -> Self {
        Self {
            canvas,
            rig: OrbitRig::new(CAMERA_EYE, CAMERA_TARGET, OrbitConfig::default()),
            overlays,
            gpu,
        }
    }
}

pub struct FrameContext {
    pub store: Rc<InteractionStore>,
    pub intent: Rc<RefCell<PointerIntent>>,
    pub drag: Rc<RefCell<DragState>>,
    pub drag_delta: Rc<RefCell<Vec2>>,
    pub zoom_notches: Rc<Cell<f32>>,

    pub sampler: PointerSampler,
    pub effects: EffectRegistry,
    pub reveals: RevealSet,
    pub scene: Option<SceneParts>,

    pub last_instant: Instant,
    pub time_accum: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;
        self.time_accum += dt;

        let viewport = dom::viewport_size();
        let sample = {
            let intent = self.intent.borrow();
            self.sampler.publish(&intent, viewport, POINTER_PARKED)
        };

        self.effects.prune_disconnected();
        let region_hover = self.effects.apply(&sample, dt);
        self.reveals.apply(self.time_accum);

        // A canvas that left the document takes the whole scene with it.
        if self.scene.as_ref().is_some_and(|s| !s.canvas.is_connected()) {
            self.scene = None;
        }

        let mut lost_surface = false;
        if let Some(scene) = &mut self.scene {
            let rect = dom::element_rect(&scene.canvas);

            let drag_delta = std::mem::take(&mut *self.drag_delta.borrow_mut());
            let notches = self.zoom_notches.replace(0.0);
            scene.rig.apply_drag(drag_delta, rect.height);
            scene.rig.apply_zoom(notches);
            let dragging = self.drag.borrow().active;
            scene.rig.tick(dt, dragging);

            dom::sync_canvas_backing_size(&scene.canvas);
            let w = scene.canvas.width();
            let h = scene.canvas.height();
            let aspect = w.max(1) as f32 / h.max(1) as f32;
            let camera = scene.rig.camera(aspect);
            let model = float_pose(
                self.time_accum,
                FLOAT_SPEED,
                FLOAT_ROTATION_INTENSITY,
                FLOAT_INTENSITY,
            );

            // Hovering a marker beats hovering a DOM region; dragging
            // suppresses picking so the orbit gesture never flickers
            // tooltips.
            let picked = if !sample.parked && !dragging && rect.contains(sample.position) {
                rect.fraction_within(sample.position).and_then(|frac| {
                    let backing = Vec2::new(w as f32, h as f32);
                    let (origin, dir) = screen_to_world_ray(&camera, frac * backing, backing);
                    pick_marker(origin, dir, model)
                })
            } else {
                None
            };
            self.store.set_hovered(picked.or(region_hover));

            scene
                .overlays
                .apply(&camera, model, &rect, self.store.hovered(), dt);

            scene.gpu.resize_if_needed(w, h);
            let frame = SceneFrame {
                camera,
                model,
                marker_levels: marker_levels(&self.store),
            };
            match scene.gpu.render(dt, &frame) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    scene.gpu.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[scene] surface out of memory, dropping the scene");
                    lost_surface = true;
                }
                Err(e) => log::warn!("[scene] render error: {:?}", e),
            }
        } else {
            self.store.set_hovered(region_hover);
        }

        if lost_surface {
            self.scene = None;
            if let Some(doc) = dom::window_document() {
                dom::show_by_id(&doc, SCENE_FALLBACK_ID);
            }
        }

        self.effects.mirror_store(&self.store);
    }
}

/// Emphasis level per subsystem marker, indexed by `SubsystemKey::index`.
/// Hover outranks selection when both land on the same marker.
fn marker_levels(store: &InteractionStore) -> [f32; 6] {
    let mut levels = [1.0; 6];
    if let Some(key) = store.selected() {
        levels[key.index()] = SELECT_BRIGHTEN;
    }
    if let Some(key) = store.hovered() {
        levels[key.index()] = HOVER_BRIGHTEN;
    }
    levels
}

/// Nearest marker sphere hit by the pick ray, if any. Anchors ride the
/// drifting model pose, so they are transformed before the test.
fn pick_marker(origin: Vec3, dir: Vec3, model: Mat4) -> Option<SubsystemKey> {
    let mut best: Option<(f32, SubsystemKey)> = None;
    for anchor in SCENE_ANCHORS {
        let center = model.transform_point3(anchor.world);
        if let Some(t) = input::ray_sphere(origin, dir, center, PICK_SPHERE_RADIUS) {
            if best.is_none_or(|(bt, _)| t < bt) {
                best = Some((t, anchor.subsystem));
            }
        }
    }
    best.map(|(_, key)| key)
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
