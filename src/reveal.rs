use std::cell::RefCell;
use std::rc::Rc;

use smallvec::{smallvec, SmallVec};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{
    stagger_delay, Reveal, RevealKind, RevealStyle, DELAY_CHILDREN, DUR_NORMAL, STAGGER_LIST,
    STAGGER_SECTION, STAGGER_WORDS,
};
use crate::dom;

// Host-page markup contract:
//   data-reveal="fade|slide-up|slide-down|slide-left|slide-right|blur|scale|words"
//     [data-reveal-delay] [data-reveal-duration] [data-reveal-distance]
//   data-reveal-group (optionally ="list" for tighter list timing) containers
//     stagger their [data-reveal-item] descendants; an item value overrides
//     the default slide-up kind.

struct RevealPart {
    el: web::HtmlElement,
    reveal: Reveal,
    finished: bool,
}

impl RevealPart {
    fn new(el: web::HtmlElement, reveal: Reveal) -> Self {
        Self {
            el,
            reveal,
            finished: false,
        }
    }
}

/// One observed element and the parts it reveals: itself, its word spans, or
/// its staggered group items. Most entries reveal a single part.
struct RevealEntry {
    watch: web::HtmlElement,
    parts: SmallVec<[RevealPart; 4]>,
    finished: bool,
}

/// All reveal-annotated elements, hidden at scan time and entered once when
/// their watch element first intersects the viewport (100px inset, one-shot).
/// The observer callback only queues indices; the frame loop owns every style
/// write so entrances share the clamped frame clock with the other effects.
pub struct RevealSet {
    entries: Vec<RevealEntry>,
    pending: Rc<RefCell<Vec<usize>>>,
    observer: Option<web::IntersectionObserver>,
}

impl RevealSet {
    pub fn scan(document: &web::Document) -> Self {
        let mut entries = Vec::new();

        for el in dom::query_all(document, "[data-reveal]") {
            let value = el.get_attribute("data-reveal").unwrap_or_default();
            let delay = dom::attr_f32(&el, "data-reveal-delay", 0.0);
            let distance = dom::attr_f32(&el, "data-reveal-distance", 30.0);
            let kind = parse_kind(&value, distance).unwrap_or_else(|| {
                log::warn!("[reveal] unknown kind {value:?}, using fade");
                RevealKind::Fade
            });
            let duration = dom::attr_f32(&el, "data-reveal-duration", kind.duration());

            let parts: SmallVec<[RevealPart; 4]> = if kind == RevealKind::WordRise {
                split_words(document, &el)
                    .into_iter()
                    .enumerate()
                    .map(|(i, span)| {
                        let reveal =
                            Reveal::new(kind, stagger_delay(delay, i, STAGGER_WORDS))
                                .with_duration(duration);
                        RevealPart::new(span, reveal)
                    })
                    .collect()
            } else {
                smallvec![RevealPart::new(
                    el.clone(),
                    Reveal::new(kind, delay).with_duration(duration),
                )]
            };
            if parts.is_empty() {
                continue;
            }
            entries.push(RevealEntry {
                watch: el,
                parts,
                finished: false,
            });
        }

        for group in dom::query_all(document, "[data-reveal-group]") {
            let list = group.get_attribute("data-reveal-group").as_deref() == Some("list");
            let (stagger, base_delay, distance, duration) = if list {
                (STAGGER_LIST, 0.0, 16.0, 0.3)
            } else {
                (STAGGER_SECTION, DELAY_CHILDREN, 24.0, DUR_NORMAL)
            };

            let parts: SmallVec<[RevealPart; 4]> = dom::query_all_in(&group, "[data-reveal-item]")
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let value = item.get_attribute("data-reveal-item").unwrap_or_default();
                    let d = dom::attr_f32(&item, "data-reveal-distance", distance);
                    let kind = match parse_kind(&value, d) {
                        // Word splitting is not supported inside groups.
                        Some(RevealKind::WordRise) | None => RevealKind::SlideUp(d),
                        Some(kind) => kind,
                    };
                    let reveal = Reveal::new(kind, stagger_delay(base_delay, i, stagger))
                        .with_duration(duration);
                    RevealPart::new(item, reveal)
                })
                .collect();
            if parts.is_empty() {
                continue;
            }
            entries.push(RevealEntry {
                watch: group,
                parts,
                finished: false,
            });
        }

        for (i, entry) in entries.iter().enumerate() {
            _ = entry.watch.set_attribute("data-reveal-id", &i.to_string());
            for part in &entry.parts {
                write_reveal_style(&part.el, part.reveal.kind(), &part.reveal.style(0.0));
            }
        }

        let part_count: usize = entries.iter().map(|e| e.parts.len()).sum();
        log::info!("[reveal] scan: {} entries, {} parts", entries.len(), part_count);

        let pending: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let observer = make_observer(&pending);
        match &observer {
            Some(obs) => {
                for entry in &entries {
                    obs.observe(&entry.watch);
                }
            }
            None => {
                // No observer support; enter everything on the first frame.
                pending.borrow_mut().extend(0..entries.len());
            }
        }

        Self {
            entries,
            pending,
            observer,
        }
    }

    /// Drain viewport crossings queued by the observer, then advance every
    /// in-flight entrance to timeline second `now`.
    pub fn apply(&mut self, now: f32) {
        let drained: Vec<usize> = self.pending.borrow_mut().drain(..).collect();
        for id in drained {
            if let Some(entry) = self.entries.get_mut(id) {
                for part in &mut entry.parts {
                    part.reveal.trigger(now);
                }
            }
        }

        for entry in &mut self.entries {
            if entry.finished {
                continue;
            }
            let mut all_done = true;
            for part in &mut entry.parts {
                if part.finished {
                    continue;
                }
                if !part.reveal.triggered() {
                    all_done = false;
                    continue;
                }
                write_reveal_style(&part.el, part.reveal.kind(), &part.reveal.style(now));
                if part.reveal.done(now) {
                    part.finished = true;
                } else {
                    all_done = false;
                }
            }
            entry.finished = all_done;
        }

        if self.observer.is_some() && self.entries.iter().all(|e| e.finished) {
            if let Some(obs) = self.observer.take() {
                obs.disconnect();
            }
        }
    }
}

fn parse_kind(value: &str, distance: f32) -> Option<RevealKind> {
    match value {
        "" | "fade" => Some(RevealKind::Fade),
        "slide-up" => Some(RevealKind::SlideUp(distance)),
        "slide-down" => Some(RevealKind::SlideDown(distance)),
        "slide-left" => Some(RevealKind::SlideLeft(distance)),
        "slide-right" => Some(RevealKind::SlideRight(distance)),
        "blur" => Some(RevealKind::Blur),
        "scale" => Some(RevealKind::Scale),
        "words" => Some(RevealKind::WordRise),
        _ => None,
    }
}

/// One-shot observer that records which entries crossed into view. Unobserves
/// each target on its first crossing, so scrolling away never re-queues it.
fn make_observer(pending: &Rc<RefCell<Vec<usize>>>) -> Option<web::IntersectionObserver> {
    let pending = pending.clone();
    let cb = Closure::wrap(Box::new(
        move |hits: js_sys::Array, obs: web::IntersectionObserver| {
            for hit in hits.iter() {
                let Ok(entry) = hit.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(id) = target
                    .get_attribute("data-reveal-id")
                    .and_then(|v| v.parse::<usize>().ok())
                {
                    pending.borrow_mut().push(id);
                }
                obs.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin("-100px");
    let observer =
        web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init).ok();
    cb.forget();
    observer
}

/// Rebuild the element's text as word spans: an overflow-hidden wrapper
/// clipping an inner span that rises into place. Returns the inner spans.
fn split_words(document: &web::Document, el: &web::HtmlElement) -> Vec<web::HtmlElement> {
    let text = el.text_content().unwrap_or_default();
    let words: Vec<&str> = text.split_whitespace().collect();
    el.set_text_content(None);

    let mut spans = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let (Some(outer), Some(inner)) = (create_span(document), create_span(document)) else {
            continue;
        };
        dom::set_style(&outer, "display", "inline-block");
        dom::set_style(&outer, "overflow", "hidden");
        dom::set_style(&inner, "display", "inline-block");
        inner.set_text_content(Some(word));
        _ = outer.append_child(&inner);
        if i + 1 < words.len() {
            let sep = document.create_text_node("\u{a0}");
            _ = outer.append_child(&sep);
        }
        _ = el.append_child(&outer);
        spans.push(inner);
    }
    spans
}

fn create_span(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .create_element("span")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

fn write_reveal_style(el: &web::HtmlElement, kind: RevealKind, style: &RevealStyle) {
    match kind {
        RevealKind::WordRise => {
            dom::set_style(
                el,
                "transform",
                &format!("translate3d(0, {:.2}%, 0)", style.translate.y),
            );
        }
        RevealKind::Blur => {
            dom::set_style(el, "opacity", &format!("{:.3}", style.opacity));
            dom::set_style(el, "filter", &format!("blur({:.2}px)", style.blur_px));
        }
        RevealKind::Scale => {
            dom::set_style(el, "opacity", &format!("{:.3}", style.opacity));
            dom::set_style(el, "transform", &format!("scale({:.4})", style.scale));
        }
        _ => {
            dom::set_style(el, "opacity", &format!("{:.3}", style.opacity));
            dom::set_style(
                el,
                "transform",
                &format!(
                    "translate3d({:.2}px, {:.2}px, 0)",
                    style.translate.x, style.translate.y
                ),
            );
        }
    }
}
