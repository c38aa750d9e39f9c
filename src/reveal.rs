use crate::constants::{ENTERED_CLASS, SECTION_SELECTOR, VISIBLE_CLASS};
use crate::core::{FrameCoalescer, FrameScheduler, PanelEntrance, PanelSet, ScrollSample};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fade sections in the first time enough of them is on screen.
pub fn wire_section_fade_in(document: &web::Document, threshold: f64) -> anyhow::Result<()> {
    let sections = dom::document_query_all(document, SECTION_SELECTOR);
    if sections.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();
    for s in &sections {
        observer.observe(s);
    }
    log::info!("[reveal] observing {} sections", sections.len());
    Ok(())
}

struct EntranceState {
    track: web::Element,
    elements: Vec<web::Element>,
    panels: PanelSet,
    entrance: RefCell<PanelEntrance>,
    pending: FrameCoalescer<ScrollSample>,
}

impl EntranceState {
    fn flush(&self) {
        let Some(sample) = self.pending.take() else {
            return;
        };
        let newly = self.entrance.borrow_mut().update(&self.panels, sample);
        for i in newly {
            if let Some(el) = self.elements.get(i) {
                _ = el.class_list().add_1(ENTERED_CLASS);
            }
        }
    }
}

/// Mark panels `entered` as they reach the viewport center while scrolling.
pub fn wire_panel_entrance(
    track: &web::Element,
    elements: Vec<web::Element>,
    panels: PanelSet,
    trigger_offset_px: f64,
    frames: Rc<dyn FrameScheduler>,
) {
    let state = Rc::new(EntranceState {
        track: track.clone(),
        entrance: RefCell::new(PanelEntrance::new(panels.len(), trigger_offset_px)),
        elements,
        panels,
        pending: FrameCoalescer::new(),
    });
    state.pending.submit(dom::scroll_sample(track));
    state.flush();

    let closure = Closure::wrap(Box::new(move || {
        if state.entrance.borrow().all_entered() {
            return;
        }
        if state.pending.submit(dom::scroll_sample(&state.track)) {
            let s = state.clone();
            frames.request_frame(Box::new(move || s.flush()));
        }
    }) as Box<dyn FnMut()>);
    _ = track.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
