use crate::constants::{NEXT_SELECTOR, PREV_SELECTOR};
use crate::core::{PanelNavigator, WheelGate};
use crate::dom;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Prev/next buttons under `root` and one click target per dot.
pub fn wire_nav_buttons(root: &web::Element, dots: &[web::Element], nav: &Rc<PanelNavigator>) {
    for el in dom::query_all(root, PREV_SELECTOR) {
        let nav = nav.clone();
        dom::add_click_listener(&el, move || nav.previous());
    }
    for el in dom::query_all(root, NEXT_SELECTOR) {
        let nav = nav.clone();
        dom::add_click_listener(&el, move || nav.next());
    }
    for (i, dot) in dots.iter().enumerate() {
        let nav = nav.clone();
        dom::add_click_listener(dot, move || {
            log::debug!("[click] dot {}", i);
            nav.go_to(i as i64);
        });
    }
}

/// Vertical wheel over the track steps panels; horizontal wheel is left to
/// native scrolling, which the scroll listeners already track.
pub fn wire_wheel(track: &web::Element, nav: Rc<PanelNavigator>, mut gate: WheelGate) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let (dx, dy) = (ev.delta_x(), ev.delta_y());
        if dx.abs() >= dy.abs() {
            return;
        }
        ev.prevent_default();
        if let Some(action) = gate.step(dx, dy, Instant::now()) {
            nav.apply(action);
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = track.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
