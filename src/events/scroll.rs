use crate::core::PanelNavigator;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed every scroll event to the tick path and re-arm the settle timer, which
/// fires once the track has been still for `settle_delay`.
pub fn wire_scroll(track: &web::Element, nav: Rc<PanelNavigator>, settle_delay: Duration) {
    let timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let settle_track = track.clone();
    let settle_nav = nav.clone();
    let settle_timer = timer.clone();
    let settle: js_sys::Function = Closure::wrap(Box::new(move || {
        settle_timer.set(None);
        let s = dom::scroll_sample(&settle_track);
        settle_nav.on_scroll_settled(s.scroll_left, s.viewport_width);
    }) as Box<dyn FnMut()>)
    .into_js_value()
    .unchecked_into();

    let tick_track = track.clone();
    let delay_ms = settle_delay.as_millis().min(i32::MAX as u128) as i32;
    let on_scroll = Closure::wrap(Box::new(move || {
        let s = dom::scroll_sample(&tick_track);
        nav.on_scroll_tick(s.scroll_left, s.viewport_width);

        let Some(w) = web::window() else {
            return;
        };
        if let Some(handle) = timer.take() {
            w.clear_timeout_with_handle(handle);
        }
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(&settle, delay_ms) {
            Ok(handle) => timer.set(Some(handle)),
            Err(e) => log::warn!("[scroll] settle timer failed: {:?}", e),
        }
    }) as Box<dyn FnMut()>);
    _ = track.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}
