use crate::core::{is_text_entry, nav_action_for_key, PanelNavigator};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn target_is_text_entry(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
        .map(|el| is_text_entry(&el.tag_name(), el.is_content_editable()))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, nav: &PanelNavigator) {
    if ev.alt_key() || ev.ctrl_key() || ev.meta_key() || target_is_text_entry(ev) {
        return;
    }
    if let Some(action) = nav_action_for_key(&ev.key()) {
        log::debug!("[keys] {:?}", action);
        nav.apply(action);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(nav: Rc<PanelNavigator>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &nav);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
