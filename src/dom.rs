use crate::constants::{CONFIG_ATTR_PREFIX, PANEL_SELECTOR};
use crate::core::{LayoutSource, NavConfig, Panel, ScrollSample};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolves once the document has parsed; immediately if it already has.
pub async fn ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn collect(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect(root.query_selector_all(selector))
}

pub fn document_query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect(document.query_selector_all(selector))
}

#[inline]
pub fn scroll_sample(track: &web::Element) -> ScrollSample {
    ScrollSample::new(track.scroll_left() as f64, track.client_width() as f64)
}

/// Panel geometry measured in the track's scroll coordinates.
pub struct DomLayout {
    track: web::Element,
    panels: Vec<web::Element>,
}

impl DomLayout {
    pub fn capture(track: &web::Element) -> Self {
        Self {
            track: track.clone(),
            panels: query_all(track, PANEL_SELECTOR),
        }
    }

    pub fn elements(&self) -> &[web::Element] {
        &self.panels
    }
}

impl LayoutSource for DomLayout {
    fn panels(&self) -> Vec<Panel> {
        let track_rect = self.track.get_bounding_client_rect();
        let scroll_left = self.track.scroll_left() as f64;
        self.panels
            .iter()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                Panel::new(rect.left() - track_rect.left() + scroll_left, rect.width())
            })
            .collect()
    }
}

/// `base` overridden by any `data-nav-*` attributes on `root`. Bad values
/// are logged and skipped.
pub fn read_config(root: &web::Element, base: &NavConfig) -> NavConfig {
    let found: Vec<(&'static str, String)> = NavConfig::OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            root.get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}"))
                .map(|v| (*key, v))
        })
        .collect();
    let (config, errors) =
        base.clone().with_overrides(found.iter().map(|(k, v)| (*k, v.as_str())));
    for e in errors {
        log::warn!("[config] {}", e);
    }
    config
}

/// Page-wide settings from `data-nav-*` on `<body>`; navigator roots start
/// from these.
pub fn read_page_config(document: &web::Document) -> NavConfig {
    match document.body() {
        Some(body) => read_config(&body, &NavConfig::default()),
        None => NavConfig::default(),
    }
}
