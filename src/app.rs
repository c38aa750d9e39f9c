use crate::constants::{NAV_ROOT_SELECTOR, PANEL_SELECTOR, TRACK_SELECTOR};
use crate::core::{FrameScheduler, NavConfig, NavigatorWiring, PanelNavigator, WheelGate};
use crate::dom::{self, DomLayout};
use crate::events;
use crate::frame::{RafScheduler, RafScrollAnimator};
use crate::indicators::DotIndicators;
use crate::reveal;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("panels-web starting");

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
    dom::ready(&document).await?;

    let page = dom::read_page_config(&document);
    if let Err(e) = reveal::wire_section_fade_in(&document, page.reveal_threshold) {
        log::warn!("[reveal] section fade-in unavailable: {:?}", e);
    }

    // Keyboard arrows drive the first navigator on the page
    let mut primary: Option<Rc<PanelNavigator>> = None;
    for (i, root) in dom::document_query_all(&document, NAV_ROOT_SELECTOR)
        .into_iter()
        .enumerate()
    {
        match build_navigator(&root, &page) {
            Ok(nav) => {
                log::info!(
                    "[nav] root {} ready: {} panels, current {}",
                    i,
                    nav.panel_count(),
                    nav.current_index()
                );
                primary.get_or_insert(nav);
            }
            Err(e) => log::error!("[nav] root {} disabled: {:#}", i, e),
        }
    }
    match primary {
        Some(nav) => events::keyboard::wire_global_keydown(nav),
        None => log::info!("no panel navigators on this page"),
    }
    Ok(())
}

fn build_navigator(
    root: &web::Element,
    page: &NavConfig,
) -> anyhow::Result<Rc<PanelNavigator>> {
    let track = root
        .query_selector(TRACK_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", TRACK_SELECTOR))?;
    let config = dom::read_config(root, page);
    let layout = DomLayout::capture(&track);
    if layout.elements().is_empty() {
        log::warn!("[nav] no {} inside {}", PANEL_SELECTOR, TRACK_SELECTOR);
    }

    let frames: Rc<dyn FrameScheduler> = Rc::new(RafScheduler);
    let indicators = Rc::new(DotIndicators::collect(root));
    let wiring = NavigatorWiring {
        animator: Rc::new(RafScrollAnimator::new(track.clone(), frames.clone())),
        indicator: indicators.clone(),
        frames: frames.clone(),
    };
    let nav = Rc::new(PanelNavigator::new(
        &layout,
        wiring,
        config.clone(),
        Some(dom::scroll_sample(&track)),
    )?);

    events::pointer::wire_nav_buttons(root, indicators.dots(), &nav);
    events::pointer::wire_wheel(
        &track,
        nav.clone(),
        WheelGate::new(config.wheel_cooldown, config.wheel_threshold),
    );
    events::scroll::wire_scroll(&track, nav.clone(), config.settle_delay);
    reveal::wire_panel_entrance(
        &track,
        layout.elements().to_vec(),
        nav.panels().clone(),
        config.trigger_offset_px,
        frames,
    );
    Ok(nav)
}
