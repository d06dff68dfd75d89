#![cfg(target_arch = "wasm32")]
use crate::core::{ProgressSmoother, SmoothingKind, Theme, ThemeSpec, DOMINO_IMAGES};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
#[allow(dead_code)] // some helpers are only reached from host tests
mod core;
mod dom;
mod events;
mod frame;
mod stage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("domino-scroll starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Theme from `?theme=`, then `<body data-theme>`, then the default.
fn select_theme_spec(document: &web::Document) -> &'static ThemeSpec {
    let requested = dom::query_param(constants::THEME_QUERY_PARAM).or_else(|| {
        document
            .body()
            .and_then(|b| b.get_attribute(constants::THEME_DATA_ATTR))
    });
    match requested {
        Some(name) => Theme::spec_by_name(&name).unwrap_or_else(|| {
            log::warn!("[theme] unknown theme '{}', using default", name);
            Theme::default_spec()
        }),
        None => Theme::default_spec(),
    }
}

fn select_smoothing(theme: &Theme) -> SmoothingKind {
    match dom::query_param(constants::SMOOTHING_QUERY_PARAM) {
        Some(name) => SmoothingKind::from_name(&name).unwrap_or_else(|| {
            log::warn!("[theme] unknown smoothing '{}', using {:?}", name, theme.smoothing);
            theme.smoothing
        }),
        None => theme.smoothing,
    }
}

fn init() -> anyhow::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;

    let root: web::Element = match document.get_element_by_id(constants::APP_ROOT_ID) {
        Some(el) => el,
        None => document
            .body()
            .map(Into::into)
            .ok_or_else(|| anyhow::anyhow!("missing #{} and <body>", constants::APP_ROOT_ID))?,
    };

    let theme = Theme::from_spec(select_theme_spec(&document))?;
    let smoothing = select_smoothing(&theme);
    log::info!(
        "[theme] {} hinge={} smoothing={:?}",
        theme.name,
        theme.hinge.css_origin(),
        smoothing
    );

    let stage = stage::Stage::build(&document, &root, theme, &DOMINO_IMAGES)?;
    log::info!(
        "[stage] {} cards built with theme {}",
        stage.card_count(),
        stage.theme_name()
    );
    let tracker = events::ScrollTracker::new(stage.container.clone());
    events::wire_scroll_tracking(&tracker);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        stage,
        tracker,
        ProgressSmoother::for_kind(smoothing),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
