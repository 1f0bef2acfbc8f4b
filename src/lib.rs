#![cfg(target_arch = "wasm32")]
use crate::constants::{MOMENTUM_SCROLL_SELECTOR, WAVE_CANVAS_SELECTOR};
use crate::render::{WaveCanvas, WaveRenderer};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod fonts;
mod frame;
mod render;
mod scroller;
mod throttle;

pub use render::setup;

/// Mount a renderer on every `canvas[data-glyphwave]`. A canvas that fails
/// to set up is logged and skipped.
fn mount_wave_canvases(document: &web::Document) -> Vec<WaveCanvas> {
    let pointer = events::pointer::pointer_feed();
    let mut mounted = Vec::new();
    for canvas in dom::query_all::<web::HtmlCanvasElement>(document, WAVE_CANVAS_SELECTOR) {
        let config = render::config_from_element(&canvas);
        match WaveRenderer::setup(canvas, config, pointer.clone()) {
            Ok(renderer) => {
                let mut wave = WaveCanvas::new(renderer);
                wave.start(None);
                mounted.push(wave);
            }
            Err(e) => log::error!("[wave] setup failed: {:#}", e),
        }
    }
    mounted
}

fn mount_scrollers(document: &web::Document) -> usize {
    let containers = dom::query_all::<web::HtmlElement>(document, MOMENTUM_SCROLL_SELECTOR);
    let count = containers.len();
    for container in containers {
        scroller::wire_momentum_scroller(container);
    }
    count
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glyphwave-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Glyph ladders must be rasterized with the real typeface
    fonts::wait_for_fonts(&document).await;

    static INITIALIZED: AtomicBool = AtomicBool::new(false);
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    initialize(&document);
    Ok(())
}

fn initialize(document: &web::Document) {
    let canvases = mount_wave_canvases(document);
    log::info!("[init] {} wave canvases", canvases.len());
    events::resize::wire_throttled_resize(canvases);

    let scrollers = mount_scrollers(document);
    log::info!("[init] {} momentum scrollers", scrollers);
}
