use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, cast to `T`. Elements of another type are skipped.
pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_one<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {selector}: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{selector} has unexpected type: {e:?}"))
}

/// `window.devicePixelRatio`, or 1 without a window.
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0)
}

/// Size the canvas backing store to its CSS box times `pixel_ratio` and
/// return the backing size. Returns (0, 0) for a detached or hidden canvas.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * pixel_ratio).max(0.0).round() as u32;
    let h_px = (rect.height() * pixel_ratio).max(0.0).round() as u32;
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))
}

pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
