use crate::constants::DATA_OVERRIDE_KEYS;
use crate::core::{
    parse_letter, GlyphRasterizer, GlyphSpec, GlyphWeightCache, PointerState, Rgb, WaveConfig,
    WaveField, WaveMode,
};
use crate::dom;
use crate::events::pointer;
use crate::frame::{self, FrameHandle};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Glyph rasterization =====================

/// Rasterizes ladder rungs into detached `<canvas>` elements.
pub struct CanvasRasterizer {
    document: web::Document,
    font_family: String,
}

impl CanvasRasterizer {
    pub fn new(document: web::Document, font_family: impl Into<String>) -> Self {
        Self {
            document,
            font_family: font_family.into(),
        }
    }
}

impl GlyphRasterizer for CanvasRasterizer {
    type Image = web::HtmlCanvasElement;

    fn rasterize(&mut self, glyph: &GlyphSpec) -> anyhow::Result<Self::Image> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("createElement failed: {e:?}"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        canvas.set_width(glyph.cell_size);
        canvas.set_height(glyph.cell_size);

        let ctx = dom::context_2d(&canvas)?;
        let half = glyph.cell_size as f64 / 2.0;
        ctx.set_font(&format!(
            "{} {}px {}",
            glyph.weight, glyph.cell_size, self.font_family
        ));
        ctx.set_fill_style_str(&glyph.color.to_css());
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&glyph.letter.to_string(), half, half)
            .map_err(|e| anyhow::anyhow!("fillText failed: {e:?}"))?;
        Ok(canvas)
    }
}

// ===================== Wave renderer =====================

/// Read `data-*` overrides from a canvas on top of the defaults.
pub fn config_from_element(element: &web::Element) -> WaveConfig {
    let mut config = WaveConfig::default();
    for key in DATA_OVERRIDE_KEYS {
        let Some(value) = element.get_attribute(&format!("data-{key}")) else {
            continue;
        };
        // bare `data-spotlight` switches the spotlight on
        let value = if *key == "spotlight" && value.is_empty() {
            "true".to_string()
        } else {
            value
        };
        if let Err(e) = config.apply_override(key, &value) {
            log::warn!("[wave] ignoring data-{}: {}", key, e);
        }
    }
    config
}

/// One animated glyph canvas: ladder cache, weight field and drawing context.
pub struct WaveRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    cache: GlyphWeightCache<CanvasRasterizer>,
    field: WaveField,
    pointer: Rc<RefCell<PointerState>>,
}

impl WaveRenderer {
    pub fn setup(
        canvas: web::HtmlCanvasElement,
        config: WaveConfig,
        pointer: Rc<RefCell<PointerState>>,
    ) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let ctx = dom::context_2d(&canvas)?;
        let mut field = WaveField::new(config)?;
        field.set_pixel_ratio(dom::device_pixel_ratio());
        let rasterizer = CanvasRasterizer::new(document, field.config().font_family.clone());
        let cache = GlyphWeightCache::new(rasterizer, field.ladder_params())?;
        let mut renderer = Self {
            canvas,
            ctx,
            cache,
            field,
            pointer,
        };
        renderer.resize();
        log::info!(
            "[wave] setup {:?} letter='{}' cells={} ladder={}",
            renderer.field.config().mode,
            renderer.field.config().letter,
            renderer.field.grid().len(),
            renderer.cache.ladder().len()
        );
        Ok(renderer)
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    /// Recompute surface size and cell grid, and re-rasterize the ladder if
    /// the pixel ratio changed. Does not draw.
    pub fn resize(&mut self) {
        let ratio = dom::device_pixel_ratio();
        self.field.set_pixel_ratio(ratio);
        let (width, height) = dom::sync_canvas_size(&self.canvas, ratio);
        self.field.resize(width, height);
        match self.cache.update(self.field.ladder_params()) {
            Ok(true) => log::debug!("[wave] ladder rebuilt for pixel ratio {}", ratio),
            Ok(false) => {}
            Err(e) => log::error!("[wave] ladder rebuild failed: {:#}", e),
        }
        log::debug!(
            "[wave] resize {}x{} @{} -> {} cells",
            width,
            height,
            ratio,
            self.field.grid().len()
        );
    }

    pub fn set_letter(&mut self, letter: char, color: Option<Rgb>) -> anyhow::Result<()> {
        self.cache.set_letter(letter, color)?;
        self.field.set_letter(letter, color);
        Ok(())
    }

    pub fn set_spotlight(&mut self, enabled: bool) {
        self.field.set_spotlight(enabled);
    }

    pub fn render_frame(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        let pointer = if self.field.spotlight() {
            let rect = self.canvas.get_bounding_client_rect();
            let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
            Some(self.pointer.borrow().relative_to(origin))
        } else {
            None
        };

        let ladder = self.cache.ladder();
        let ctx = &self.ctx;
        self.field.render_frame(ladder.len(), pointer, |index, x, y| {
            if let Some(image) = ladder.get(index) {
                _ = ctx.draw_image_with_html_canvas_element(image, x as f64, y as f64);
            }
        });
    }
}

// ===================== JS handle =====================

/// Handle returned to JS by `setup`. Owns the renderer and its schedule.
#[wasm_bindgen]
pub struct WaveCanvas {
    renderer: Rc<RefCell<WaveRenderer>>,
    handle: Option<FrameHandle>,
}

impl WaveCanvas {
    pub fn new(renderer: WaveRenderer) -> Self {
        Self {
            renderer: Rc::new(RefCell::new(renderer)),
            handle: None,
        }
    }
}

#[wasm_bindgen]
impl WaveCanvas {
    /// Swap the letter (and optionally the color) and rebuild the ladder.
    pub fn set_letter(&mut self, letter: &str, color: Option<String>) -> Result<(), JsValue> {
        let letter = parse_letter(letter).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let color = color
            .map(|c| c.parse::<Rgb>())
            .transpose()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.renderer
            .borrow_mut()
            .set_letter(letter, color)
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    pub fn resize_canvas(&self) {
        self.renderer.borrow_mut().resize();
    }

    pub fn set_spotlight(&self, enabled: bool) {
        self.renderer.borrow_mut().set_spotlight(enabled);
    }

    /// Start (or restart) the animation. `interval_ms` defaults to the
    /// canvas's configured frame interval.
    pub fn start(&mut self, interval_ms: Option<f64>) {
        let interval =
            interval_ms.unwrap_or_else(|| self.renderer.borrow().field().config().frame_interval_ms);
        let renderer = self.renderer.clone();
        self.handle = Some(frame::schedule(
            move |_now| renderer.borrow_mut().render_frame(),
            interval,
        ));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_cancelled())
    }
}

/// Attach a wave renderer to the canvas matching `selector` and start it.
/// `mode` is `"wave"` or `"flat"` and overrides any `data-mode` attribute.
#[wasm_bindgen]
pub fn setup(selector: &str, mode: &str) -> Result<WaveCanvas, JsValue> {
    setup_inner(selector, mode).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn setup_inner(selector: &str, mode: &str) -> anyhow::Result<WaveCanvas> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::query_one(&document, selector)?;
    let mut config = config_from_element(&canvas);
    config.mode = mode.parse::<WaveMode>()?;
    let renderer = WaveRenderer::setup(canvas, config, pointer::pointer_feed())?;
    let mut wave = WaveCanvas::new(renderer);
    wave.start(None);
    Ok(wave)
}
