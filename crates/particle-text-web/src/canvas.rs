//! Canvas 2D implementations of the raster and drawing seams.

use std::borrow::Cow;
use std::f64::consts::TAU;

use glam::Vec2;
use particle_text::{DrawSurface, ParticleColor, ScratchRaster};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Glyph fill for sampling; only its alpha matters.
const SAMPLE_FILL: &str = "#000";
const SAMPLE_FONT_FAMILY: &str = "sans-serif";

/// Off-DOM canvas used only for glyph sampling.
pub struct CanvasRaster {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRaster {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        // Sampling reads pixels back on every resample
        let ctx = context_2d(&canvas, true)?;
        Ok(Self { canvas, ctx })
    }
}

impl ScratchRaster for CanvasRaster {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn fill_text_centered(&mut self, text: &str, center: Vec2, font_px: f32) {
        self.ctx.set_font(&format!("{}px {}", font_px, SAMPLE_FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(SAMPLE_FILL);
        if let Err(e) = self.ctx.fill_text(text, center.x as f64, center.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn read_alpha(&mut self) -> Cow<'_, [u8]> {
        let (w, h) = (self.width() as f64, self.height() as f64);
        match self.ctx.get_image_data(0.0, 0.0, w, h) {
            Ok(image) => Cow::Owned(image.data().0.chunks_exact(4).map(|px| px[3]).collect()),
            Err(e) => {
                log::warn!("get_image_data failed: {:?}", e);
                Cow::Owned(Vec::new())
            }
        }
    }
}

/// The visible canvas particles are drawn onto.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas, false)?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let style = self.canvas.style();
        for (prop, px) in [("width", width), ("height", height)] {
            if let Err(e) = style.set_property(prop, &format!("{}px", px)) {
                log::warn!("canvas style {} not set: {:?}", prop, e);
            }
        }
    }

    fn clear(&mut self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ParticleColor) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: &ParticleColor) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill_rect(top_left.x as f64, top_left.y as f64, size.x as f64, size.y as f64);
    }
}

fn context_2d(canvas: &HtmlCanvasElement, will_read_frequently: bool) -> Result<CanvasRenderingContext2d, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("willReadFrequently"),
        &JsValue::from_bool(will_read_frequently),
    )?;
    canvas
        .get_context_with_context_options("2d", &options)?
        .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}
