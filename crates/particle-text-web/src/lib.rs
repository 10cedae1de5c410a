//! WASM bridge: runs a `particle_text::ParticleText` inside a browser element.
//!
//! A small JS custom element forwards its lifecycle callbacks here:
//!
//! ```js
//! import init, { ParticleTextElement } from "./particle_text_web.js";
//! await init();
//!
//! class ParticleText extends HTMLElement {
//!   static get observedAttributes() { return ["size", "color", "sharp", "effect"]; }
//!   constructor() {
//!     super();
//!     const canvas = document.createElement("canvas");
//!     this.attachShadow({ mode: "open" }).appendChild(canvas);
//!     this.inner = new ParticleTextElement(this, canvas);
//!   }
//!   connectedCallback() { this.inner.attach(); }
//!   disconnectedCallback() { this.inner.detach(); }
//!   attributeChangedCallback(name, _old, value) { this.inner.set_attribute(name, value); }
//! }
//! customElements.define("particle-text", ParticleText);
//! ```

pub mod canvas;
pub mod runner;

pub use canvas::{CanvasRaster, CanvasSurface};
pub use runner::{AnimationLoop, EventListener, IntervalHandle};

use std::cell::RefCell;
use std::rc::Rc;

use particle_text::{DrawSurface, ParticleText, RawAttributes, MODE_PERIOD_MS};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, Window};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

type SharedWidget = Rc<RefCell<ParticleText<CanvasRaster>>>;
type SharedSurface = Rc<RefCell<CanvasSurface>>;

/// Browser-side particle text element.
///
/// Owns the widget state and every scheduling handle; all handles are
/// released on `detach` (and on drop).
#[wasm_bindgen]
pub struct ParticleTextElement {
    window: Window,
    host: HtmlElement,
    widget: SharedWidget,
    surface: SharedSurface,
    frame_loop: Option<AnimationLoop>,
    mode_timer: Option<IntervalHandle>,
    resize_listener: Option<EventListener>,
}

#[wasm_bindgen]
impl ParticleTextElement {
    /// Wrap `host` (text content and attributes) and draw onto `canvas`.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement, canvas: HtmlCanvasElement) -> Result<ParticleTextElement, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;

        let raster = CanvasRaster::new(&document)?;
        let surface = CanvasSurface::new(canvas)?;

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let text = host.text_content().unwrap_or_default();
        let mut attributes = RawAttributes::default();
        for name in RawAttributes::OBSERVED {
            attributes.set(name, host.get_attribute(name));
        }
        let widget = ParticleText::new(raster, seed)
            .with_text(&text)
            .with_attributes(attributes);

        Ok(ParticleTextElement {
            window,
            host,
            widget: Rc::new(RefCell::new(widget)),
            surface: Rc::new(RefCell::new(surface)),
            frame_loop: None,
            mode_timer: None,
            resize_listener: None,
        })
    }

    /// Connected to the DOM: size, sample, and start the frame loop, mode timer and resize listener.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        self.detach();

        let (w, h) = client_size(&self.host);
        stage_host_text(&self.host, &self.widget);
        self.widget.borrow_mut().on_attach(w, h);
        sync_surface(&self.widget, &self.surface);

        let (widget, surface) = (self.widget.clone(), self.surface.clone());
        self.frame_loop = Some(AnimationLoop::start(&self.window, move || {
            let mut surface = surface.borrow_mut();
            widget.borrow_mut().frame(&mut *surface);
        })?);

        let widget = self.widget.clone();
        self.mode_timer = Some(IntervalHandle::start(&self.window, MODE_PERIOD_MS as i32, move || {
            let mut widget = widget.borrow_mut();
            if widget.is_attached() {
                widget.advance_mode();
            }
        })?);

        let (widget, surface, host) = (self.widget.clone(), self.surface.clone(), self.host.clone());
        self.resize_listener = Some(EventListener::new(&self.window, "resize", move || {
            let (w, h) = client_size(&host);
            stage_host_text(&host, &widget);
            widget.borrow_mut().on_resize(w, h);
            sync_surface(&widget, &surface);
        })?);

        Ok(())
    }

    /// Disconnected from the DOM: release every timer and listener.
    pub fn detach(&mut self) {
        self.mode_timer = None;
        self.frame_loop = None;
        self.resize_listener = None;
        self.widget.borrow_mut().on_detach();
    }

    /// Re-read the host box size and resample.
    pub fn resize(&mut self) {
        let (w, h) = client_size(&self.host);
        stage_host_text(&self.host, &self.widget);
        self.widget.borrow_mut().on_resize(w, h);
        sync_surface(&self.widget, &self.surface);
    }

    /// Forward an attribute change. Returns false for attributes the widget ignores.
    pub fn set_attribute(&mut self, name: &str, value: Option<String>) -> bool {
        stage_host_text(&self.host, &self.widget);
        self.widget.borrow_mut().set_attribute(name, value)
    }

    /// Replace the text content and resample.
    pub fn set_text(&mut self, text: &str) {
        self.widget.borrow_mut().set_text(text);
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.widget.borrow().field().len() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.widget.borrow().mode().as_str().to_string()
    }

    /// Flat instance buffer of the last frame (4 floats per particle).
    pub fn instances_ptr(&self) -> *const f32 {
        self.widget.borrow().field().draw_list().instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.widget.borrow().field().draw_list().instance_count()
    }
}

fn client_size(host: &HtmlElement) -> (u32, u32) {
    (host.client_width().max(0) as u32, host.client_height().max(0) as u32)
}

/// The host's text may change without a `set_text` call; re-read it before resampling.
fn stage_host_text(host: &HtmlElement, widget: &SharedWidget) {
    let text = host.text_content().unwrap_or_default();
    widget.borrow_mut().stage_text(&text);
}

fn sync_surface(widget: &SharedWidget, surface: &SharedSurface) {
    let size = widget.borrow().size();
    surface.borrow_mut().resize(size.width, size.height);
}
