use crate::api::config::{ParticleConfig, RawAttributes, SurfaceSize};
use crate::core::mode::Mode;
use crate::core::time::IntervalTimer;
use crate::renderer::traits::DrawSurface;
use crate::sampler::{sample_text, ScratchRaster};
use crate::systems::particles::{ParticleField, MODE_PERIOD_MS};

/// Text-as-particles widget: the state a host element owns, plus its lifecycle hooks.
///
/// The host keeps the visible [`DrawSurface`] sized to [`ParticleText::size`]
/// and calls:
/// - [`on_attach`](Self::on_attach) once mounted, which starts the mode timer
/// - [`frame`](Self::frame) every animation frame
/// - [`tick`](Self::tick) with elapsed time, or [`advance_mode`](Self::advance_mode)
///   from its own interval
/// - [`on_detach`](Self::on_detach) on teardown, which releases the mode timer
pub struct ParticleText<R: ScratchRaster> {
    raster: R,
    field: ParticleField,
    attributes: RawAttributes,
    text: String,
    size: SurfaceSize,
    /// Present only while attached.
    mode_timer: Option<IntervalTimer>,
}

impl<R: ScratchRaster> ParticleText<R> {
    pub fn new(raster: R, seed: u64) -> Self {
        Self {
            raster,
            field: ParticleField::new(seed),
            attributes: RawAttributes::default(),
            text: String::new(),
            size: SurfaceSize::default(),
            mode_timer: None,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.trim().to_string();
        self
    }

    pub fn with_attributes(mut self, attributes: RawAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Mounted: size to the host box, sample, and start the mode timer.
    pub fn on_attach(&mut self, client_width: u32, client_height: u32) {
        self.size = SurfaceSize::from_client(client_width, client_height);
        self.resample();
        self.mode_timer = Some(IntervalTimer::new(MODE_PERIOD_MS));
        log::info!(
            "particle text attached: {}x{}, {} particles",
            self.size.width,
            self.size.height,
            self.field.len()
        );
    }

    /// Unmounted: release the mode timer. Frames may still be drawn but the mode no longer cycles.
    pub fn on_detach(&mut self) {
        if self.mode_timer.take().is_some() {
            log::info!("particle text detached");
        }
    }

    /// Host box changed size: resize and resample. Not debounced.
    pub fn on_resize(&mut self, client_width: u32, client_height: u32) {
        self.size = SurfaceSize::from_client(client_width, client_height);
        self.resample();
    }

    /// Style attributes changed: resample at the current size.
    pub fn on_config_change(&mut self, attributes: RawAttributes) {
        self.attributes = attributes;
        self.resample();
    }

    /// Change one attribute by name. Unobserved names are ignored and return false.
    pub fn set_attribute(&mut self, name: &str, value: Option<String>) -> bool {
        if !self.attributes.set(name, value) {
            return false;
        }
        self.resample();
        true
    }

    /// Text content changed: resample.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.trim().to_string();
        self.resample();
    }

    /// Record new text content without resampling; the next attach, resize or
    /// attribute change picks it up. Hosts that read content lazily call this
    /// right before forwarding a lifecycle hook.
    pub fn stage_text(&mut self, text: &str) {
        self.text = text.trim().to_string();
    }

    /// Feed elapsed host time to the mode timer. Returns how many mode advances ran.
    /// Does nothing while detached.
    pub fn tick(&mut self, elapsed_ms: f32) -> u32 {
        let Some(timer) = self.mode_timer.as_mut() else {
            return 0;
        };
        let fires = timer.accumulate(elapsed_ms);
        for _ in 0..fires {
            self.field.advance_mode();
        }
        fires
    }

    /// Advance the mode directly, for hosts that run their own interval.
    pub fn advance_mode(&mut self) -> Mode {
        self.field.advance_mode()
    }

    /// Step the simulation one frame and draw it.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.field.step();
        let color = &self.field.config().color;
        surface.present(self.field.draw_list(), color);
    }

    pub fn is_attached(&self) -> bool {
        self.mode_timer.is_some()
    }

    pub fn mode(&self) -> Mode {
        self.field.mode()
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &RawAttributes {
        &self.attributes
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn raster(&self) -> &R {
        &self.raster
    }

    fn resample(&mut self) {
        let config = ParticleConfig::resolve(&self.attributes);
        let topology = sample_text(&mut self.raster, &self.text, self.size.width, self.size.height);
        self.field.reseed(&topology, config, self.size);
    }
}
