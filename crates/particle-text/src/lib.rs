//! Text rendered as a field of animated particles.
//!
//! Text is rasterized into a scratch alpha raster and sampled on a 4-pixel
//! grid into a particle topology. The particle field then cycles between
//! gathering into the text, dispersing away from it, and coasting to rest.
//!
//! ```
//! use particle_text::{AlphaMask, ParticleText, RawAttributes};
//!
//! let mut widget = ParticleText::new(AlphaMask::default(), 42)
//!     .with_text("HELLO")
//!     .with_attributes(RawAttributes::default().with_effect("explode"));
//! widget.on_attach(320, 120);
//! widget.tick(1500.0); // first mode advance: disperse
//! assert!(widget.field().len() > 0);
//! ```

pub mod api;
pub mod core;
pub mod renderer;
pub mod sampler;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{ParticleConfig, ParticleEffect, ParticleShape, RawAttributes, SurfaceSize};
pub use api::widget::ParticleText;
pub use crate::core::mode::{Mode, ModeCycle};
pub use crate::core::time::IntervalTimer;
pub use renderer::{DrawCommand, DrawList, DrawSurface, ParticleColor, ParticleInstance};
pub use sampler::{sample_text, AlphaMask, ScratchRaster, ALPHA_THRESHOLD, SAMPLE_STRIDE};
pub use systems::particles::{Particle, ParticleField, Rng, MODE_PERIOD_MS};
