pub mod color;
pub mod instance;
pub mod traits;

pub use color::ParticleColor;
pub use instance::{DrawCommand, DrawList, ParticleInstance};
pub use traits::DrawSurface;
