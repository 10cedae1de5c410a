use serde::{Deserialize, Serialize};

use crate::renderer::color::ParticleColor;

/// Draw primitive used for each particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleShape {
    #[default]
    Circle,
    Square,
}

impl ParticleShape {
    /// `square` selects squares; every other value draws circles.
    pub fn resolve(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "square" => ParticleShape::Square,
            _ => ParticleShape::Circle,
        }
    }
}

/// Force model applied while gathering and dispersing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleEffect {
    /// Spring back to origin, random jitter outward.
    #[default]
    Spread,
    /// Weak spring back to origin, radial burst outward.
    Explode,
}

impl ParticleEffect {
    /// `explode` selects the burst model; every other value spreads.
    pub fn resolve(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "explode" => ParticleEffect::Explode,
            _ => ParticleEffect::Spread,
        }
    }
}

/// Attribute values exactly as the host supplied them.
///
/// Every field is optional; resolution into a [`ParticleConfig`] applies the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAttributes {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Particle shape (`circle` or `square`). The attribute name is kept as hosts write it.
    #[serde(default)]
    pub sharp: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
}

impl RawAttributes {
    /// Attribute names a host should observe for changes.
    pub const OBSERVED: [&'static str; 4] = ["size", "color", "sharp", "effect"];

    /// Parse attributes from a JSON object, e.g. `{"size": "3", "effect": "explode"}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set a single attribute by name. Returns false for names we don't observe.
    pub fn set(&mut self, name: &str, value: Option<String>) -> bool {
        let slot = match name {
            "size" => &mut self.size,
            "color" => &mut self.color,
            "sharp" => &mut self.sharp,
            "effect" => &mut self.effect,
            _ => return false,
        };
        *slot = value;
        true
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.sharp = Some(shape.into());
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }
}

/// Resolved particle style. Rebuilt on every resample.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    /// Circle radius or square side, in pixels.
    pub size: f32,
    pub color: ParticleColor,
    pub shape: ParticleShape,
    pub effect: ParticleEffect,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            color: ParticleColor::default(),
            shape: ParticleShape::default(),
            effect: ParticleEffect::default(),
        }
    }
}

impl ParticleConfig {
    pub const DEFAULT_SIZE: f32 = 2.0;

    /// Apply the defaulting rules to raw host attributes.
    pub fn resolve(attrs: &RawAttributes) -> Self {
        let size = attrs
            .size
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|&n| n > 0)
            .map(|n| n as f32)
            .unwrap_or(Self::DEFAULT_SIZE);
        let color = attrs
            .color
            .as_deref()
            .map(ParticleColor::parse)
            .unwrap_or_default();

        Self {
            size,
            color,
            shape: ParticleShape::resolve(attrs.sharp.as_deref()),
            effect: ParticleEffect::resolve(attrs.effect.as_deref()),
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = ParticleColor::parse(color);
        self
    }

    pub fn with_shape(mut self, shape: ParticleShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_effect(mut self, effect: ParticleEffect) -> Self {
        self.effect = effect;
        self
    }
}

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: Self::FALLBACK_WIDTH,
            height: Self::FALLBACK_HEIGHT,
        }
    }
}

impl SurfaceSize {
    pub const FALLBACK_WIDTH: u32 = 600;
    pub const FALLBACK_HEIGHT: u32 = 300;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size from a host's client box. A zero axis (not laid out yet) uses the fallback.
    pub fn from_client(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { Self::FALLBACK_WIDTH } else { width },
            height: if height == 0 { Self::FALLBACK_HEIGHT } else { height },
        }
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits; trailing junk ignored.
fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i64>().ok().map(|n| n * sign)
}
