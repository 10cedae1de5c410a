//! Particle fill color.
//!
//! Canvas hosts hand the host string straight to `fillStyle`; native
//! surfaces use the parsed RGBA value.

/// Resolved fill color: the host string plus its RGBA interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleColor {
    css: String,
    rgba: [u8; 4],
}

impl ParticleColor {
    pub const DEFAULT_CSS: &'static str = "#ffffff";
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];

    /// Resolve a host color string. Empty input falls back to white;
    /// strings we cannot interpret keep their text but draw white natively.
    pub fn parse(input: &str) -> Self {
        let css = input.trim();
        if css.is_empty() {
            return Self::default();
        }
        Self {
            css: css.to_string(),
            rgba: parse_rgba(css).unwrap_or(Self::WHITE),
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn rgba(&self) -> [u8; 4] {
        self.rgba
    }
}

impl Default for ParticleColor {
    fn default() -> Self {
        Self {
            css: Self::DEFAULT_CSS.to_string(),
            rgba: Self::WHITE,
        }
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or a basic named color.
pub fn parse_rgba(input: &str) -> Option<[u8; 4]> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let named = match s.to_ascii_lowercase().as_str() {
        "white" => [255, 255, 255, 255],
        "black" => [0, 0, 0, 255],
        "red" => [255, 0, 0, 255],
        "lime" => [0, 255, 0, 255],
        "green" => [0, 128, 0, 255],
        "blue" => [0, 0, 255, 255],
        "yellow" => [255, 255, 0, 255],
        "cyan" | "aqua" => [0, 255, 255, 255],
        "magenta" | "fuchsia" => [255, 0, 255, 255],
        "orange" => [255, 165, 0, 255],
        "gray" | "grey" => [128, 128, 128, 255],
        "transparent" => [0, 0, 0, 0],
        _ => return None,
    };
    Some(named)
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some([nibble(0)?, nibble(1)?, nibble(2)?, 255]),
        4 => Some([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?]),
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}
