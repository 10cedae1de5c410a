//! Text sampling: turn rendered glyph ink into a particle topology.

pub mod bitmap_font;
pub mod raster;

pub use raster::{AlphaMask, ScratchRaster};

use glam::{UVec2, Vec2};

/// Only every `SAMPLE_STRIDE`-th pixel on each axis is a sampling candidate.
pub const SAMPLE_STRIDE: u32 = 4;

/// A candidate becomes a particle when its alpha is strictly above this.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Render `text` into `raster` and collect the ink points.
///
/// The raster is resized to `width × height` if needed and cleared first;
/// text is drawn at half the surface height, centered on the surface.
/// Points come back row-major (y outer, x inner). Blank text yields no points.
pub fn sample_text<R: ScratchRaster + ?Sized>(
    raster: &mut R,
    text: &str,
    width: u32,
    height: u32,
) -> Vec<UVec2> {
    if raster.width() != width || raster.height() != height {
        raster.resize(width, height);
    }
    raster.clear();

    let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
    let font_px = height as f32 / 2.0;
    raster.fill_text_centered(text, center, font_px);

    let alpha = raster.read_alpha();
    let mut points = Vec::new();
    for y in (0..height).step_by(SAMPLE_STRIDE as usize) {
        for x in (0..width).step_by(SAMPLE_STRIDE as usize) {
            let index = y as usize * width as usize + x as usize;
            // A short read-back (host failure) counts as transparent
            let a = alpha.get(index).copied().unwrap_or(0);
            if a > ALPHA_THRESHOLD {
                points.push(UVec2::new(x, y));
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    /// Raster whose "text" is a fixed alpha pattern, to pin the threshold and grid.
    struct PatternRaster {
        inner: AlphaMask,
        pattern: Vec<(u32, u32, u8)>,
        drawn_font_px: Option<f32>,
        drawn_center: Option<Vec2>,
        cleared: usize,
    }

    impl PatternRaster {
        fn new(pattern: Vec<(u32, u32, u8)>) -> Self {
            Self {
                inner: AlphaMask::default(),
                pattern,
                drawn_font_px: None,
                drawn_center: None,
                cleared: 0,
            }
        }
    }

    impl ScratchRaster for PatternRaster {
        fn width(&self) -> u32 {
            self.inner.width()
        }
        fn height(&self) -> u32 {
            self.inner.height()
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.inner.resize(width, height);
        }
        fn clear(&mut self) {
            self.cleared += 1;
            self.inner.clear();
        }
        fn fill_text_centered(&mut self, text: &str, center: Vec2, font_px: f32) {
            self.drawn_font_px = Some(font_px);
            self.drawn_center = Some(center);
            if text.trim().is_empty() {
                return;
            }
            for &(x, y, a) in &self.pattern {
                self.inner.set_alpha(x, y, a);
            }
        }
        fn read_alpha(&mut self) -> Cow<'_, [u8]> {
            self.inner.read_alpha()
        }
    }

    #[test]
    fn threshold_is_strict_and_grid_is_four() {
        let mut raster = PatternRaster::new(vec![
            (0, 0, 255),
            (4, 0, 128), // at threshold: rejected
            (8, 0, 129),
            (5, 4, 255), // off-grid: never a candidate
            (12, 8, 200),
        ]);
        let points = sample_text(&mut raster, "x", 16, 12);
        assert_eq!(
            points,
            vec![UVec2::new(0, 0), UVec2::new(8, 0), UVec2::new(12, 8)]
        );
    }

    #[test]
    fn output_is_row_major() {
        let mut raster = PatternRaster::new(vec![(8, 4, 255), (0, 8, 255), (4, 4, 255), (0, 0, 255)]);
        let points = sample_text(&mut raster, "x", 12, 12);
        assert_eq!(
            points,
            vec![UVec2::new(0, 0), UVec2::new(4, 4), UVec2::new(8, 4), UVec2::new(0, 8)]
        );
    }

    #[test]
    fn font_and_anchor_follow_surface() {
        let mut raster = PatternRaster::new(vec![]);
        sample_text(&mut raster, "x", 40, 20);
        assert_eq!(raster.drawn_font_px, Some(10.0));
        assert_eq!(raster.drawn_center, Some(Vec2::new(20.0, 10.0)));
        assert_eq!((raster.width(), raster.height()), (40, 20));
    }

    #[test]
    fn sampling_clears_previous_ink() {
        let mut raster = PatternRaster::new(vec![(0, 0, 255)]);
        assert_eq!(sample_text(&mut raster, "x", 8, 8).len(), 1);
        assert_eq!(sample_text(&mut raster, " ", 8, 8).len(), 0);
        assert_eq!(raster.cleared, 2);
    }

    #[test]
    fn empty_text_yields_no_points() {
        let mut mask = AlphaMask::default();
        assert!(sample_text(&mut mask, "", 40, 20).is_empty());
        assert!(sample_text(&mut mask, "   ", 40, 20).is_empty());
    }

    #[test]
    fn bitmap_text_samples_inside_bounds() {
        let mut mask = AlphaMask::default();
        let points = sample_text(&mut mask, "AB", 40, 20);
        assert!(!points.is_empty());
        for p in &points {
            assert!(p.x < 40 && p.y < 20);
            assert_eq!(p.x % SAMPLE_STRIDE, 0);
            assert_eq!(p.y % SAMPLE_STRIDE, 0);
        }
    }

    #[test]
    fn identical_inputs_are_deterministic() {
        let mut a = AlphaMask::default();
        let mut b = AlphaMask::default();
        assert_eq!(
            sample_text(&mut a, "HELLO", 200, 80),
            sample_text(&mut b, "HELLO", 200, 80)
        );
    }

    #[test]
    fn short_readback_counts_as_transparent() {
        struct Truncated(AlphaMask);
        impl ScratchRaster for Truncated {
            fn width(&self) -> u32 { self.0.width() }
            fn height(&self) -> u32 { self.0.height() }
            fn resize(&mut self, w: u32, h: u32) { self.0.resize(w, h) }
            fn clear(&mut self) { self.0.clear() }
            fn fill_text_centered(&mut self, t: &str, c: Vec2, f: f32) { self.0.fill_text_centered(t, c, f) }
            fn read_alpha(&mut self) -> Cow<'_, [u8]> { Cow::Owned(Vec::new()) }
        }
        let mut raster = Truncated(AlphaMask::default());
        assert!(sample_text(&mut raster, "AB", 40, 20).is_empty());
    }
}
