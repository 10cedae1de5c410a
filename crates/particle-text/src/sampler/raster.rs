//! Scratch raster used for glyph sampling.

use std::borrow::Cow;

use glam::Vec2;

use super::bitmap_font;

/// Offscreen raster the sampler renders text into and reads coverage back from.
///
/// Kept separate from the visible [`DrawSurface`](crate::renderer::traits::DrawSurface)
/// so a sampling pass never shows up on screen.
pub trait ScratchRaster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Reallocate to the given size. Contents afterwards are unspecified.
    fn resize(&mut self, width: u32, height: u32);

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Fill `text` with an opaque color, centered on `center`, at `font_px` pixels.
    fn fill_text_centered(&mut self, text: &str, center: Vec2, font_px: f32);

    /// Row-major alpha channel, one byte per pixel.
    fn read_alpha(&mut self) -> Cow<'_, [u8]>;
}

/// In-memory alpha raster with the built-in bitmap font.
#[derive(Debug, Clone, Default)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Alpha at a pixel, or 0 outside the raster.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[self.index(x, y)]
    }

    pub fn set_alpha(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.alpha[i] = value;
        }
    }
}

impl ScratchRaster for AlphaMask {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.alpha.clear();
        self.alpha.resize(width as usize * height as usize, 0);
    }

    fn clear(&mut self) {
        self.alpha.fill(0);
    }

    fn fill_text_centered(&mut self, text: &str, center: Vec2, font_px: f32) {
        bitmap_font::stamp_text(&mut self.alpha, self.width, self.height, text, center, font_px);
    }

    fn read_alpha(&mut self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.alpha.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_reallocates_transparent() {
        let mut mask = AlphaMask::new(4, 4);
        mask.set_alpha(1, 1, 200);
        mask.resize(8, 2);
        assert_eq!((mask.width(), mask.height()), (8, 2));
        assert_eq!(mask.read_alpha().len(), 16);
        assert!(mask.read_alpha().iter().all(|a| *a == 0));
    }

    #[test]
    fn clear_resets_pixels() {
        let mut mask = AlphaMask::new(4, 4);
        mask.set_alpha(3, 3, 255);
        assert_eq!(mask.alpha_at(3, 3), 255);
        mask.clear();
        assert_eq!(mask.alpha_at(3, 3), 0);
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut mask = AlphaMask::new(2, 2);
        mask.set_alpha(5, 5, 255);
        assert_eq!(mask.alpha_at(5, 5), 0);
    }

    #[test]
    fn index_is_row_major_in_usize() {
        let mask = AlphaMask::new(70_000, 1);
        assert_eq!(mask.index(69_999, 0), 69_999);
        let wide = AlphaMask { width: 70_000, height: 70_000, alpha: Vec::new() };
        // 70_000 * 70_000 overflows u32
        assert_eq!(wide.index(5, 69_999), 69_999usize * 70_000 + 5);
    }

    #[test]
    fn text_leaves_ink() {
        let mut mask = AlphaMask::new(64, 32);
        mask.fill_text_centered("HI", Vec2::new(32.0, 16.0), 16.0);
        assert!(mask.read_alpha().iter().any(|a| *a == 255));
    }
}
