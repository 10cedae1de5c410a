//! Built-in 5×7 bitmap font.
//!
//! Gives headless hosts real glyph ink without a font engine. Lowercase maps
//! to uppercase; characters without a glyph render as blanks but still take
//! up a cell, so spacing is preserved.

use glam::Vec2;

/// Glyph width in font cells.
pub const GLYPH_COLS: usize = 5;
/// Glyph height in font cells.
pub const GLYPH_ROWS: usize = 7;
/// Horizontal advance per character, in cells (glyph + one blank column).
pub const ADVANCE_COLS: usize = GLYPH_COLS + 1;

/// Row bitmaps for a character; bit 4 is the leftmost column.
pub fn glyph_rows(c: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        ' ' => [0x00; GLYPH_ROWS],
        _ => return None,
    };
    Some(rows)
}

/// Render `text` into an alpha buffer, centered on `center`, glyph height `font_px`.
///
/// Pixels whose centers fall inside a lit font cell become fully opaque;
/// everything else is left untouched.
pub fn stamp_text(alpha: &mut [u8], width: u32, height: u32, text: &str, center: Vec2, font_px: f32) {
    let glyphs: Vec<Option<[u8; GLYPH_ROWS]>> = text.chars().map(glyph_rows).collect();
    if glyphs.is_empty() || font_px <= 0.0 {
        return;
    }

    let cell = font_px / GLYPH_ROWS as f32;
    let text_cols = glyphs.len() * ADVANCE_COLS - 1;
    let extent = Vec2::new(text_cols as f32 * cell, GLYPH_ROWS as f32 * cell);
    let top_left = center - extent / 2.0;

    let x0 = top_left.x.floor().max(0.0) as u32;
    let y0 = top_left.y.floor().max(0.0) as u32;
    let x1 = ((top_left.x + extent.x).ceil().max(0.0) as u32).min(width);
    let y1 = ((top_left.y + extent.y).ceil().max(0.0) as u32).min(height);

    for py in y0..y1 {
        let cy = (py as f32 + 0.5 - top_left.y) / cell;
        if cy < 0.0 || cy as usize >= GLYPH_ROWS {
            continue;
        }
        let row = cy as usize;
        for px in x0..x1 {
            let cx = (px as f32 + 0.5 - top_left.x) / cell;
            if cx < 0.0 {
                continue;
            }
            let col = cx as usize;
            let (index, glyph_col) = (col / ADVANCE_COLS, col % ADVANCE_COLS);
            if glyph_col >= GLYPH_COLS {
                continue;
            }
            let Some(Some(rows)) = glyphs.get(index) else {
                continue;
            };
            if (rows[row] >> (GLYPH_COLS - 1 - glyph_col)) & 1 == 1 {
                if let Some(a) = alpha.get_mut(py as usize * width as usize + px as usize) {
                    *a = 255;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(glyph_rows('a'), glyph_rows('A'));
        assert!(glyph_rows('z').is_some());
    }

    #[test]
    fn unknown_glyph_is_none() {
        assert!(glyph_rows('€').is_none());
        assert!(glyph_rows('\t').is_none());
    }

    #[test]
    fn glyph_bits_fit_five_columns() {
        for c in ('A'..='Z').chain('0'..='9') {
            let rows = glyph_rows(c).unwrap();
            assert!(rows.iter().all(|r| *r < 0x20), "glyph {} overflows", c);
            assert!(rows.iter().any(|r| *r != 0), "glyph {} is empty", c);
        }
    }

    #[test]
    fn one_pixel_per_cell_reproduces_glyph() {
        // 7px font => 1px cells; "I" is 5 wide, 7 tall, centered on (10, 10)
        let (w, h) = (20u32, 20u32);
        let mut alpha = vec![0u8; (w * h) as usize];
        stamp_text(&mut alpha, w, h, "I", Vec2::new(10.0, 10.0), 7.0);

        let lit: usize = alpha.iter().filter(|a| **a == 255).count();
        let expected: u32 = glyph_rows('I').unwrap().iter().map(|r| r.count_ones()).sum();
        assert_eq!(lit, expected as usize);

        // Top bar of "I" is 0x0E: columns 1..=3 of the glyph
        let left = 10.0 - 2.5;
        let top = 10.0 - 3.5;
        let y = top as u32;
        for gx in 1..=3u32 {
            let x = (left as u32) + gx;
            assert_eq!(alpha[(y * w + x) as usize], 255);
        }
    }

    #[test]
    fn clips_to_buffer() {
        let (w, h) = (8u32, 8u32);
        let mut alpha = vec![0u8; (w * h) as usize];
        // Far larger than the buffer; must not panic
        stamp_text(&mut alpha, w, h, "WWW", Vec2::new(4.0, 4.0), 70.0);
        assert!(alpha.iter().any(|a| *a == 255));
    }

    #[test]
    fn blank_text_draws_nothing() {
        let mut alpha = vec![0u8; 100];
        stamp_text(&mut alpha, 10, 10, "   ", Vec2::new(5.0, 5.0), 7.0);
        stamp_text(&mut alpha, 10, 10, "", Vec2::new(5.0, 5.0), 7.0);
        assert!(alpha.iter().all(|a| *a == 0));
    }
}
