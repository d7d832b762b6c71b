//! 5x7 bitmap font for labels.
//!
//! Each glyph is seven rows; bit 4 of a row is the leftmost column. Lowercase
//! letters render as uppercase and unknown characters as `?`.

use floorplan_blocks::Rgb;
use floorplan_geom::Vec2;

use crate::canvas::Canvas;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between glyph origins, in unscaled pixels.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => [0; 7],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ',' => [0, 0, 0, 0, 0b01100, 0b00100, 0b01000],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        '/' => [0, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '\'' => [0b01100, 0b00100, 0b01000, 0, 0, 0, 0],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        _ => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
    }
}

/// Pixel size of `text` at `scale`.
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let n = text.chars().count() as u32;
    if n == 0 {
        return (0, 0);
    }
    (
        (n.saturating_mul(ADVANCE) - 1).saturating_mul(scale),
        GLYPH_HEIGHT.saturating_mul(scale),
    )
}

/// Draws a single glyph with its top-left corner at `(x, y)`.
pub fn draw_char(canvas: &mut Canvas, x: i32, y: i32, c: char, color: Rgb, scale: u32) {
    let s = i32::try_from(scale).unwrap_or(i32::MAX);
    for (row, bits) in glyph(c).iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                let px = x.saturating_add((col as i32).saturating_mul(s));
                let py = y.saturating_add((row as i32).saturating_mul(s));
                canvas.fill_rect(px, py, scale, scale, color, 1.0);
            }
        }
    }
}

pub fn draw_text(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgb, scale: u32) {
    let step = i32::try_from(ADVANCE.saturating_mul(scale)).unwrap_or(i32::MAX);
    for (i, c) in text.chars().enumerate() {
        let i = i32::try_from(i).unwrap_or(i32::MAX);
        draw_char(canvas, x.saturating_add(i.saturating_mul(step)), y, c, color, scale);
    }
}

/// Top-left corner that centers `text` on `center`.
pub fn centered_origin(center: Vec2, text: &str, scale: u32) -> (i32, i32) {
    let (w, h) = text_size(text, scale);
    (
        (center.x - w as f32 / 2.0).round() as i32,
        (center.y - h as f32 / 2.0).round() as i32,
    )
}

pub fn draw_text_centered(canvas: &mut Canvas, center: Vec2, text: &str, color: Rgb, scale: u32) {
    let (x, y) = centered_origin(center, text, scale);
    draw_text(canvas, x, y, text, color, scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink(canvas: &Canvas) -> usize {
        canvas.image().pixels().filter(|p| p[0] == 0).count()
    }

    #[test]
    fn size_accounts_for_spacing_and_scale() {
        assert_eq!(text_size("", 2), (0, 0));
        assert_eq!(text_size("A", 1), (5, 7));
        assert_eq!(text_size("AB", 2), (22, 14));
    }

    #[test]
    fn oversized_scale_saturates_instead_of_overflowing() {
        assert_eq!(text_size("LIVING", 1 << 29), (u32::MAX, 7 << 29));
        let mut c = Canvas::new(8, 8, Rgb::WHITE).unwrap();
        draw_text_centered(&mut c, Vec2::new(4.0, 4.0), "HALL", Rgb::BLACK, u32::MAX);
        draw_text(&mut c, i32::MAX - 1, i32::MAX - 1, "HALL", Rgb::BLACK, 1 << 29);
    }

    #[test]
    fn lowercase_matches_uppercase() {
        assert_eq!(glyph('k'), glyph('K'));
        assert_eq!(glyph('~'), glyph('?'));
    }

    #[test]
    fn glyph_rows_fit_in_five_bits() {
        for c in ' '..='~' {
            assert!(glyph(c).iter().all(|r| r >> GLYPH_WIDTH == 0), "{c:?}");
        }
    }

    #[test]
    fn scaled_glyph_quadruples_ink() {
        let mut a = Canvas::new(20, 20, Rgb::WHITE).unwrap();
        let mut b = Canvas::new(40, 40, Rgb::WHITE).unwrap();
        draw_char(&mut a, 1, 1, 'R', Rgb::BLACK, 1);
        draw_char(&mut b, 1, 1, 'R', Rgb::BLACK, 2);
        assert_eq!(ink(&b), ink(&a) * 4);
        assert!(ink(&a) > 0);
    }

    #[test]
    fn space_draws_nothing() {
        let mut c = Canvas::new(10, 10, Rgb::WHITE).unwrap();
        draw_text(&mut c, 0, 0, "  ", Rgb::BLACK, 1);
        assert_eq!(ink(&c), 0);
    }

    #[test]
    fn centered_text_straddles_the_anchor() {
        let mut c = Canvas::new(100, 40, Rgb::WHITE).unwrap();
        draw_text_centered(&mut c, Vec2::new(50.0, 20.0), "HALL", Rgb::BLACK, 2);
        let (mut lo, mut hi) = (u32::MAX, 0);
        for (x, _, p) in c.image().enumerate_pixels() {
            if p[0] == 0 {
                lo = lo.min(x);
                hi = hi.max(x);
            }
        }
        assert!(lo < 50 && hi > 50);
        assert!((50 - lo).abs_diff(hi - 50) <= 2);
    }
}
