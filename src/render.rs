use image::{Rgba, RgbaImage};

use crate::brand::Brand;
use crate::font::{IconFont, TextBox};

pub const PRIMARY_SIZE: u32 = 1024;
pub const ADAPTIVE_SIZE: u32 = 432;
pub const ADAPTIVE_FONT_SIZE: f32 = 200.0;

const PRIMARY_FONT_RATIO: f32 = 0.4;
const SHADOW_OFFSET: i32 = 3;
const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 128]);
const GLYPH_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Font size for the primary icon: 40% of the canvas width, truncated to whole pixels.
pub fn primary_font_size() -> f32 {
    (PRIMARY_SIZE as f32 * PRIMARY_FONT_RATIO).floor()
}

/// Draw origin that centers `bbox` on a square canvas of `canvas_size`.
///
/// The vertical position compensates for the box's top offset, since glyphs
/// are not inked right from their draw origin. The horizontal position does
/// not compensate for the left bearing.
pub fn centered_origin(canvas_size: u32, bbox: &TextBox) -> (i32, i32) {
    let canvas = canvas_size as i32;
    let x = (canvas - bbox.width()).div_euclid(2);
    let y = (canvas - bbox.height()).div_euclid(2) - bbox.top;
    (x, y)
}

/// Opaque square in the brand color with the brand letter in white.
pub fn primary_icon(brand: Brand, font: &IconFont) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(PRIMARY_SIZE, PRIMARY_SIZE, brand.color());
    let size = primary_font_size();
    let text = brand.letter().to_string();

    let bbox = font.text_bbox(size, &text);
    let (x, y) = centered_origin(PRIMARY_SIZE, &bbox);
    font.draw_text(&mut canvas, GLYPH_COLOR, x, y, size, &text);

    canvas
}

/// Transparent square with the brand letter in the brand color over a soft
/// drop shadow, for launcher icon masks.
pub fn adaptive_icon(brand: Brand, font: &IconFont) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(ADAPTIVE_SIZE, ADAPTIVE_SIZE, TRANSPARENT);
    let text = brand.letter().to_string();

    let bbox = font.text_bbox(ADAPTIVE_FONT_SIZE, &text);
    let (x, y) = centered_origin(ADAPTIVE_SIZE, &bbox);

    font.draw_text(
        &mut canvas,
        SHADOW_COLOR,
        x + SHADOW_OFFSET,
        y + SHADOW_OFFSET,
        ADAPTIVE_FONT_SIZE,
        &text,
    );
    font.draw_text(&mut canvas, brand.color(), x, y, ADAPTIVE_FONT_SIZE, &text);

    canvas
}
