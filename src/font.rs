//! Font selection and glyph rendering.
//!
//! Icons are drawn with a system TrueType font when one can be loaded. When it
//! cannot (missing file, unreadable, not a font), rendering degrades to the
//! built-in 8x8 bitmap font instead of failing.

use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use anyhow::{Context, Result};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

const BITMAP_CELLS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Platform family of the running build. Anything that is neither macOS
    /// nor Windows is treated as Linux.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Well-known font file for each platform family.
pub fn system_font_path(platform: Platform) -> &'static Path {
    match platform {
        Platform::MacOs => Path::new("/System/Library/Fonts/Arial.ttf"),
        Platform::Windows => Path::new("C:/Windows/Fonts/arial.ttf"),
        Platform::Linux => Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
    }
}

/// Which font ended up being used for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    TrueType(PathBuf),
    Builtin,
}

impl FontSource {
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontSource::Builtin)
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::TrueType(path) => write!(f, "{}", path.display()),
            FontSource::Builtin => write!(f, "built-in bitmap font"),
        }
    }
}

/// Inked area of a piece of text, relative to the point it is drawn at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: TextBox) -> TextBox {
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

pub enum IconFont {
    Outline(FontVec),
    Bitmap,
}

impl IconFont {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read font: {}", path.display()))?;
        let font = FontVec::try_from_vec(data)
            .with_context(|| format!("Failed to parse font: {}", path.display()))?;
        Ok(IconFont::Outline(font))
    }

    /// Loads the font at `path`, falling back to the built-in bitmap font if
    /// that fails for any reason.
    pub fn load_or_builtin(path: &Path) -> (Self, FontSource) {
        match Self::load(path) {
            Ok(font) => (font, FontSource::TrueType(path.to_path_buf())),
            Err(_) => (IconFont::Bitmap, FontSource::Builtin),
        }
    }

    /// Bounding box of the inked pixels when `text` is drawn at (0, 0).
    pub fn text_bbox(&self, size: f32, text: &str) -> TextBox {
        let mut bbox: Option<TextBox> = None;
        let mut extend = |b: TextBox| {
            bbox = Some(match bbox {
                Some(acc) => acc.union(b),
                None => b,
            });
        };

        match self {
            IconFont::Outline(font) => {
                layout_outline(font, size, text, |glyph| {
                    let b = glyph.px_bounds();
                    extend(TextBox {
                        left: b.min.x as i32,
                        top: b.min.y as i32,
                        right: b.max.x as i32,
                        bottom: b.max.y as i32,
                    });
                });
            }
            IconFont::Bitmap => {
                let cell = bitmap_cell(size) as i32;
                for (index, rows) in bitmap_glyphs(text) {
                    let Some((min_col, min_row, max_col, max_row)) = inked_cells(&rows) else {
                        continue;
                    };
                    let origin = index as i32 * BITMAP_CELLS as i32 * cell;
                    extend(TextBox {
                        left: origin + min_col as i32 * cell,
                        top: min_row as i32 * cell,
                        right: origin + (max_col as i32 + 1) * cell,
                        bottom: (max_row as i32 + 1) * cell,
                    });
                }
            }
        }

        bbox.unwrap_or_default()
    }

    /// Draws `text` with its origin at (x, y). Pixels falling outside the
    /// canvas are clipped.
    pub fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        color: Rgba<u8>,
        x: i32,
        y: i32,
        size: f32,
        text: &str,
    ) {
        match self {
            IconFont::Outline(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(size), font, text);
            }
            IconFont::Bitmap => {
                let cell = bitmap_cell(size);
                let step = cell as i32;
                for (index, rows) in bitmap_glyphs(text) {
                    let origin = x + index as i32 * BITMAP_CELLS as i32 * step;
                    for (row, bits) in rows.iter().enumerate() {
                        for col in 0..BITMAP_CELLS {
                            if bits & (1u8 << col) == 0 {
                                continue;
                            }
                            let rect = Rect::at(origin + col as i32 * step, y + row as i32 * step)
                                .of_size(cell, cell);
                            draw_filled_rect_mut(canvas, rect, color);
                        }
                    }
                }
            }
        }
    }
}

/// Lays out glyphs on a single line the same way `draw_text_mut` does, so
/// measured bounds match what gets drawn.
fn layout_outline(
    font: &FontVec,
    size: f32,
    text: &str,
    mut f: impl FnMut(ab_glyph::OutlinedGlyph),
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0;
    let mut previous: Option<GlyphId> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            if let Some(previous) = previous {
                caret += scaled.kern(previous, id);
            }
            previous = Some(id);
            f(outlined);
        }
    }
}

/// Pixel size of one bitmap cell, so an 8-cell glyph is roughly `size` tall.
fn bitmap_cell(size: f32) -> u32 {
    ((size / BITMAP_CELLS as f32) as u32).max(1)
}

/// Bitmap rows for each character, paired with its position in the text.
/// Characters the font has no glyph for still take up a slot.
fn bitmap_glyphs(text: &str) -> impl Iterator<Item = (usize, [u8; 8])> + '_ {
    text.chars()
        .enumerate()
        .filter_map(|(index, c)| BASIC_FONTS.get(c).map(|rows| (index, rows)))
}

/// (min_col, min_row, max_col, max_row) of the set bits, or `None` for a blank glyph.
fn inked_cells(rows: &[u8; 8]) -> Option<(u32, u32, u32, u32)> {
    let mut found: Option<(u32, u32, u32, u32)> = None;
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..BITMAP_CELLS {
            if bits & (1u8 << col) == 0 {
                continue;
            }
            let row = row as u32;
            found = Some(match found {
                Some((c0, r0, c1, r1)) => (c0.min(col), r0.min(row), c1.max(col), r1.max(row)),
                None => (col, row, col, row),
            });
        }
    }
    found
}
