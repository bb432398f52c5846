//! Caption font lookup and drawing.
//!
//! The raster renderer wants a scalable font at an arbitrary pixel size, but
//! placeholder generation has to keep working on hosts with no fonts
//! installed at all (containers, CI). Lookup is therefore best-effort: a
//! fixed list of well-known font paths is probed once per process, and if
//! none of them yields a usable face the renderer falls back to a built-in
//! 8x8 bitmap glyph set scaled by an integer factor.
//!
//! Both variants expose the same measure/draw surface so the centering math
//! in the raster renderer does not care which one it got.

use std::fs;
use std::sync::OnceLock;

use ab_glyph::{FontVec, PxScale};
use font8x8::legacy::BASIC_LEGACY;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// Candidate scalable fonts, probed in order.
const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// Glyph cell edge length of the built-in bitmap font.
const BITMAP_GLYPH_SIZE: u32 = 8;

static SCALABLE_FONT: OnceLock<Option<FontVec>> = OnceLock::new();

fn load_scalable_font() -> Option<FontVec> {
    for path in FONT_SEARCH_PATHS {
        if let Ok(data) = fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec(data) {
                return Some(font);
            }
        }
    }
    None
}

/// A font usable for the placeholder caption.
pub enum CaptionFont {
    /// Scalable font found on the host
    Scalable(&'static FontVec),

    /// Built-in 8x8 bitmap glyphs
    Bitmap,
}

impl CaptionFont {
    /// Locate a caption font.
    ///
    /// The filesystem probe runs once per process; every later call reuses
    /// the same face, so identical render inputs keep producing identical
    /// bytes.
    pub fn locate() -> Self {
        match SCALABLE_FONT.get_or_init(load_scalable_font) {
            Some(font) => CaptionFont::Scalable(font),
            None => CaptionFont::Bitmap,
        }
    }

    /// The built-in bitmap variant, regardless of installed fonts.
    pub fn bitmap() -> Self {
        CaptionFont::Bitmap
    }

    /// Measure the rendered bounding box of `text` at `px` pixels.
    pub fn measure(&self, text: &str, px: u32) -> (u32, u32) {
        match self {
            CaptionFont::Scalable(font) => text_size(PxScale::from(px as f32), *font, text),
            CaptionFont::Bitmap => {
                let k = bitmap_scale(px);
                let glyphs = text.chars().count() as u32;
                (glyphs * BITMAP_GLYPH_SIZE * k, BITMAP_GLYPH_SIZE * k)
            }
        }
    }

    /// Draw `text` onto `img` with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the image are dropped, so a caption wider than
    /// a tiny image degrades to a crop instead of a panic.
    pub fn draw(&self, img: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, px: u32, text: &str) {
        match self {
            CaptionFont::Scalable(font) => {
                draw_text_mut(img, color, x, y, PxScale::from(px as f32), *font, text);
            }
            CaptionFont::Bitmap => draw_bitmap_text(img, color, x, y, px, text),
        }
    }
}

/// Integer scale factor for the bitmap font at a requested pixel size.
fn bitmap_scale(px: u32) -> u32 {
    (px / BITMAP_GLYPH_SIZE).max(1)
}

fn draw_bitmap_text(img: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, px: u32, text: &str) {
    let k = bitmap_scale(px) as i32;
    let (width, height) = (img.width() as i32, img.height() as i32);

    let mut pen_x = x;
    for ch in text.chars() {
        let glyph = bitmap_glyph(ch);
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..BITMAP_GLYPH_SIZE {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                let base_x = pen_x + col as i32 * k;
                let base_y = y + row as i32 * k;
                for dy in 0..k {
                    for dx in 0..k {
                        let (px_x, px_y) = (base_x + dx, base_y + dy);
                        if px_x >= 0 && px_x < width && px_y >= 0 && px_y < height {
                            img.put_pixel(px_x as u32, px_y as u32, color);
                        }
                    }
                }
            }
        }
        pen_x += BITMAP_GLYPH_SIZE as i32 * k;
    }
}

/// Glyph bitmap for a character. Unknown characters render as a solid block.
fn bitmap_glyph(ch: char) -> [u8; 8] {
    let code = ch as usize;
    if code < BASIC_LEGACY.len() {
        BASIC_LEGACY[code]
    } else {
        [0xFF; 8]
    }
}

// =============================================================================
// Tests
// =============================================================================
