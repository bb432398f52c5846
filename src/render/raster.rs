//! Raster (PNG) placeholder renderer.

use std::io::Cursor;

use bytes::Bytes;
use image::RgbImage;

use crate::error::RenderError;

use super::font::CaptionFont;
use super::{caption_size, color, ImageArtifact, CAPTION, PNG_CONTENT_TYPE};

/// Render a PNG placeholder: a solid `width`x`height` fill with the caption
/// centered on the measured text bounding box.
///
/// Centering is computed from what the located font actually produces, so the
/// caption lands in the visual middle whether the host supplied a scalable
/// font or we fell back to the bitmap glyphs. A caption wider than the image
/// is pinned to the left edge and cropped.
pub fn render(width: u32, height: u32, color_token: &str) -> Result<ImageArtifact, RenderError> {
    let fill = color::parse_fill(color_token)?;
    let mut img = RgbImage::from_pixel(width, height, fill);

    let px = caption_size(width, height);
    let font = CaptionFont::locate();
    let (text_width, text_height) = font.measure(CAPTION, px);
    let x = (width.saturating_sub(text_width) / 2) as i32;
    let y = (height.saturating_sub(text_height) / 2) as i32;
    font.draw(&mut img, color::contrast_for(fill), x, y, px, CAPTION);

    let mut encoded = Vec::new();
    img.write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
        .map_err(|e| RenderError::Encode(e.to_string()))?;

    Ok(ImageArtifact {
        bytes: Bytes::from(encoded),
        content_type: PNG_CONTENT_TYPE,
    })
}

// =============================================================================
// Tests
// =============================================================================
