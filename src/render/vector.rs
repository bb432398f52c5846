//! Vector (SVG) placeholder renderer.
//!
//! The SVG variant needs no pixel work at all: the document states the fill
//! and centering declaratively and whatever consumes it does the layout. The
//! color token is embedded as-is (after XML escaping) rather than resolved
//! here, so anything a downstream SVG renderer can interpret is fair game.

use bytes::Bytes;

use crate::error::RenderError;

use super::{caption_size, color, ImageArtifact, CAPTION, SVG_CONTENT_TYPE};

/// Render an SVG placeholder: a full-bleed rect in the requested color with
/// the caption anchored to the center.
pub fn render(width: u32, height: u32, color_token: &str) -> Result<ImageArtifact, RenderError> {
    let document = format!(
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="{fill}"/>
  <text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-size="{font_size}" fill="{caption_fill}">{caption}</text>
</svg>
"#,
        fill = xml_escape(color_token),
        font_size = caption_size(width, height),
        caption_fill = color::contrast_name(color_token),
        caption = CAPTION,
    );

    Ok(ImageArtifact {
        bytes: Bytes::from(document),
        content_type: SVG_CONTENT_TYPE,
    })
}

/// Escape a token for use inside an XML attribute value.
///
/// Legitimate color tokens never contain these characters, but the token
/// comes straight off the request path and must not be able to break out of
/// the attribute.
fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// =============================================================================
// Tests
// =============================================================================
