//! Placeholder image renderers.
//!
//! Two independent renderers, one per output format:
//!
//! - [`raster`] produces a PNG bitmap, drawing the caption with a best-effort
//!   font lookup ([`font`]).
//! - [`vector`] produces an SVG document that expresses the same layout
//!   declaratively.
//!
//! Both are pure functions of `(width, height, color)`: no shared mutable
//! state, identical inputs give byte-identical output. Format dispatch is a
//! closed match over [`ImageFormat`](crate::uri::ImageFormat), decided at
//! parse time.

pub mod color;
pub mod font;
pub mod raster;
pub mod vector;

use bytes::Bytes;

use crate::error::RenderError;
use crate::uri::{ImageFormat, ImageRequest};

/// The caption drawn on every placeholder.
pub const CAPTION: &str = "Hello World";

/// MIME type of raster output.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// MIME type of vector output.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// An encoded placeholder image, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    /// Encoded image bytes
    pub bytes: Bytes,

    /// MIME type matching the encoding
    pub content_type: &'static str,
}

/// Caption font size in pixels, derived from the image dimensions.
///
/// One tenth of the smaller edge, clamped so tiny-but-valid images never ask
/// for a zero-sized font.
pub(crate) fn caption_size(width: u32, height: u32) -> u32 {
    (width.min(height) / 10).max(1)
}

/// Render a placeholder for the given request.
pub fn render(request: &ImageRequest) -> Result<ImageArtifact, RenderError> {
    match request.format {
        ImageFormat::Png => raster::render(request.width, request.height, &request.color),
        ImageFormat::Svg => vector::render(request.width, request.height, &request.color),
    }
}

// =============================================================================
// Tests
// =============================================================================
