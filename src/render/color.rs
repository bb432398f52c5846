//! Color token resolution for the raster renderer.
//!
//! Color tokens are whatever appeared between the commas of the request path:
//! CSS named colors (`white`, `rebeccapurple`), hex notation (`#ff0000`,
//! `#f00`), or `rgb()`-style functions. The raster renderer has to turn the
//! token into pixels, so an unresolvable token is a render error. The vector
//! renderer never calls into here for the fill: SVG consumers do their own
//! color parsing.

use image::Rgb;

use crate::error::RenderError;

/// Resolve a color token to an RGB fill.
pub fn parse_fill(token: &str) -> Result<Rgb<u8>, RenderError> {
    let color = csscolorparser::parse(token)
        .map_err(|_| RenderError::UnknownColor(token.to_string()))?;
    let [r, g, b, _] = color.to_rgba8();
    Ok(Rgb([r, g, b]))
}

/// Pick a caption color that stays legible on the given fill.
///
/// Black on light fills, white on dark ones, judged by Rec. 709 relative
/// luminance.
pub fn contrast_for(fill: Rgb<u8>) -> Rgb<u8> {
    if is_light(fill) {
        Rgb([0, 0, 0])
    } else {
        Rgb([255, 255, 255])
    }
}

/// Caption color keyword for the vector renderer.
///
/// Applies the same luminance rule when the token resolves; an opaque token
/// the parser does not understand gets the historical default of black.
pub fn contrast_name(token: &str) -> &'static str {
    match parse_fill(token) {
        Ok(fill) if !is_light(fill) => "white",
        _ => "black",
    }
}

fn is_light(fill: Rgb<u8>) -> bool {
    let Rgb([r, g, b]) = fill;
    let luminance = 0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b);
    luminance >= 128.0
}

// =============================================================================
// Tests
// =============================================================================
