//! Request path parsing.
//!
//! A placeholder request is encoded entirely in the URI path:
//!
//! ```text
//! /<width>x<height>,<color>,<format>
//! ```
//!
//! For example `/640x480,white,png`. Width and height are positive decimal
//! integers, the color is an opaque token handed to the renderer as-is, and
//! the format selects the renderer variant. A small set of reserved paths
//! (currently just the favicon probe) bypasses the pipeline entirely.
//!
//! Parsing decides everything up front: the rest of the pipeline is a
//! straight-line match over [`PathSpec`] and never re-inspects the path.

use crate::error::ParseError;

/// Paths that are recognized and forwarded without any processing.
pub const RESERVED_PATHS: &[&str] = &["favicon.ico"];

/// Output format of a placeholder image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// MIME type written alongside the stored object.
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Svg => "image/svg+xml",
        }
    }

    /// The format token as it appears in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// A fully parsed placeholder request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Image width in pixels (always > 0)
    pub width: u32,

    /// Image height in pixels (always > 0)
    pub height: u32,

    /// Fill color token, passed to the renderer unvalidated
    pub color: String,

    /// Output format
    pub format: ImageFormat,
}

/// Outcome of parsing a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// Reserved path: forward the request untouched, skip all processing
    PassThrough,

    /// A placeholder image request
    Image(ImageRequest),
}

/// Derive the storage key for a request path.
///
/// The key is the path with leading and trailing slashes stripped, used
/// verbatim. Repeated requests for the same path always map to the same key,
/// which is what makes the store existence check a valid cache probe.
pub fn storage_key(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Parse a request path into a [`PathSpec`].
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedFormat`] for a format token outside the
/// known set, and a grammar-specific [`ParseError`] for anything else that
/// does not match `/<width>x<height>,<color>,<format>`.
pub fn parse(path: &str) -> Result<PathSpec, ParseError> {
    let normalized = path.trim_matches('/');

    if RESERVED_PATHS.contains(&normalized) {
        return Ok(PathSpec::PassThrough);
    }

    let fields: Vec<&str> = normalized.split(',').collect();
    if fields.len() != 3 {
        return Err(ParseError::FieldCount {
            count: fields.len(),
        });
    }

    let (size, color, format) = (fields[0], fields[1], fields[2]);

    let (width_token, height_token) =
        size.split_once('x').ok_or_else(|| ParseError::MalformedSize {
            token: size.to_string(),
        })?;
    let width = parse_dimension(width_token)?;
    let height = parse_dimension(height_token)?;

    if color.is_empty() {
        return Err(ParseError::MissingColor);
    }

    let format = match format {
        "" => return Err(ParseError::MissingFormat),
        "png" => ImageFormat::Png,
        "svg" => ImageFormat::Svg,
        other => {
            return Err(ParseError::UnsupportedFormat {
                token: other.to_string(),
            })
        }
    };

    Ok(PathSpec::Image(ImageRequest {
        width,
        height,
        color: color.to_string(),
        format,
    }))
}

fn parse_dimension(token: &str) -> Result<u32, ParseError> {
    match token.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ParseError::InvalidDimension {
            token: token.to_string(),
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================
