use thiserror::Error;

/// Errors produced while parsing a request path.
///
/// Everything except [`ParseError::UnsupportedFormat`] means the path does not
/// match the `/<width>x<height>,<color>,<format>` grammar at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of comma-separated fields
    #[error("expected <width>x<height>,<color>,<format>, got {count} field(s)")]
    FieldCount { count: usize },

    /// Size field does not split into two tokens on "x"
    #[error("invalid size {token:?}: expected <width>x<height>")]
    MalformedSize { token: String },

    /// Width or height is not a positive integer
    #[error("invalid dimension {token:?}: must be a positive integer")]
    InvalidDimension { token: String },

    /// Color field is empty
    #[error("missing color")]
    MissingColor,

    /// Format field is empty
    #[error("missing format")]
    MissingFormat,

    /// Format token is present but names no known format
    #[error("unsupported format {token:?} (supported formats: png, svg)")]
    UnsupportedFormat { token: String },
}

impl ParseError {
    /// Whether this error means the path violates the grammar, as opposed to
    /// naming a format we do not render.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ParseError::UnsupportedFormat { .. })
    }
}

/// Errors that can occur while rendering a placeholder image.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// Color token the raster renderer could not resolve to pixels
    #[error("unrecognized color {0:?}")]
    UnknownColor(String),

    /// Image encoding failure
    #[error("encoding failed: {0}")]
    Encode(String),
}

/// Errors from the object store.
///
/// "Object absent" is not an error: existence checks report it as `Ok(false)`
/// and reads as `Ok(None)`. These variants cover everything else.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Error from S3 or S3-compatible storage
    #[error("S3 error: {0}")]
    S3(String),

    /// Network or connection error
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Umbrella error for the request pipeline.
///
/// The edge handler catches this at its top level and converts every variant
/// into the same generic failure response, so none of these details ever
/// reach a caller.
#[derive(Debug, Clone, Error)]
pub enum EdgeError {
    /// Request path could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Placeholder rendering failed
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Object store access failed
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
