//! Configuration management.
//!
//! Configuration comes from command-line arguments via clap, with `GENATO_`
//! environment variable fallbacks and defaults for everything optional.
//!
//! # Environment Variables
//!
//! - `GENATO_HOST` - Server bind address (default: 0.0.0.0)
//! - `GENATO_PORT` - Server port (default: 3000)
//! - `GENATO_S3_BUCKET` - S3 bucket name (required for `serve`)
//! - `GENATO_S3_ENDPOINT` - Custom S3 endpoint for S3-compatible services
//! - `GENATO_S3_REGION` - AWS region (default: us-east-1)
//! - `GENATO_CACHE_MAX_AGE` - HTTP cache max-age seconds (default: 3600)
//! - `GENATO_CORS_ORIGINS` - Allowed CORS origins (comma-separated)

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default HTTP cache max-age in seconds (1 hour).
pub const DEFAULT_CACHE_MAX_AGE: u32 = 3600;

/// Dimensions and color of the sample placeholder.
pub const DEFAULT_SAMPLE_WIDTH: u32 = 400;
pub const DEFAULT_SAMPLE_HEIGHT: u32 = 200;
pub const DEFAULT_SAMPLE_COLOR: &str = "white";

// =============================================================================
// CLI
// =============================================================================

/// Genato - placeholder images generated at the edge.
///
/// Serves placeholder images described entirely by the request path
/// (`/640x480,white,png`), generating each one on first request and
/// persisting it to S3 so every later request is a cache hit.
#[derive(Parser, Debug)]
#[command(name = "genato")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP edge server.
    Serve(ServeConfig),

    /// Write sample placeholder files locally, no network needed.
    Sample(SampleConfig),
}

// =============================================================================
// Serve Configuration
// =============================================================================

/// Configuration for the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "GENATO_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "GENATO_PORT")]
    pub port: u16,

    /// S3 bucket the generated placeholders are stored in.
    #[arg(long, env = "GENATO_S3_BUCKET")]
    pub s3_bucket: String,

    /// Custom S3 endpoint URL for S3-compatible services (MinIO, etc.).
    ///
    /// If not specified, uses the default AWS S3 endpoint.
    #[arg(long, env = "GENATO_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// AWS region for S3.
    #[arg(long, default_value = DEFAULT_REGION, env = "GENATO_S3_REGION")]
    pub s3_region: String,

    /// HTTP Cache-Control max-age in seconds for served placeholders.
    #[arg(long, default_value_t = DEFAULT_CACHE_MAX_AGE, env = "GENATO_CACHE_MAX_AGE")]
    pub cache_max_age: u32,

    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "GENATO_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.s3_bucket.is_empty() {
            return Err(
                "S3 bucket name is required. Set --s3-bucket or GENATO_S3_BUCKET".to_string(),
            );
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Sample Configuration
// =============================================================================

/// Configuration for the `sample` command.
#[derive(Args, Debug, Clone)]
pub struct SampleConfig {
    /// Directory the sample files are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: String,

    /// Sample width in pixels.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_WIDTH)]
    pub width: u32,

    /// Sample height in pixels.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_HEIGHT)]
    pub height: u32,

    /// Sample fill color.
    #[arg(long, default_value = DEFAULT_SAMPLE_COLOR)]
    pub color: String,
}

impl SampleConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("sample dimensions must be positive".to_string());
        }
        if self.color.is_empty() {
            return Err("sample color must not be empty".to_string());
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
