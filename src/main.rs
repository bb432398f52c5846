//! Genato - placeholder images generated at the edge.
//!
//! This binary starts the HTTP server or writes local sample files.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use genato::{
    config::{Cli, Command, SampleConfig, ServeConfig},
    create_router, create_s3_client,
    edge::EdgeHandler,
    render,
    server::RouterConfig,
    store::S3ObjectStore,
    uri::ImageRequest,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(config) => run_serve(config).await,
        Command::Sample(config) => run_sample(config),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("genato v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  S3 bucket: {}", config.s3_bucket);
    if let Some(ref endpoint) = config.s3_endpoint {
        info!("  S3 endpoint: {}", endpoint);
    }
    info!("  S3 region: {}", config.s3_region);
    info!("  Cache max-age: {}s", config.cache_max_age);

    let s3_client = create_s3_client(config.s3_endpoint.as_deref(), &config.s3_region).await;

    info!("");
    info!("Connecting to S3...");
    if let Err(e) = test_s3_connection(&s3_client, &config.s3_bucket).await {
        error!("  Failed to connect to S3: {}", e);
        error!("");
        error!("  Please check:");
        error!("    - Your AWS credentials are configured correctly");
        error!(
            "    - The bucket '{}' exists and is accessible",
            config.s3_bucket
        );
        error!("    - The S3 endpoint is correct (if using MinIO/custom S3)");
        return ExitCode::FAILURE;
    }
    info!("  Connected successfully");

    let store = S3ObjectStore::new(s3_client, config.s3_bucket.clone());
    let edge = EdgeHandler::new(store);
    let router = create_router(edge, build_router_config(&config));

    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl http://{}/640x480,white,png", addr);
    info!("    curl http://{}/300x100,red,svg", addr);
    info!("────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Test S3 connectivity with a minimal list request.
async fn test_s3_connection(client: &aws_sdk_s3::Client, bucket: &str) -> Result<(), String> {
    client
        .list_objects_v2()
        .bucket(bucket)
        .max_keys(1)
        .send()
        .await
        .map_err(|e| format!("{}", e))?;

    Ok(())
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "genato=debug,tower_http=debug"
    } else {
        "genato=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application ServeConfig.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new()
        .with_cache_max_age(config.cache_max_age)
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}

// =============================================================================
// Sample Command
// =============================================================================

fn run_sample(config: SampleConfig) -> ExitCode {
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let out_dir = Path::new(&config.out_dir);

    for format in [genato::uri::ImageFormat::Png, genato::uri::ImageFormat::Svg] {
        let request = ImageRequest {
            width: config.width,
            height: config.height,
            color: config.color.clone(),
            format,
        };

        let artifact = match render::render(&request) {
            Ok(artifact) => artifact,
            Err(e) => {
                eprintln!("Error: failed to render sample: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let file_name = format!("hello-world.{}", format.as_str());
        let path = out_dir.join(&file_name);
        if let Err(e) = std::fs::write(&path, &artifact.bytes) {
            eprintln!("Error: failed to write {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }

        println!("{} generated successfully.", path.display());
    }

    ExitCode::SUCCESS
}
