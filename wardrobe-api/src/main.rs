//! wardrobe-api - HTTP service for a personal wardrobe
//!
//! Stores clothing items, generates outfits, and reports on wardrobe usage.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wardrobe_api::{build_router_with_cors, cors_layer, AppState};
use wardrobe_common::config::{load_toml_config, ServerConfig, ROOT_FOLDER_ENV};
use wardrobe_common::db::init_database;

const DEFAULT_LOG_FILTER: &str = "wardrobe_api=info,wardrobe_common=info,tower_http=info";

/// Command-line arguments for wardrobe-api
#[derive(Parser, Debug)]
#[command(name = "wardrobe-api")]
#[command(about = "Wardrobe management and outfit suggestion service")]
#[command(version)]
struct Args {
    /// Folder holding the wardrobe database
    #[arg(short, long, env = ROOT_FOLDER_ENV)]
    root_folder: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "WARDROBE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WARDROBE_PORT")]
    port: Option<u16>,

    /// TOML config file
    #[arg(short, long, env = "WARDROBE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Read before tracing starts so the file can set the log level;
    // load errors are reported once the subscriber is up
    let toml = load_toml_config(args.config.as_deref());
    let log_level = toml.as_ref().ok().and_then(|t| t.log_level.clone());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting wardrobe-api v{}", env!("CARGO_PKG_VERSION"));

    let toml = toml.context("Failed to load configuration")?;
    let config = ServerConfig::resolve(
        args.root_folder.as_deref(),
        args.host.as_deref(),
        args.port,
        toml,
    );
    info!("Root folder: {}", config.root_folder.display());
    info!("Database path: {}", config.db_path.display());

    let pool = init_database(&config.db_path)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::from_config(pool, &config);
    if config.allows_any_origin() {
        info!("CORS: any origin allowed");
    } else {
        info!("CORS: allowed origins {:?}", config.cors_origins);
    }
    let app = build_router_with_cors(state, cors_layer(&config.cors_origins));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("wardrobe-api listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
