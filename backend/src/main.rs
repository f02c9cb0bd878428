use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

use zoota_backend::logging::{init_tracing, load_config};
use zoota_backend::{AppState, build_router};

#[derive(Debug, Parser)]
#[command(name = "zoota-backend", version, about = "Zoota AI chat backend")]
struct Args {
    /// Path to config.toml (default: searched in conf/, ./ and the App Service root)
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let _log_guard = init_tracing(&config.logging)?;

    tracing::info!("==================================================");
    tracing::info!("Zoota AI Backend {} - Starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("==================================================");
    match &config.source {
        Some(path) => tracing::info!("✓ Configuration loaded from {}", path.display()),
        None => tracing::error!("✗ Configuration file not found, running on defaults"),
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = Arc::new(AppState::init(config).await);

    tracing::info!(
        "Azure OpenAI: {}",
        if state.chat_service.model_available() {
            "✓ Configured"
        } else {
            "⚠ Not configured (will use mock responses)"
        }
    );
    tracing::info!(
        "Database: {}",
        if state.chat_service.knowledge_available() {
            "✓ Connected"
        } else {
            "⚠ Not connected (will use config-based knowledge)"
        }
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("OpenAPI document at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
