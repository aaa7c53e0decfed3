// API Server Binary Entry Point
//
// Purpose: Start the Axum server for the training module generator
// Usage: cargo run --bin api_server

use training_module_rust::{create_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "training_module_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting farmer training module generator...");

    // Configuration from environment variables (HOST, PORT, SERVICE_NAME)
    let config = ServerConfig::from_env();
    let addr = config.socket_addr();

    tracing::info!("Configuration:");
    tracing::info!("  HOST: {}", config.host);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  SERVICE_NAME: {}", config.service_name);

    let state = AppState::new(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("  Local website: http://127.0.0.1:{}", config.port);
    tracing::info!("  Health check:  http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
