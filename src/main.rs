//! `swagger-ui-serve` binary: serves a single OpenAPI document through the Swagger UI.

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use swagger_ui_middleware::{DocumentFile, MemoryRegistry, ServerConfig, SwaggerError, SwaggerUi};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::load();

    let registry = MemoryRegistry::new();
    match &config.document {
        Some(path) => {
            info!(path = %path.display(), instance = %config.ui.instance_name, "serving document");
            registry.register(config.ui.instance_name.clone(), DocumentFile::new(path));
        }
        None => warn!("no document configured; doc.json will answer 500"),
    }

    let app = build_router(&config, registry).context("building swagger ui")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, prefix = %config.prefix, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(
    config: &ServerConfig,
    registry: MemoryRegistry,
) -> Result<Router<()>, SwaggerError> {
    let ui: Router<()> = SwaggerUi::new(config.prefix.clone(), registry)
        .config(config.ui.clone())
        .router()?;
    Ok(ui.layer(TraceLayer::new_for_http()))
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler; waiting for Ctrl+C");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
