//! quizbox-server — serves the quiz front end's static assets over HTTP.
//!
//! The server carries no quiz logic. It exposes a directory (index.html,
//! scripts, styles) plus a `/health` probe.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Default port of the development server.
pub const DEFAULT_PORT: u16 = 3000;

async fn health() -> &'static str {
    "ok"
}

/// Build the router serving `assets_dir`.
pub fn router(assets_dir: impl AsRef<Path>) -> Router {
    let assets = ServeDir::new(assets_dir.as_ref()).append_index_html_on_directories(true);

    Router::new()
        .route("/health", get(health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve `assets_dir` until Ctrl-C.
pub async fn serve(addr: SocketAddr, assets_dir: PathBuf) -> Result<()> {
    if !assets_dir.is_dir() {
        tracing::warn!(
            "assets directory {} does not exist, every asset request will 404",
            assets_dir.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;
    tracing::info!(
        assets = %assets_dir.display(),
        "dev server running at http://{local}"
    );

    axum::serve(listener, router(&assets_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("dev server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
