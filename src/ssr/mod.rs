//! Server-Side Rendering
//!
//! HTTP layer for the render pipeline, built with Axum.
//!
//! # Request handling
//!
//! - `GET *` (catch-all) - every path is handed to the render
//!   orchestrator; route matching is the component tree's concern
//! - in production, files in the build directory are served statically
//!   first (no directory index), falling through to the orchestrator
//!
//! Responses are always complete: a 3xx redirect with `Location`, a
//! 200 HTML document prefixed with a doctype, or a 500 error body.
//!
//! # Example
//!
//! ```rust,ignore
//! use vellum::config::Config;
//! use vellum::routing::Switch;
//! use vellum::ssr::{serve, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Switch::new().route("/", Arc::new(HomePage));
//!     let config = Config::load_default();
//!     serve(AppState::new(Arc::new(app), config)).await?;
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod document;
pub mod error;
pub mod renderer;
pub mod state;

pub use assets::AssetRefs;
pub use document::{Document, STATE_GLOBAL};
pub use error::{SsrError, SsrResult};
pub use state::AppState;

use crate::config::DeployMode;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the router: catch-all GET to the render orchestrator, with
/// static serving of the build directory in production.
pub fn build_router(state: AppState) -> Router {
    let render = get(renderer::render_app).with_state(state.clone());

    let router = match state.mode() {
        DeployMode::Production => Router::new().fallback_service(
            // Files the bundler emitted are served directly; anything
            // else falls through to the orchestrator with its own
            // status intact.
            ServeDir::new(&state.config.assets.build_dir)
                .append_index_html_on_directories(false)
                .fallback(render),
        ),
        DeployMode::Development => Router::new().fallback_service(render),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), SsrError> {
    let addr = state.config.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}...", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SsrError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
