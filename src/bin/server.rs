//! tower-profile HTTP server binary.
//!
//! Starts an axum HTTP server that exposes the profile engine to the
//! questionnaire UI.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `TOWER_REFERENCE` — Path to a YAML reference-data file (default: built-in tables)
//! - `RUST_LOG` — Tracing filter (default: "info,tower_profile=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! # or with custom reference tables:
//! TOWER_REFERENCE=./reference.yaml cargo run --bin server
//! ```

use anyhow::Context;
use tower_profile::server::{app_router, AppState};
use tower_profile::Engine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_profile=debug".into()),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    let engine = match std::env::var("TOWER_REFERENCE") {
        Ok(path) => {
            tracing::info!("Loading reference tables from {}", path);
            Engine::from_yaml_file(&path)
                .with_context(|| format!("invalid reference tables in {}", path))?
        }
        Err(_) => Engine::builtin(),
    };

    let app = app_router(AppState::new(engine));

    tracing::info!("tower-profile server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health — liveness probe");
    tracing::info!("  POST /assess — assess raw selections");
    tracing::info!("  POST /reduce — questionnaire state transition");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
