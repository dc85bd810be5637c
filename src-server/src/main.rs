//! Form Server - HTTP front end for the Form A renderer
//!
//! Serves the blank input page and turns a submitted form into a DOCX
//! download. Nothing is stored between requests.

use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod handlers;
mod settings;
mod state;

use settings::ServerSettings;
use state::AppState;

/// Build the router over shared, read-only state
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::form_page).post(handlers::generate))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("form_server=info,tower_http=debug")),
        )
        .init();

    let settings = ServerSettings::load()?;
    tracing::info!(layout = ?settings.layout, placeholder = settings.placeholder.is_some(), "loaded settings");

    let state = Arc::new(AppState::from_settings(&settings));
    let addr = settings.socket_addr()?;

    tracing::info!("Starting form server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
