//! CUBETAC Server - HTTP API for the browser front end
//!
//! This crate exposes the match engine over a small REST surface:
//! - Session lifecycle (start, state, reset)
//! - Move application (human and computer through the same path)
//! - Line catalogs for renderer highlighting
//!
//! Each session owns an independent engine; the server adds no game logic.

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use state::{GameMode, GameSession, ServerState};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8002 }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Line catalogs
        .route("/api/lines", get(routes::lines::get_lines))
        // Game API
        .route("/api/game/start", post(routes::game::start_game))
        .route("/api/game/state", get(routes::game::game_state))
        .route("/api/game/move", post(routes::game::make_move))
        .route("/api/game/ai-move", post(routes::game::ai_move))
        .route("/api/game/reset", post(routes::game::reset_game))
        // Shared state
        .with_state(state)
        // Browser clients come from another origin
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new());
    let router = create_router(state);

    tracing::info!("CUBETAC server starting on http://0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
