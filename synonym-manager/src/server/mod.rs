// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use synonym_manager_repository::SynonymMapService;
use tower_http::trace::TraceLayer;
use tracing::info;

use self::state::AppState;
use crate::ServerError;

/// Create the Axum application router with all routes and middleware
pub fn create_app(service: Arc<SynonymMapService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/get-all-synonymmaps", get(handlers::get_all_synonym_maps))
        .route(
            "/get-synonymmap-by-aisearchindexname",
            post(handlers::get_synonym_maps_by_index),
        )
        .route("/create-synonym-map", post(handlers::create_synonym_map))
        .route("/update-synonym-map", put(handlers::update_synonym_map))
        .route("/delete-synonym-map", delete(handlers::delete_synonym_map))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server on the specified address until Ctrl+C
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!("Server listening on {}", addr);
    info!("- List endpoint: http://{}/get-all-synonymmaps", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal");
    }
}
