//! Herodex server library logic.

pub mod api;
pub mod api_hero_powers;
pub mod api_heroes;
pub mod api_powers;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
    Extension, Json, Router,
};
use herodex_db::DbPool;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
}

/// Maximum request body size (64 KiB). Every request body on this API is a
/// small JSON object.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Landing page handler.
async fn index() -> Html<&'static str> {
    Html("<h1>Herodex API</h1>")
}

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by load balancers,
/// monitoring, and CI to verify the server is running.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/heroes", get(api_heroes::list_heroes_handler))
        .route("/heroes/{id}", get(api_heroes::get_hero_handler))
        .route("/powers", get(api_powers::list_powers_handler))
        .route(
            "/powers/{id}",
            get(api_powers::get_power_handler).patch(api_powers::update_power_handler),
        )
        .route(
            "/hero_powers",
            post(api_hero_powers::create_hero_power_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
