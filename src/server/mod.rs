//! Server assembly: application state and the router
//!
//! Validated entities are exposed via HTTP endpoints grouped under `/menu`
//! and `/orders`. Stores are injected through the state so tests can build
//! the same router around their own instances.

use crate::menu::{self, MenuStore};
use crate::orders::{self, OrderStore};
use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuStore,
    pub orders: OrderStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            menu: MenuStore::new(),
            orders: OrderStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/menu", menu::handlers::routes())
        .nest("/orders", orders::handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
