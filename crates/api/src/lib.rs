//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST-ish routes multiplexed on the `action` query parameter,
//!   mirroring the contract the frontend speaks
//! - Router assembly with CORS and request tracing
//! - Response types

pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
}

/// Creates the main application router.
///
/// The CORS layer answers OPTIONS preflight for every route with a
/// 200 and a 24-hour max age.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .max_age(Duration::from_secs(86_400)),
        )
        .with_state(state)
}
