//! API route definitions.

use axum::{Json, Router, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::AppState;

pub mod companies;
pub mod contractors;
pub mod estimates;
pub mod health;
pub mod items;
pub mod manage;
pub mod projects;
pub mod stats;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(companies::routes())
        .merge(contractors::routes())
        .merge(projects::routes())
        .merge(estimates::routes())
        .merge(items::routes())
        .merge(stats::routes())
        .merge(manage::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

/// 405 handler for known paths hit with an unsupported verb.
async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

/// 404 handler for unknown paths.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// 400 response for unknown or missing actions.
pub(crate) fn invalid_action() -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Invalid action" })),
    )
        .into_response()
}

/// 500 response for uncaught backend failures.
pub(crate) fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
