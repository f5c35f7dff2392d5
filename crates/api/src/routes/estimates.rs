//! Estimate listing routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde::Serialize;
use tracing::error;

use crate::AppState;
use crate::routes::internal_error;
use podryad_db::EstimateRepository;
use podryad_db::entities::sea_orm_active_enums::EstimateStatus;
use podryad_shared::format_amount;

/// Creates the estimates routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/estimates", get(get_estimates))
}

/// Estimate row with company name and conversion flag.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    /// Estimate id.
    pub id: i32,
    /// Estimate title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Estimated total cost, when priced.
    pub estimated_cost: Option<String>,
    /// Estimated effort in hours.
    pub estimated_hours: String,
    /// Review status.
    pub status: EstimateStatus,
    /// Row creation timestamp.
    pub created_at: String,
    /// Company name, if the company still exists.
    pub company_name: Option<String>,
    /// True iff at least one project references this estimate.
    pub converted_to_project: bool,
}

/// GET /estimates - all estimates with conversion flags, newest first.
async fn get_estimates(State(state): State<AppState>) -> impl IntoResponse {
    let repo = EstimateRepository::new((*state.db).clone());

    match repo.list_with_company().await {
        Ok(rows) => {
            let body: Vec<EstimateResponse> = rows
                .into_iter()
                .map(|row| EstimateResponse {
                    id: row.estimate.id,
                    title: row.estimate.title,
                    description: row.estimate.description,
                    estimated_cost: row.estimate.estimated_cost.map(format_amount),
                    estimated_hours: format_amount(row.estimate.estimated_hours),
                    status: row.estimate.status,
                    created_at: row.estimate.created_at.to_rfc3339(),
                    company_name: row.company_name,
                    converted_to_project: row.converted_to_project,
                })
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to query estimates");
            internal_error()
        }
    }
}
