//! Project listing routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;

use crate::AppState;
use crate::routes::internal_error;
use podryad_db::ProjectRepository;
use podryad_db::entities::sea_orm_active_enums::ProjectStatus;
use podryad_shared::format_amount;

/// Creates the projects routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/projects", get(get_projects))
}

/// Project row with reference names and payment aggregates.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    /// Project id.
    pub id: i32,
    /// Project title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Agreed budget.
    pub budget: String,
    /// Cost accumulated so far.
    pub actual_cost: String,
    /// Derived profit (budget - actual cost).
    pub profit: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Planned or actual start date.
    pub start_date: Option<NaiveDate>,
    /// Planned or actual end date.
    pub end_date: Option<NaiveDate>,
    /// Commissioning company name.
    pub company_name: Option<String>,
    /// Source estimate title, if converted from one.
    pub estimate_title: Option<String>,
    /// Number of payments booked against the project.
    pub payment_count: i64,
    /// Sum of payment amounts booked against the project.
    pub total_paid: String,
}

/// GET /projects - all projects with financials, newest first.
async fn get_projects(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ProjectRepository::new((*state.db).clone());

    match repo.list_with_financials().await {
        Ok(rows) => {
            let body: Vec<ProjectResponse> = rows
                .into_iter()
                .map(|row| ProjectResponse {
                    id: row.project.id,
                    title: row.project.title,
                    description: row.project.description,
                    budget: format_amount(row.project.budget),
                    actual_cost: format_amount(row.project.actual_cost),
                    profit: format_amount(row.project.budget - row.project.actual_cost),
                    status: row.project.status,
                    start_date: row.project.start_date,
                    end_date: row.project.end_date,
                    company_name: row.company_name,
                    estimate_title: row.estimate_title,
                    payment_count: row.payment_count,
                    total_paid: format_amount(row.total_paid),
                })
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to query projects");
            internal_error()
        }
    }
}
