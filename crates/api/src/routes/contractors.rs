//! Contractor routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::routes::{internal_error, invalid_action};
use podryad_db::{ContractorRepository, CreateContractorInput};
use podryad_shared::format_amount;

/// Creates the contractors routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/contractors", get(get_contractors).post(post_contractors))
}

/// Query parameters for the contractors endpoint.
#[derive(Debug, Deserialize)]
pub struct ContractorsQuery {
    /// Which write to perform; reads need no action.
    pub action: Option<String>,
}

/// Contractor row with earnings aggregates.
#[derive(Debug, Serialize)]
pub struct ContractorResponse {
    /// Contractor id.
    pub id: i32,
    /// Full name.
    pub name: String,
    /// Trade or discipline.
    pub specialization: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Agreed hourly rate.
    pub hourly_rate: String,
    /// Count of payments referencing the contractor.
    pub total_projects: i64,
    /// Sum of payment amounts over all statuses.
    pub total_earned: String,
    /// Count of payments still pending.
    pub pending_payments: i64,
}

/// Payload for `create-contractor`.
#[derive(Debug, Deserialize)]
pub struct CreateContractorRequest {
    /// Full name (required).
    pub name: Option<String>,
    /// Trade or discipline (required).
    pub specialization: Option<String>,
    /// Contact email (required).
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Agreed hourly rate (required).
    pub hourly_rate: Option<Decimal>,
}

/// GET /contractors - all contractors with payment aggregates, ordered by
/// total earned descending.
async fn get_contractors(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ContractorRepository::new((*state.db).clone());

    match repo.list_with_earnings().await {
        Ok(rows) => {
            let body: Vec<ContractorResponse> = rows
                .into_iter()
                .map(|row| ContractorResponse {
                    id: row.contractor.id,
                    name: row.contractor.name,
                    specialization: row.contractor.specialization,
                    email: row.contractor.email,
                    phone: row.contractor.phone,
                    hourly_rate: format_amount(row.contractor.hourly_rate),
                    total_projects: row.total_projects,
                    total_earned: format_amount(row.total_earned),
                    pending_payments: row.pending_payments,
                })
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to query contractors");
            internal_error()
        }
    }
}

/// POST /contractors?action=create-contractor - creates a contractor.
async fn post_contractors(
    State(state): State<AppState>,
    Query(query): Query<ContractorsQuery>,
    Json(payload): Json<CreateContractorRequest>,
) -> impl IntoResponse {
    if query.action.as_deref() != Some("create-contractor") {
        return invalid_action();
    }

    let (Some(name), Some(specialization), Some(email), Some(hourly_rate)) = (
        payload.name,
        payload.specialization,
        payload.email,
        payload.hourly_rate,
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "name, specialization, email and hourly_rate are required"
            })),
        )
            .into_response();
    };

    let repo = ContractorRepository::new((*state.db).clone());
    let input = CreateContractorInput {
        name,
        specialization,
        email,
        phone: payload.phone,
        hourly_rate,
    };

    match repo.create(input).await {
        Ok(contractor) => {
            info!(contractor_id = contractor.id, "Contractor created");
            (
                StatusCode::OK,
                Json(json!({
                    "id": contractor.id,
                    "message": "Contractor created successfully"
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create contractor");
            internal_error()
        }
    }
}
