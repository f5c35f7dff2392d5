//! Project-management orchestrator routes.
//!
//! A single endpoint multiplexing the four creation actions plus the
//! companies/items read passthroughs the project and estimate forms use.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::AppState;
use crate::routes::companies::CompanySummary;
use crate::routes::items::ItemResponse;
use crate::routes::{internal_error, invalid_action};
use podryad_db::entities::sea_orm_active_enums::{
    EstimateStatus, ItemType, PaymentStatus, PaymentType, ProjectStatus,
};
use podryad_db::{
    CompanyRepository, CreateEstimateInput, CreateItemInput, CreatePaymentInput,
    CreateProjectInput, EstimateError, EstimateItemInput, EstimateRepository, ItemRepository,
    PaymentRepository, ProjectContractorInput, ProjectError, ProjectItemInput,
    ProjectRepository,
};

/// Creates the manage routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/manage", get(get_manage).post(post_manage))
}

// ============================================================================
// Query & Request Types
// ============================================================================

/// Query parameters for the manage endpoint.
#[derive(Debug, Deserialize)]
pub struct ManageQuery {
    /// Which read or creation to perform.
    pub action: Option<String>,
}

/// A line item supplied with `create-project` or `create-estimate`.
#[derive(Debug, Deserialize)]
pub struct ItemLineRequest {
    /// Referenced catalog item.
    pub item_id: i32,
    /// Quantity in the item's unit of measure.
    pub quantity: Decimal,
    /// Agreed price per unit.
    pub unit_price: Decimal,
}

/// A contractor assignment supplied with `create-project`.
#[derive(Debug, Deserialize)]
pub struct ContractorLineRequest {
    /// Assigned contractor.
    pub contractor_id: i32,
    /// Role on this project.
    pub role: String,
    /// Hourly rate agreed for this project.
    pub hourly_rate: Decimal,
}

/// Payload for `create-project`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Commissioning company (required).
    pub company_id: Option<i32>,
    /// Short title (required).
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Agreed budget; zero when omitted.
    pub budget: Option<Decimal>,
    /// Lifecycle status; planning when omitted.
    pub status: Option<ProjectStatus>,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Line items.
    #[serde(default)]
    pub items: Vec<ItemLineRequest>,
    /// Contractor assignments.
    #[serde(default)]
    pub contractors: Vec<ContractorLineRequest>,
}

/// Payload for `create-estimate`.
#[derive(Debug, Deserialize)]
pub struct CreateEstimateRequest {
    /// Company the estimate is drafted for (required).
    pub company_id: Option<i32>,
    /// Short title (required).
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Estimated total cost, when already priced.
    pub estimated_cost: Option<Decimal>,
    /// Estimated effort in hours; zero when omitted.
    pub estimated_hours: Option<Decimal>,
    /// Review status; draft when omitted.
    pub status: Option<EstimateStatus>,
    /// Line items.
    #[serde(default)]
    pub items: Vec<ItemLineRequest>,
}

/// Payload for `create-payment`.
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    /// Project the payment is booked against (required).
    pub project_id: Option<i32>,
    /// Contractor being paid; null for income payments.
    pub contractor_id: Option<i32>,
    /// Income or expense (required).
    #[serde(rename = "type")]
    pub payment_type: Option<PaymentType>,
    /// Payment amount (required).
    pub amount: Option<Decimal>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Value date of the payment (required).
    pub payment_date: Option<NaiveDate>,
    /// Settlement status; pending when omitted.
    pub status: Option<PaymentStatus>,
}

/// Payload for `create-item`.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Display name (required).
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Material or service (required).
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    /// Unit of measure (required).
    pub unit: Option<String>,
    /// Default price per unit.
    pub default_price: Option<Decimal>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /manage - reference reads for the creation forms.
async fn get_manage(
    State(state): State<AppState>,
    Query(query): Query<ManageQuery>,
) -> impl IntoResponse {
    match query.action.as_deref() {
        Some("companies") => {
            let repo = CompanyRepository::new((*state.db).clone());
            match repo.list().await {
                Ok(rows) => {
                    let body: Vec<CompanySummary> =
                        rows.into_iter().map(CompanySummary::from).collect();
                    (StatusCode::OK, Json(body)).into_response()
                }
                Err(e) => {
                    error!(error = %e, "Failed to query companies");
                    internal_error()
                }
            }
        }
        Some("items") => {
            let repo = ItemRepository::new((*state.db).clone());
            match repo.list().await {
                Ok(rows) => {
                    let body: Vec<ItemResponse> =
                        rows.into_iter().map(ItemResponse::from).collect();
                    (StatusCode::OK, Json(body)).into_response()
                }
                Err(e) => {
                    error!(error = %e, "Failed to query items");
                    internal_error()
                }
            }
        }
        _ => invalid_action(),
    }
}

/// POST /manage - the four creation actions.
async fn post_manage(
    State(state): State<AppState>,
    Query(query): Query<ManageQuery>,
    Json(payload): Json<serde_json::Value>,
) -> impl IntoResponse {
    match query.action.as_deref() {
        Some("create-project") => create_project(&state, payload).await,
        Some("create-estimate") => create_estimate(&state, payload).await,
        Some("create-payment") => create_payment(&state, payload).await,
        Some("create-item") => create_item(&state, payload).await,
        _ => invalid_action(),
    }
}

/// Creates a project with its item and contractor lines in one
/// transaction.
async fn create_project(state: &AppState, payload: serde_json::Value) -> axum::response::Response {
    let request: CreateProjectRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(e) => return malformed_body(&e),
    };

    let (Some(company_id), Some(title)) = (request.company_id, request.title) else {
        return bad_request("company_id and title are required");
    };

    let repo = ProjectRepository::new((*state.db).clone());
    let input = CreateProjectInput {
        company_id,
        title,
        description: request.description,
        budget: request.budget.unwrap_or_default(),
        status: request.status.unwrap_or(ProjectStatus::Planning),
        start_date: request.start_date,
        items: request
            .items
            .into_iter()
            .map(|line| ProjectItemInput {
                item_id: line.item_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect(),
        contractors: request
            .contractors
            .into_iter()
            .map(|line| ProjectContractorInput {
                contractor_id: line.contractor_id,
                role: line.role,
                hourly_rate: line.hourly_rate,
            })
            .collect(),
    };

    match repo.create_with_lines(input).await {
        Ok(project) => {
            info!(project_id = project.id, "Project created");
            created(project.id, "Project created successfully")
        }
        Err(ProjectError::CompanyNotFound(company_id)) => {
            warn!(company_id, "Rejected project for unknown company");
            bad_request("Company not found")
        }
        Err(ProjectError::Database(e)) => {
            error!(error = %e, "Failed to create project");
            internal_error()
        }
    }
}

/// Creates an estimate with its item lines in one transaction.
async fn create_estimate(
    state: &AppState,
    payload: serde_json::Value,
) -> axum::response::Response {
    let request: CreateEstimateRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(e) => return malformed_body(&e),
    };

    let (Some(company_id), Some(title)) = (request.company_id, request.title) else {
        return bad_request("company_id and title are required");
    };

    let repo = EstimateRepository::new((*state.db).clone());
    let input = CreateEstimateInput {
        company_id,
        title,
        description: request.description,
        estimated_cost: request.estimated_cost,
        estimated_hours: request.estimated_hours.unwrap_or_default(),
        status: request.status.unwrap_or(EstimateStatus::Draft),
        items: request
            .items
            .into_iter()
            .map(|line| EstimateItemInput {
                item_id: line.item_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect(),
    };

    match repo.create_with_items(input).await {
        Ok(estimate) => {
            info!(estimate_id = estimate.id, "Estimate created");
            created(estimate.id, "Estimate created successfully")
        }
        Err(EstimateError::CompanyNotFound(company_id)) => {
            warn!(company_id, "Rejected estimate for unknown company");
            bad_request("Company not found")
        }
        Err(EstimateError::Database(e)) => {
            error!(error = %e, "Failed to create estimate");
            internal_error()
        }
    }
}

/// Creates a payment; the contractor reference may stay null.
async fn create_payment(state: &AppState, payload: serde_json::Value) -> axum::response::Response {
    let request: CreatePaymentRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(e) => return malformed_body(&e),
    };

    let (Some(project_id), Some(payment_type), Some(amount), Some(payment_date)) = (
        request.project_id,
        request.payment_type,
        request.amount,
        request.payment_date,
    ) else {
        return bad_request("project_id, type, amount and payment_date are required");
    };

    let repo = PaymentRepository::new((*state.db).clone());
    let input = CreatePaymentInput {
        project_id,
        contractor_id: request.contractor_id,
        payment_type,
        amount,
        description: request.description,
        payment_date,
        status: request.status.unwrap_or(PaymentStatus::Pending),
    };

    match repo.create(input).await {
        Ok(payment) => {
            info!(payment_id = payment.id, "Payment created");
            created(payment.id, "Payment created successfully")
        }
        Err(e) => {
            error!(error = %e, "Failed to create payment");
            internal_error()
        }
    }
}

/// Creates a catalog item.
async fn create_item(state: &AppState, payload: serde_json::Value) -> axum::response::Response {
    let request: CreateItemRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(e) => return malformed_body(&e),
    };

    let (Some(name), Some(item_type), Some(unit)) =
        (request.name, request.item_type, request.unit)
    else {
        return bad_request("name, type and unit are required");
    };

    let repo = ItemRepository::new((*state.db).clone());
    let input = CreateItemInput {
        name,
        description: request.description,
        item_type,
        unit,
        default_price: request.default_price,
    };

    match repo.create(input).await {
        Ok(item) => {
            info!(item_id = item.id, "Item created");
            created(item.id, "Item created successfully")
        }
        Err(e) => {
            error!(error = %e, "Failed to create item");
            internal_error()
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 200 response for a successful creation.
fn created(id: i32, message: &str) -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "id": id, "message": message }))).into_response()
}

/// 400 response for a client input error.
fn bad_request(message: &str) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// 400 response for a body that does not match the action's schema.
fn malformed_body(e: &serde_json::Error) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("Invalid request body: {e}") })),
    )
        .into_response()
}
