//! Companies reference routes.
//!
//! One endpoint multiplexed on `action`: plain list, list with project and
//! payment aggregates, a single company's projects, and company creation.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};

use crate::AppState;
use crate::routes::{internal_error, invalid_action};
use podryad_db::entities::{companies, projects, sea_orm_active_enums::ProjectStatus};
use podryad_db::{CompanyRepository, CreateCompanyInput};
use podryad_shared::format_amount;

/// Creates the companies routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/companies", get(get_companies).post(post_companies))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the companies endpoint.
#[derive(Debug, Deserialize)]
pub struct CompaniesQuery {
    /// Which read or write to perform.
    pub action: Option<String>,
    /// Company scope for `company-projects`.
    pub company_id: Option<i32>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Company summary for reference lists.
#[derive(Debug, Serialize)]
pub struct CompanySummary {
    /// Company id.
    pub id: i32,
    /// Legal name.
    pub name: String,
    /// Contact person full name.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

impl From<companies::Model> for CompanySummary {
    fn from(company: companies::Model) -> Self {
        Self {
            id: company.id,
            name: company.name,
            contact_person: company.contact_person,
            email: company.email,
            phone: company.phone,
        }
    }
}

/// Company row with query-time aggregates.
#[derive(Debug, Serialize)]
pub struct CompanyStatsResponse {
    /// Company id.
    pub id: i32,
    /// Legal name.
    pub name: String,
    /// Contact person full name.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Number of projects.
    pub total_projects: i64,
    /// Number of projects in progress.
    pub active_projects: i64,
    /// Sum of project budgets.
    pub total_budget: String,
    /// Sum of derived profits.
    pub total_profit: String,
    /// Sum of pending payment amounts.
    pub pending_payments: String,
}

/// One project in a company's project list.
#[derive(Debug, Serialize)]
pub struct CompanyProjectResponse {
    /// Project id.
    pub id: i32,
    /// Project title.
    pub title: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Agreed budget.
    pub budget: String,
    /// Derived profit (budget - actual cost).
    pub profit: String,
    /// Planned or actual start date.
    pub start_date: Option<NaiveDate>,
    /// Planned or actual end date.
    pub end_date: Option<NaiveDate>,
}

impl From<projects::Model> for CompanyProjectResponse {
    fn from(project: projects::Model) -> Self {
        Self {
            id: project.id,
            title: project.title,
            status: project.status,
            budget: format_amount(project.budget),
            profit: format_amount(project.budget - project.actual_cost),
            start_date: project.start_date,
            end_date: project.end_date,
        }
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Payload for `create-company`.
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    /// Legal name (required).
    pub name: Option<String>,
    /// Taxpayer identification number (required).
    pub inn: Option<String>,
    /// Tax registration reason code.
    #[serde(default)]
    pub kpp: String,
    /// Primary state registration number.
    #[serde(default)]
    pub ogrn: String,
    /// Registered legal address.
    #[serde(default)]
    pub legal_address: String,
    /// Actual office address.
    #[serde(default)]
    pub actual_address: String,
    /// Bank name.
    #[serde(default)]
    pub bank_name: String,
    /// Bank identification code.
    #[serde(default)]
    pub bik: String,
    /// Correspondent account number.
    #[serde(default)]
    pub correspondent_account: String,
    /// Settlement account number.
    #[serde(default)]
    pub account_number: String,
    /// Contact person full name.
    #[serde(default)]
    pub contact_person: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
}

// ============================================================================
// Fallback Data
// ============================================================================

/// Built-in reference list served when the companies table is unreachable.
/// Deliberately narrow graceful degradation for this one read path only.
pub(crate) fn fallback_companies() -> Vec<CompanySummary> {
    vec![
        CompanySummary {
            id: 1,
            name: "ТехноСтрой".to_string(),
            contact_person: "Петров И.И.".to_string(),
            email: "info@tehnostroy.ru".to_string(),
            phone: "+7 495 123-45-67".to_string(),
        },
        CompanySummary {
            id: 2,
            name: "ИнноТех".to_string(),
            contact_person: "Смирнова А.А.".to_string(),
            email: "contact@innotech.ru".to_string(),
            phone: "+7 495 987-65-43".to_string(),
        },
        CompanySummary {
            id: 3,
            name: "СтройПроект".to_string(),
            contact_person: "Иванов В.В.".to_string(),
            email: "office@stroyproject.ru".to_string(),
            phone: "+7 495 555-66-77".to_string(),
        },
    ]
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /companies - reads multiplexed on `action`.
async fn get_companies(
    State(state): State<AppState>,
    Query(query): Query<CompaniesQuery>,
) -> impl IntoResponse {
    let repo = CompanyRepository::new((*state.db).clone());

    match query.action.as_deref() {
        Some("companies") => match repo.list().await {
            Ok(rows) => {
                let body: Vec<CompanySummary> =
                    rows.into_iter().map(CompanySummary::from).collect();
                (StatusCode::OK, Json(body)).into_response()
            }
            Err(e) => {
                warn!(error = %e, "Companies query failed, serving fallback list");
                (StatusCode::OK, Json(fallback_companies())).into_response()
            }
        },
        Some("companies-with-stats") => match repo.list_with_stats().await {
            Ok(rows) => {
                let body: Vec<CompanyStatsResponse> = rows
                    .into_iter()
                    .map(|row| CompanyStatsResponse {
                        id: row.company.id,
                        name: row.company.name,
                        contact_person: row.company.contact_person,
                        email: row.company.email,
                        phone: row.company.phone,
                        total_projects: row.stats.total_projects,
                        active_projects: row.stats.active_projects,
                        total_budget: format_amount(row.stats.total_budget),
                        total_profit: format_amount(row.stats.total_profit),
                        pending_payments: format_amount(row.stats.pending_payments),
                    })
                    .collect();
                (StatusCode::OK, Json(body)).into_response()
            }
            Err(e) => {
                error!(error = %e, "Failed to query company stats");
                internal_error()
            }
        },
        Some("company-projects") => {
            let Some(company_id) = query.company_id else {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "company_id is required" })),
                )
                    .into_response();
            };

            match repo.list_projects(company_id).await {
                Ok(rows) => {
                    let body: Vec<CompanyProjectResponse> =
                        rows.into_iter().map(CompanyProjectResponse::from).collect();
                    (StatusCode::OK, Json(body)).into_response()
                }
                Err(e) => {
                    error!(error = %e, company_id, "Failed to query company projects");
                    internal_error()
                }
            }
        }
        _ => invalid_action(),
    }
}

/// POST /companies?action=create-company - creates a company.
async fn post_companies(
    State(state): State<AppState>,
    Query(query): Query<CompaniesQuery>,
    Json(payload): Json<CreateCompanyRequest>,
) -> impl IntoResponse {
    if query.action.as_deref() != Some("create-company") {
        return invalid_action();
    }

    let (Some(name), Some(inn)) = (payload.name, payload.inn) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name and inn are required" })),
        )
            .into_response();
    };

    if name.is_empty() || inn.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name and inn are required" })),
        )
            .into_response();
    }

    let repo = CompanyRepository::new((*state.db).clone());
    let input = CreateCompanyInput {
        name,
        inn,
        kpp: payload.kpp,
        ogrn: payload.ogrn,
        legal_address: payload.legal_address,
        actual_address: payload.actual_address,
        bank_name: payload.bank_name,
        bik: payload.bik,
        correspondent_account: payload.correspondent_account,
        account_number: payload.account_number,
        contact_person: payload.contact_person,
        email: payload.email,
        phone: payload.phone,
    };

    match repo.create(input).await {
        Ok(company) => {
            info!(company_id = company.id, "Company created");
            (
                StatusCode::OK,
                Json(json!({
                    "id": company.id,
                    "message": "Company created successfully"
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create company");
            internal_error()
        }
    }
}
