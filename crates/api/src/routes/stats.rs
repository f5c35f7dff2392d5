//! Dashboard statistics routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;

use crate::AppState;
use crate::routes::internal_error;
use podryad_db::DashboardRepository;
use podryad_db::entities::sea_orm_active_enums::ProjectStatus;
use podryad_shared::format_amount;

/// Number of projects shown in the recent-projects panel.
const RECENT_PROJECTS_LIMIT: u64 = 5;

/// Creates the stats routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

// ============================================================================
// Response Types
// ============================================================================

/// Full dashboard payload with fixed top-level keys.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Project counters and money totals.
    pub projects: ProjectStatsResponse,
    /// Contractor counters.
    pub contractors: ContractorStatsResponse,
    /// Estimate counters.
    pub estimates: EstimateStatsResponse,
    /// Payment counters.
    pub payments: PaymentStatsResponse,
    /// The five most recently created projects.
    pub recent_projects: Vec<RecentProjectResponse>,
    /// Month-bucketed payment totals for the trailing six months.
    pub monthly_payments: Vec<MonthlyPaymentResponse>,
}

/// Project counters and money totals.
#[derive(Debug, Serialize)]
pub struct ProjectStatsResponse {
    /// Number of projects.
    pub total_projects: i64,
    /// Number of projects in progress.
    pub active_projects: i64,
    /// Number of completed projects.
    pub completed_projects: i64,
    /// Sum of budgets.
    pub total_budget: String,
    /// Sum of actual costs.
    pub total_spent: String,
    /// Sum of derived profits.
    pub total_profit: String,
}

/// Contractor counters.
#[derive(Debug, Serialize)]
pub struct ContractorStatsResponse {
    /// Number of contractors.
    pub total_contractors: i64,
}

/// Estimate counters.
#[derive(Debug, Serialize)]
pub struct EstimateStatsResponse {
    /// Number of estimates.
    pub total_estimates: i64,
    /// Number still in draft.
    pub draft_estimates: i64,
    /// Number approved.
    pub approved_estimates: i64,
    /// Sum of estimated costs.
    pub total_estimated: String,
}

/// Payment counters.
#[derive(Debug, Serialize)]
pub struct PaymentStatsResponse {
    /// Sum of payment amounts.
    pub total_payments: String,
    /// Number of payments.
    pub payment_count: i64,
    /// Number of payments still pending.
    pub pending_payments: i64,
}

/// One recently created project.
#[derive(Debug, Serialize)]
pub struct RecentProjectResponse {
    /// Project title.
    pub title: String,
    /// Agreed budget.
    pub budget: String,
    /// Cost accumulated so far.
    pub actual_cost: String,
    /// Derived profit (budget - actual cost).
    pub profit: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
}

/// One month bucket of the payment trend. The total is a JSON number for
/// direct charting.
#[derive(Debug, Serialize)]
pub struct MonthlyPaymentResponse {
    /// First day of the month.
    pub month: NaiveDate,
    /// Sum of payment amounts dated in that month.
    pub total: f64,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /stats - aggregate dashboard statistics.
#[allow(clippy::too_many_lines)]
async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let repo = DashboardRepository::new((*state.db).clone());

    let project_summary = match repo.query_project_summary().await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Failed to query project summary");
            return internal_error();
        }
    };

    let contractor_count = match repo.query_contractor_count().await {
        Ok(count) => count,
        Err(e) => {
            error!(error = %e, "Failed to query contractor count");
            return internal_error();
        }
    };

    let estimate_summary = match repo.query_estimate_summary().await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Failed to query estimate summary");
            return internal_error();
        }
    };

    let payment_summary = match repo.query_payment_summary().await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Failed to query payment summary");
            return internal_error();
        }
    };

    let recent = match repo.query_recent_projects(RECENT_PROJECTS_LIMIT).await {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Failed to query recent projects");
            return internal_error();
        }
    };

    let today = chrono::Utc::now().date_naive();
    let monthly = match repo.query_monthly_payments(today).await {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Failed to query monthly payments");
            return internal_error();
        }
    };

    let response = StatsResponse {
        projects: ProjectStatsResponse {
            total_projects: project_summary.total_projects,
            active_projects: project_summary.active_projects,
            completed_projects: project_summary.completed_projects,
            total_budget: format_amount(project_summary.total_budget),
            total_spent: format_amount(project_summary.total_spent),
            total_profit: format_amount(project_summary.total_profit),
        },
        contractors: ContractorStatsResponse {
            total_contractors: contractor_count,
        },
        estimates: EstimateStatsResponse {
            total_estimates: estimate_summary.total_estimates,
            draft_estimates: estimate_summary.draft_estimates,
            approved_estimates: estimate_summary.approved_estimates,
            total_estimated: format_amount(estimate_summary.total_estimated),
        },
        payments: PaymentStatsResponse {
            total_payments: format_amount(payment_summary.total_payments),
            payment_count: payment_summary.payment_count,
            pending_payments: payment_summary.pending_payments,
        },
        recent_projects: recent
            .into_iter()
            .map(|project| RecentProjectResponse {
                title: project.title,
                budget: format_amount(project.budget),
                actual_cost: format_amount(project.actual_cost),
                profit: format_amount(project.budget - project.actual_cost),
                status: project.status,
            })
            .collect(),
        monthly_payments: monthly
            .into_iter()
            .map(|bucket| MonthlyPaymentResponse {
                month: bucket.month,
                total: bucket.total.to_string().parse::<f64>().unwrap_or(0.0),
            })
            .collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
