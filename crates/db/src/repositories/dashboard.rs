//! Dashboard repository for the aggregate statistics endpoint.
//!
//! Each query fetches rows through bound parameters and folds them with
//! `Decimal` arithmetic; the folds are pure functions so window and
//! bucketing behavior are testable without a database.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::entities::{
    contractors, estimates, payments, projects,
    sea_orm_active_enums::{EstimateStatus, PaymentStatus, ProjectStatus},
};

/// Aggregate project counters and money totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Number of projects.
    pub total_projects: i64,
    /// Number of projects in progress.
    pub active_projects: i64,
    /// Number of completed projects.
    pub completed_projects: i64,
    /// Sum of budgets.
    pub total_budget: Decimal,
    /// Sum of actual costs.
    pub total_spent: Decimal,
    /// Sum of `budget - actual_cost`.
    pub total_profit: Decimal,
}

/// Aggregate estimate counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateSummary {
    /// Number of estimates.
    pub total_estimates: i64,
    /// Number still in draft.
    pub draft_estimates: i64,
    /// Number approved.
    pub approved_estimates: i64,
    /// Sum of estimated costs, absent costs counted as zero.
    pub total_estimated: Decimal,
}

/// Aggregate payment counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentSummary {
    /// Sum of payment amounts.
    pub total_payments: Decimal,
    /// Number of payments.
    pub payment_count: i64,
    /// Number of payments still pending.
    pub pending_payments: i64,
}

/// One month bucket of the payment trend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// First day of the month.
    pub month: NaiveDate,
    /// Sum of payment amounts dated in that month.
    pub total: Decimal,
}

/// Dashboard repository for aggregate statistics.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Queries project counters and money totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_project_summary(&self) -> Result<ProjectSummary, DbErr> {
        let project_rows = projects::Entity::find().all(&self.db).await?;
        Ok(summarize_projects(&project_rows))
    }

    /// Queries the number of contractors.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_contractor_count(&self) -> Result<i64, DbErr> {
        let count = contractors::Entity::find().count(&self.db).await?;
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    /// Queries estimate counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_estimate_summary(&self) -> Result<EstimateSummary, DbErr> {
        let estimate_rows = estimates::Entity::find().all(&self.db).await?;
        Ok(summarize_estimates(&estimate_rows))
    }

    /// Queries payment counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_payment_summary(&self) -> Result<PaymentSummary, DbErr> {
        let payment_rows = payments::Entity::find().all(&self.db).await?;
        Ok(summarize_payments(&payment_rows))
    }

    /// Queries the most recently created projects.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_recent_projects(&self, limit: u64) -> Result<Vec<projects::Model>, DbErr> {
        projects::Entity::find()
            .order_by_desc(projects::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
    }

    /// Queries month-bucketed payment totals for the trailing six months
    /// ending at `as_of`, ascending by month.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_monthly_payments(
        &self,
        as_of: NaiveDate,
    ) -> Result<Vec<MonthlyTotal>, DbErr> {
        let window_start = trailing_window_start(as_of);

        let payment_rows = payments::Entity::find()
            .filter(payments::Column::PaymentDate.gte(window_start))
            .filter(payments::Column::PaymentDate.lte(as_of))
            .all(&self.db)
            .await?;

        Ok(fold_monthly_totals(&payment_rows))
    }
}

/// Truncates a date to the first day of its month.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the oldest month in the trailing six-month window ending
/// at `as_of`; the window spans the current month and the five before it.
#[must_use]
pub fn trailing_window_start(as_of: NaiveDate) -> NaiveDate {
    month_start(as_of)
        .checked_sub_months(Months::new(5))
        .unwrap_or(as_of)
}

/// Folds payments into per-month totals, ascending by month.
#[must_use]
pub fn fold_monthly_totals(payment_rows: &[payments::Model]) -> Vec<MonthlyTotal> {
    let mut totals: std::collections::BTreeMap<NaiveDate, Decimal> =
        std::collections::BTreeMap::new();

    for payment in payment_rows {
        *totals.entry(month_start(payment.payment_date)).or_default() += payment.amount;
    }

    totals
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Folds project rows into summary counters.
#[must_use]
pub fn summarize_projects(project_rows: &[projects::Model]) -> ProjectSummary {
    let mut summary = ProjectSummary::default();

    for project in project_rows {
        summary.total_projects += 1;
        match project.status {
            ProjectStatus::InProgress => summary.active_projects += 1,
            ProjectStatus::Completed => summary.completed_projects += 1,
            ProjectStatus::Planning | ProjectStatus::Cancelled => {}
        }
        summary.total_budget += project.budget;
        summary.total_spent += project.actual_cost;
        summary.total_profit += project.budget - project.actual_cost;
    }

    summary
}

/// Folds estimate rows into summary counters.
#[must_use]
pub fn summarize_estimates(estimate_rows: &[estimates::Model]) -> EstimateSummary {
    let mut summary = EstimateSummary::default();

    for estimate in estimate_rows {
        summary.total_estimates += 1;
        match estimate.status {
            EstimateStatus::Draft => summary.draft_estimates += 1,
            EstimateStatus::Approved => summary.approved_estimates += 1,
            EstimateStatus::InReview | EstimateStatus::Rejected => {}
        }
        summary.total_estimated += estimate.estimated_cost.unwrap_or_default();
    }

    summary
}

/// Folds payment rows into summary counters.
#[must_use]
pub fn summarize_payments(payment_rows: &[payments::Model]) -> PaymentSummary {
    let mut summary = PaymentSummary::default();

    for payment in payment_rows {
        summary.total_payments += payment.amount;
        summary.payment_count += 1;
        if payment.status == PaymentStatus::Pending {
            summary.pending_payments += 1;
        }
    }

    summary
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
