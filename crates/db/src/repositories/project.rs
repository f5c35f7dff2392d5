//! Project repository for database operations.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::entities::{
    companies, estimates, payments, project_contractors, project_items, projects,
    sea_orm_active_enums::ProjectStatus,
};

/// Error types for project creation.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// The referenced company does not exist.
    #[error("Company not found: {0}")]
    CompanyNotFound(i32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A line item to attach to a new project.
#[derive(Debug, Clone)]
pub struct ProjectItemInput {
    /// Referenced catalog item.
    pub item_id: i32,
    /// Quantity in the item's unit of measure.
    pub quantity: Decimal,
    /// Agreed price per unit.
    pub unit_price: Decimal,
}

/// A contractor assignment to attach to a new project.
#[derive(Debug, Clone)]
pub struct ProjectContractorInput {
    /// Assigned contractor.
    pub contractor_id: i32,
    /// Role on this project.
    pub role: String,
    /// Hourly rate agreed for this project.
    pub hourly_rate: Decimal,
}

/// Input for creating a project with its line rows.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    /// Commissioning company.
    pub company_id: i32,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Agreed budget.
    pub budget: Decimal,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Line items.
    pub items: Vec<ProjectItemInput>,
    /// Contractor assignments.
    pub contractors: Vec<ProjectContractorInput>,
}

/// A project row joined with reference names and payment aggregates.
#[derive(Debug, Clone)]
pub struct ProjectWithFinancials {
    /// The project row.
    pub project: projects::Model,
    /// Name of the commissioning company, if it still exists.
    pub company_name: Option<String>,
    /// Title of the source estimate, if any.
    pub estimate_title: Option<String>,
    /// Number of payments booked against the project.
    pub payment_count: i64,
    /// Sum of payment amounts booked against the project.
    pub total_paid: Decimal,
}

/// Project repository for CRUD and reporting operations.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: DatabaseConnection,
}

impl ProjectRepository {
    /// Creates a new project repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all projects with company name, estimate title, and payment
    /// aggregates, ordered by creation time descending.
    ///
    /// # Errors
    ///
    /// Returns an error if any database query fails.
    pub async fn list_with_financials(&self) -> Result<Vec<ProjectWithFinancials>, DbErr> {
        let project_rows = projects::Entity::find()
            .order_by_desc(projects::Column::CreatedAt)
            .all(&self.db)
            .await?;

        if project_rows.is_empty() {
            return Ok(vec![]);
        }

        let company_ids: Vec<i32> = project_rows.iter().map(|p| p.company_id).collect();
        let company_names: HashMap<i32, String> = companies::Entity::find()
            .filter(companies::Column::Id.is_in(company_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let estimate_ids: Vec<i32> =
            project_rows.iter().filter_map(|p| p.estimate_id).collect();
        let estimate_titles: HashMap<i32, String> = if estimate_ids.is_empty() {
            HashMap::new()
        } else {
            estimates::Entity::find()
                .filter(estimates::Column::Id.is_in(estimate_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|e| (e.id, e.title))
                .collect()
        };

        let project_ids: Vec<i32> = project_rows.iter().map(|p| p.id).collect();
        let payment_rows = payments::Entity::find()
            .filter(payments::Column::ProjectId.is_in(project_ids))
            .all(&self.db)
            .await?;

        let totals = fold_payment_totals(&payment_rows);

        Ok(project_rows
            .into_iter()
            .map(|project| {
                let (payment_count, total_paid) =
                    totals.get(&project.id).copied().unwrap_or((0, Decimal::ZERO));
                ProjectWithFinancials {
                    company_name: company_names.get(&project.company_id).cloned(),
                    estimate_title: project
                        .estimate_id
                        .and_then(|id| estimate_titles.get(&id).cloned()),
                    payment_count,
                    total_paid,
                    project,
                }
            })
            .collect())
    }

    /// Creates a project together with its item and contractor line rows
    /// in one transaction. A failed check or insert rolls everything back.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::CompanyNotFound`] if the company does not
    /// exist, or a database error if any insert fails; no rows persist in
    /// either case.
    pub async fn create_with_lines(
        &self,
        input: CreateProjectInput,
    ) -> Result<projects::Model, ProjectError> {
        let txn = self.db.begin().await?;

        companies::Entity::find_by_id(input.company_id)
            .one(&txn)
            .await?
            .ok_or(ProjectError::CompanyNotFound(input.company_id))?;

        let project = projects::ActiveModel {
            company_id: Set(input.company_id),
            title: Set(input.title),
            description: Set(input.description),
            budget: Set(input.budget),
            status: Set(input.status),
            start_date: Set(input.start_date),
            ..Default::default()
        };

        let project = project.insert(&txn).await?;

        for item in input.items {
            let line = project_items::ActiveModel {
                project_id: Set(project.id),
                item_id: Set(item.item_id),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                ..Default::default()
            };
            line.insert(&txn).await?;
        }

        for contractor in input.contractors {
            let line = project_contractors::ActiveModel {
                project_id: Set(project.id),
                contractor_id: Set(contractor.contractor_id),
                role: Set(contractor.role),
                hourly_rate: Set(contractor.hourly_rate),
                ..Default::default()
            };
            line.insert(&txn).await?;
        }

        txn.commit().await?;

        Ok(project)
    }
}

/// Folds payments into per-project `(count, total)` pairs.
#[must_use]
pub fn fold_payment_totals(payment_rows: &[payments::Model]) -> HashMap<i32, (i64, Decimal)> {
    let mut totals: HashMap<i32, (i64, Decimal)> = HashMap::new();

    for payment in payment_rows {
        let entry = totals.entry(payment.project_id).or_default();
        entry.0 += 1;
        entry.1 += payment.amount;
    }

    totals
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::sea_orm_active_enums::{PaymentStatus, PaymentType};

    fn mock_payment(id: i32, project_id: i32, amount: Decimal) -> payments::Model {
        payments::Model {
            id,
            project_id,
            contractor_id: None,
            payment_type: PaymentType::Income,
            amount,
            description: String::new(),
            payment_date: NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
            status: PaymentStatus::Completed,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn counts_and_sums_group_by_project() {
        let payment_rows = vec![
            mock_payment(1, 1, dec!(100)),
            mock_payment(2, 1, dec!(250.75)),
            mock_payment(3, 2, dec!(10)),
        ];

        let totals = fold_payment_totals(&payment_rows);

        assert_eq!(totals[&1], (2, dec!(350.75)));
        assert_eq!(totals[&2], (1, dec!(10)));
        assert!(!totals.contains_key(&3));
    }

    #[test]
    fn empty_input_gives_empty_totals() {
        assert!(fold_payment_totals(&[]).is_empty());
    }
}
