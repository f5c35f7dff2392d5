//! Estimate repository for database operations.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::entities::{
    companies, estimate_items, estimates, projects, sea_orm_active_enums::EstimateStatus,
};

/// Error types for estimate creation.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// The referenced company does not exist.
    #[error("Company not found: {0}")]
    CompanyNotFound(i32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A line item to attach to a new estimate.
#[derive(Debug, Clone)]
pub struct EstimateItemInput {
    /// Referenced catalog item.
    pub item_id: i32,
    /// Quantity in the item's unit of measure.
    pub quantity: Decimal,
    /// Quoted price per unit.
    pub unit_price: Decimal,
}

/// Input for creating an estimate with its line rows.
#[derive(Debug, Clone)]
pub struct CreateEstimateInput {
    /// Company the estimate is drafted for.
    pub company_id: i32,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Estimated total cost, when already priced.
    pub estimated_cost: Option<Decimal>,
    /// Estimated effort in hours.
    pub estimated_hours: Decimal,
    /// Review status.
    pub status: EstimateStatus,
    /// Line items.
    pub items: Vec<EstimateItemInput>,
}

/// An estimate row joined with its company name and conversion flag.
#[derive(Debug, Clone)]
pub struct EstimateWithCompany {
    /// The estimate row.
    pub estimate: estimates::Model,
    /// Name of the company, if it still exists.
    pub company_name: Option<String>,
    /// True iff at least one project references this estimate.
    pub converted_to_project: bool,
}

/// Estimate repository for CRUD and reporting operations.
#[derive(Debug, Clone)]
pub struct EstimateRepository {
    db: DatabaseConnection,
}

impl EstimateRepository {
    /// Creates a new estimate repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all estimates with company names and conversion flags,
    /// ordered by creation time descending.
    ///
    /// # Errors
    ///
    /// Returns an error if any database query fails.
    pub async fn list_with_company(&self) -> Result<Vec<EstimateWithCompany>, DbErr> {
        let estimate_rows = estimates::Entity::find()
            .order_by_desc(estimates::Column::CreatedAt)
            .all(&self.db)
            .await?;

        if estimate_rows.is_empty() {
            return Ok(vec![]);
        }

        let company_ids: Vec<i32> = estimate_rows.iter().map(|e| e.company_id).collect();
        let company_names: HashMap<i32, String> = companies::Entity::find()
            .filter(companies::Column::Id.is_in(company_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let converted_rows = projects::Entity::find()
            .filter(projects::Column::EstimateId.is_not_null())
            .all(&self.db)
            .await?;
        let converted = converted_estimate_ids(&converted_rows);

        Ok(estimate_rows
            .into_iter()
            .map(|estimate| EstimateWithCompany {
                company_name: company_names.get(&estimate.company_id).cloned(),
                converted_to_project: converted.contains(&estimate.id),
                estimate,
            })
            .collect())
    }

    /// Creates an estimate together with its line rows in one
    /// transaction. A failed check or insert rolls everything back.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::CompanyNotFound`] if the company does not
    /// exist, or a database error if any insert fails; no rows persist in
    /// either case.
    pub async fn create_with_items(
        &self,
        input: CreateEstimateInput,
    ) -> Result<estimates::Model, EstimateError> {
        let txn = self.db.begin().await?;

        companies::Entity::find_by_id(input.company_id)
            .one(&txn)
            .await?
            .ok_or(EstimateError::CompanyNotFound(input.company_id))?;

        let estimate = estimates::ActiveModel {
            company_id: Set(input.company_id),
            title: Set(input.title),
            description: Set(input.description),
            estimated_cost: Set(input.estimated_cost),
            estimated_hours: Set(input.estimated_hours),
            status: Set(input.status),
            ..Default::default()
        };

        let estimate = estimate.insert(&txn).await?;

        for item in input.items {
            let line = estimate_items::ActiveModel {
                estimate_id: Set(estimate.id),
                item_id: Set(item.item_id),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                ..Default::default()
            };
            line.insert(&txn).await?;
        }

        txn.commit().await?;

        Ok(estimate)
    }
}

/// Collects the estimate ids referenced by at least one project.
#[must_use]
pub fn converted_estimate_ids(project_rows: &[projects::Model]) -> HashSet<i32> {
    project_rows.iter().filter_map(|p| p.estimate_id).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::sea_orm_active_enums::ProjectStatus;

    fn mock_project(id: i32, estimate_id: Option<i32>) -> projects::Model {
        projects::Model {
            id,
            company_id: 1,
            estimate_id,
            title: format!("Project {id}"),
            description: String::new(),
            budget: dec!(0),
            actual_cost: dec!(0),
            status: ProjectStatus::Planning,
            start_date: None,
            end_date: None,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn only_referenced_estimates_count_as_converted() {
        let project_rows = vec![
            mock_project(1, Some(5)),
            mock_project(2, None),
            mock_project(3, Some(5)),
            mock_project(4, Some(9)),
        ];

        let converted = converted_estimate_ids(&project_rows);

        assert_eq!(converted.len(), 2);
        assert!(converted.contains(&5));
        assert!(converted.contains(&9));
        assert!(!converted.contains(&1));
    }
}
