//! Company repository for database operations.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{companies, payments, projects, sea_orm_active_enums::PaymentStatus};

/// Input for creating a company. `name` and `inn` are validated by the
/// caller; every other requisite may stay empty.
#[derive(Debug, Clone, Default)]
pub struct CreateCompanyInput {
    /// Legal name.
    pub name: String,
    /// Taxpayer identification number.
    pub inn: String,
    /// Tax registration reason code.
    pub kpp: String,
    /// Primary state registration number.
    pub ogrn: String,
    /// Registered legal address.
    pub legal_address: String,
    /// Actual office address.
    pub actual_address: String,
    /// Bank name.
    pub bank_name: String,
    /// Bank identification code.
    pub bik: String,
    /// Correspondent account number.
    pub correspondent_account: String,
    /// Settlement account number.
    pub account_number: String,
    /// Contact person full name.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

/// Query-time aggregates for one company.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyStats {
    /// Number of projects commissioned by the company.
    pub total_projects: i64,
    /// Number of projects currently in progress.
    pub active_projects: i64,
    /// Sum of project budgets.
    pub total_budget: Decimal,
    /// Sum of `budget - actual_cost` over the company's projects.
    pub total_profit: Decimal,
    /// Sum of pending payment amounts across the company's projects.
    pub pending_payments: Decimal,
}

/// A company together with its aggregates.
#[derive(Debug, Clone)]
pub struct CompanyWithStats {
    /// The company row.
    pub company: companies::Model,
    /// Aggregates; all zero for a company with no projects.
    pub stats: CompanyStats,
}

/// Company repository for CRUD and reporting operations.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: DatabaseConnection,
}

impl CompanyRepository {
    /// Creates a new company repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all companies ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<companies::Model>, DbErr> {
        companies::Entity::find()
            .order_by_asc(companies::Column::Name)
            .all(&self.db)
            .await
    }

    /// Lists all companies with project and payment aggregates, ordered by
    /// name. Companies without projects report all-zero stats.
    ///
    /// # Errors
    ///
    /// Returns an error if any database query fails.
    pub async fn list_with_stats(&self) -> Result<Vec<CompanyWithStats>, DbErr> {
        let company_rows = self.list().await?;

        let project_rows = projects::Entity::find().all(&self.db).await?;

        let pending_rows = payments::Entity::find()
            .filter(payments::Column::Status.eq(PaymentStatus::Pending))
            .all(&self.db)
            .await?;

        let stats_by_company = fold_company_stats(&project_rows, &pending_rows);

        Ok(company_rows
            .into_iter()
            .map(|company| {
                let stats = stats_by_company.get(&company.id).cloned().unwrap_or_default();
                CompanyWithStats { company, stats }
            })
            .collect())
    }

    /// Lists one company's projects ordered by start date descending, rows
    /// without a start date last.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_projects(&self, company_id: i32) -> Result<Vec<projects::Model>, DbErr> {
        projects::Entity::find()
            .filter(projects::Column::CompanyId.eq(company_id))
            .order_by_with_nulls(projects::Column::StartDate, Order::Desc, NullOrdering::Last)
            .all(&self.db)
            .await
    }

    /// Creates a new company.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateCompanyInput) -> Result<companies::Model, DbErr> {
        let company = companies::ActiveModel {
            name: Set(input.name),
            inn: Set(input.inn),
            kpp: Set(input.kpp),
            ogrn: Set(input.ogrn),
            legal_address: Set(input.legal_address),
            actual_address: Set(input.actual_address),
            bank_name: Set(input.bank_name),
            bik: Set(input.bik),
            correspondent_account: Set(input.correspondent_account),
            account_number: Set(input.account_number),
            contact_person: Set(input.contact_person),
            email: Set(input.email),
            phone: Set(input.phone),
            ..Default::default()
        };

        company.insert(&self.db).await
    }
}

/// Folds projects and pending payments into per-company aggregates.
///
/// `pending` must already be filtered to pending status; amounts are
/// attributed to the owning project's company.
#[must_use]
pub fn fold_company_stats(
    project_rows: &[projects::Model],
    pending: &[payments::Model],
) -> HashMap<i32, CompanyStats> {
    use crate::entities::sea_orm_active_enums::ProjectStatus;

    let mut stats: HashMap<i32, CompanyStats> = HashMap::new();
    let mut company_by_project: HashMap<i32, i32> = HashMap::new();

    for project in project_rows {
        company_by_project.insert(project.id, project.company_id);

        let entry = stats.entry(project.company_id).or_default();
        entry.total_projects += 1;
        if project.status == ProjectStatus::InProgress {
            entry.active_projects += 1;
        }
        entry.total_budget += project.budget;
        entry.total_profit += project.budget - project.actual_cost;
    }

    for payment in pending {
        if let Some(company_id) = company_by_project.get(&payment.project_id) {
            stats.entry(*company_id).or_default().pending_payments += payment.amount;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::sea_orm_active_enums::{PaymentType, ProjectStatus};

    fn mock_project(
        id: i32,
        company_id: i32,
        status: ProjectStatus,
        budget: Decimal,
        actual_cost: Decimal,
    ) -> projects::Model {
        projects::Model {
            id,
            company_id,
            estimate_id: None,
            title: format!("Project {id}"),
            description: String::new(),
            budget,
            actual_cost,
            status,
            start_date: None,
            end_date: None,
            created_at: Utc::now().into(),
        }
    }

    fn mock_pending_payment(id: i32, project_id: i32, amount: Decimal) -> payments::Model {
        payments::Model {
            id,
            project_id,
            contractor_id: None,
            payment_type: PaymentType::Expense,
            amount,
            description: String::new(),
            payment_date: chrono::NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            status: super::PaymentStatus::Pending,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn company_without_projects_has_no_entry() {
        let stats = fold_company_stats(&[], &[]);
        assert!(stats.is_empty());
    }

    #[test]
    fn budgets_and_profit_accumulate_per_company() {
        let project_rows = vec![
            mock_project(1, 10, ProjectStatus::InProgress, dec!(1000), dec!(400)),
            mock_project(2, 10, ProjectStatus::Completed, dec!(500), dec!(550)),
            mock_project(3, 20, ProjectStatus::Planning, dec!(200), dec!(0)),
        ];

        let stats = fold_company_stats(&project_rows, &[]);

        let first = &stats[&10];
        assert_eq!(first.total_projects, 2);
        assert_eq!(first.active_projects, 1);
        assert_eq!(first.total_budget, dec!(1500));
        assert_eq!(first.total_profit, dec!(550));

        let second = &stats[&20];
        assert_eq!(second.total_projects, 1);
        assert_eq!(second.active_projects, 0);
        assert_eq!(second.total_profit, dec!(200));
    }

    #[test]
    fn pending_payments_attributed_through_project() {
        let project_rows = vec![
            mock_project(1, 10, ProjectStatus::InProgress, dec!(100), dec!(0)),
            mock_project(2, 20, ProjectStatus::InProgress, dec!(100), dec!(0)),
        ];
        let pending = vec![
            mock_pending_payment(1, 1, dec!(30)),
            mock_pending_payment(2, 1, dec!(12.50)),
            mock_pending_payment(3, 2, dec!(5)),
        ];

        let stats = fold_company_stats(&project_rows, &pending);

        assert_eq!(stats[&10].pending_payments, dec!(42.50));
        assert_eq!(stats[&20].pending_payments, dec!(5));
    }

    #[test]
    fn payment_for_unknown_project_is_ignored() {
        let project_rows = vec![mock_project(1, 10, ProjectStatus::Planning, dec!(1), dec!(0))];
        let pending = vec![mock_pending_payment(1, 99, dec!(1000))];

        let stats = fold_company_stats(&project_rows, &pending);
        assert_eq!(stats[&10].pending_payments, dec!(0));
    }
}
