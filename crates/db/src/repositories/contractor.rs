//! Contractor repository for database operations.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{contractors, payments, sea_orm_active_enums::PaymentStatus};

/// Input for creating a contractor.
#[derive(Debug, Clone)]
pub struct CreateContractorInput {
    /// Full name.
    pub name: String,
    /// Trade or discipline.
    pub specialization: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, may stay empty.
    pub phone: String,
    /// Agreed hourly rate.
    pub hourly_rate: Decimal,
}

/// Per-contractor payment tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentTally {
    /// Number of payments referencing the contractor.
    pub count: i64,
    /// Sum of payment amounts over all statuses.
    pub total: Decimal,
    /// Number of payments still pending.
    pub pending: i64,
}

/// A contractor together with earnings aggregates.
#[derive(Debug, Clone)]
pub struct ContractorWithEarnings {
    /// The contractor row.
    pub contractor: contractors::Model,
    /// Count of payments referencing the contractor (the original data
    /// model calls this "total projects").
    pub total_projects: i64,
    /// Sum of payment amounts over all statuses.
    pub total_earned: Decimal,
    /// Count of payments still pending.
    pub pending_payments: i64,
}

/// Contractor repository for CRUD and reporting operations.
#[derive(Debug, Clone)]
pub struct ContractorRepository {
    db: DatabaseConnection,
}

impl ContractorRepository {
    /// Creates a new contractor repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all contractors with their payment aggregates, ordered by
    /// total earned descending.
    ///
    /// # Errors
    ///
    /// Returns an error if any database query fails.
    pub async fn list_with_earnings(&self) -> Result<Vec<ContractorWithEarnings>, DbErr> {
        let contractor_rows = contractors::Entity::find()
            .order_by_asc(contractors::Column::Id)
            .all(&self.db)
            .await?;

        let payment_rows = payments::Entity::find()
            .filter(payments::Column::ContractorId.is_not_null())
            .all(&self.db)
            .await?;

        let tallies = fold_contractor_payments(&payment_rows);

        let mut result: Vec<ContractorWithEarnings> = contractor_rows
            .into_iter()
            .map(|contractor| {
                let tally = tallies.get(&contractor.id).cloned().unwrap_or_default();
                ContractorWithEarnings {
                    contractor,
                    total_projects: tally.count,
                    total_earned: tally.total,
                    pending_payments: tally.pending,
                }
            })
            .collect();

        result.sort_by(|a, b| b.total_earned.cmp(&a.total_earned));

        Ok(result)
    }

    /// Creates a new contractor.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateContractorInput,
    ) -> Result<contractors::Model, DbErr> {
        let contractor = contractors::ActiveModel {
            name: Set(input.name),
            specialization: Set(input.specialization),
            email: Set(input.email),
            phone: Set(input.phone),
            hourly_rate: Set(input.hourly_rate),
            ..Default::default()
        };

        contractor.insert(&self.db).await
    }
}

/// Folds payments into per-contractor tallies. Payments without a
/// contractor reference are skipped.
#[must_use]
pub fn fold_contractor_payments(payment_rows: &[payments::Model]) -> HashMap<i32, PaymentTally> {
    let mut tallies: HashMap<i32, PaymentTally> = HashMap::new();

    for payment in payment_rows {
        let Some(contractor_id) = payment.contractor_id else {
            continue;
        };

        let tally = tallies.entry(contractor_id).or_default();
        tally.count += 1;
        tally.total += payment.amount;
        if payment.status == PaymentStatus::Pending {
            tally.pending += 1;
        }
    }

    tallies
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::sea_orm_active_enums::PaymentType;

    fn mock_payment(
        id: i32,
        contractor_id: Option<i32>,
        amount: Decimal,
        status: PaymentStatus,
    ) -> payments::Model {
        payments::Model {
            id,
            project_id: 1,
            contractor_id,
            payment_type: PaymentType::Expense,
            amount,
            description: String::new(),
            payment_date: chrono::NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            status,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn totals_include_every_status_but_pending_counts_only_pending() {
        let payment_rows = vec![
            mock_payment(1, Some(7), dec!(100), PaymentStatus::Completed),
            mock_payment(2, Some(7), dec!(50), PaymentStatus::Pending),
            mock_payment(3, Some(7), dec!(25), PaymentStatus::Cancelled),
        ];

        let tallies = fold_contractor_payments(&payment_rows);
        let tally = &tallies[&7];

        assert_eq!(tally.count, 3);
        assert_eq!(tally.total, dec!(175));
        assert_eq!(tally.pending, 1);
    }

    #[test]
    fn payments_without_contractor_are_skipped() {
        let payment_rows = vec![
            mock_payment(1, None, dec!(999), PaymentStatus::Pending),
            mock_payment(2, Some(3), dec!(10), PaymentStatus::Completed),
        ];

        let tallies = fold_contractor_payments(&payment_rows);

        assert_eq!(tallies.len(), 1);
        assert_eq!(tallies[&3].total, dec!(10));
    }
}
