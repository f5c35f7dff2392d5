//! Payment repository for database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

use crate::entities::{
    payments,
    sea_orm_active_enums::{PaymentStatus, PaymentType},
};

/// Input for creating a payment.
#[derive(Debug, Clone)]
pub struct CreatePaymentInput {
    /// Project the payment is booked against.
    pub project_id: i32,
    /// Contractor being paid; null for income payments.
    pub contractor_id: Option<i32>,
    /// Income or expense.
    pub payment_type: PaymentType,
    /// Payment amount.
    pub amount: Decimal,
    /// Free-form description.
    pub description: String,
    /// Value date of the payment.
    pub payment_date: NaiveDate,
    /// Settlement status.
    pub status: PaymentStatus,
}

/// Payment repository.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    db: DatabaseConnection,
}

impl PaymentRepository {
    /// Creates a new payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreatePaymentInput) -> Result<payments::Model, DbErr> {
        let payment = payments::ActiveModel {
            project_id: Set(input.project_id),
            contractor_id: Set(input.contractor_id),
            payment_type: Set(input.payment_type),
            amount: Set(input.amount),
            description: Set(input.description),
            payment_date: Set(input.payment_date),
            status: Set(input.status),
            ..Default::default()
        };

        payment.insert(&self.db).await
    }
}
