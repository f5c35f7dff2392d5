//! `SeaORM` active enums backing the native Postgres enum columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_status")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Not started yet.
    #[sea_orm(string_value = "planning")]
    Planning,
    /// Work underway. This is the "active" status in every aggregate.
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Delivered.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Abandoned.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Review status of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "estimate_status")]
#[serde(rename_all = "snake_case")]
pub enum EstimateStatus {
    /// Being drafted.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Sent to the company for review.
    #[sea_orm(string_value = "in_review")]
    InReview,
    /// Accepted by the company.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Declined by the company.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Settlement status of a payment.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_status")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting settlement.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Settled.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Will never settle.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Direction of a payment.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_type")]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Money received from a company.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money paid out, typically to a contractor.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Kind of catalog item.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "item_type")]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Physical material with a unit price.
    #[sea_orm(string_value = "material")]
    Material,
    /// Billable service.
    #[sea_orm(string_value = "service")]
    Service,
}
