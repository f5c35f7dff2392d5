//! `SeaORM` Entity for the projects table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ProjectStatus;

/// A committed body of work with a budget and an accumulated actual cost.
/// Profit is always derived as `budget - actual_cost` at query time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "projects")]
pub struct Model {
    /// Surrogate key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Commissioning company.
    pub company_id: i32,
    /// Estimate this project was converted from, if any.
    pub estimate_id: Option<i32>,
    /// Short title.
    pub title: String,
    /// Free-form description.
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Agreed budget.
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub budget: Decimal,
    /// Cost accumulated so far.
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub actual_cost: Decimal,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Planned or actual start date.
    pub start_date: Option<Date>,
    /// Planned or actual end date.
    pub end_date: Option<Date>,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Commissioning company.
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Companies,
    /// Source estimate.
    #[sea_orm(
        belongs_to = "super::estimates::Entity",
        from = "Column::EstimateId",
        to = "super::estimates::Column::Id"
    )]
    Estimates,
    /// Payments booked against this project.
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    /// Line items.
    #[sea_orm(has_many = "super::project_items::Entity")]
    ProjectItems,
    /// Contractor assignments.
    #[sea_orm(has_many = "super::project_contractors::Entity")]
    ProjectContractors,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::estimates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estimates.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::project_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectItems.def()
    }
}

impl Related<super::project_contractors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectContractors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
