//! `SeaORM` Entity for the estimates table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::EstimateStatus;

/// A draft costing proposal for a company, optionally converted into a
/// project later.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "estimates")]
pub struct Model {
    /// Surrogate key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Company the estimate was drafted for.
    pub company_id: i32,
    /// Short title.
    pub title: String,
    /// Free-form description.
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Estimated total cost, when priced.
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub estimated_cost: Option<Decimal>,
    /// Estimated effort in hours.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub estimated_hours: Decimal,
    /// Review status.
    pub status: EstimateStatus,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning company.
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Companies,
    /// Projects converted from this estimate.
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
    /// Line items.
    #[sea_orm(has_many = "super::estimate_items::Entity")]
    EstimateItems,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::estimate_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EstimateItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
