//! `SeaORM` Entity for the project_contractors association table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A contractor assignment on a project with a role and the hourly rate
/// agreed for this project.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "project_contractors")]
pub struct Model {
    /// Surrogate key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning project.
    pub project_id: i32,
    /// Assigned contractor.
    pub contractor_id: i32,
    /// Role on this project.
    pub role: String,
    /// Hourly rate agreed for this project.
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub hourly_rate: Decimal,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning project.
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id"
    )]
    Projects,
    /// Assigned contractor.
    #[sea_orm(
        belongs_to = "super::contractors::Entity",
        from = "Column::ContractorId",
        to = "super::contractors::Column::Id"
    )]
    Contractors,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::contractors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contractors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
