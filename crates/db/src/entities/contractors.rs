//! `SeaORM` Entity for the contractors table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An external hourly-paid worker.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "contractors")]
pub struct Model {
    /// Surrogate key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Full name.
    pub name: String,
    /// Trade or discipline.
    pub specialization: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Agreed hourly rate.
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub hourly_rate: Decimal,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Payments made out to this contractor.
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    /// Project assignments.
    #[sea_orm(has_many = "super::project_contractors::Entity")]
    ProjectContractors,
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::project_contractors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectContractors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
