//! `SeaORM` Entity for the items catalog table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ItemType;

/// A catalog entry (material or service) priced per unit.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "items")]
pub struct Model {
    /// Surrogate key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Material or service.
    #[sea_orm(column_name = "type")]
    pub item_type: ItemType,
    /// Unit of measure (piece, hour, square meter, ...).
    pub unit: String,
    /// Default price per unit, if one is set.
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub default_price: Option<Decimal>,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Project line items referencing this catalog entry.
    #[sea_orm(has_many = "super::project_items::Entity")]
    ProjectItems,
    /// Estimate line items referencing this catalog entry.
    #[sea_orm(has_many = "super::estimate_items::Entity")]
    EstimateItems,
}

impl Related<super::project_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectItems.def()
    }
}

impl Related<super::estimate_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EstimateItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
