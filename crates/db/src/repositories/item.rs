//! Catalog item repository for database operations.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use crate::entities::{items, sea_orm_active_enums::ItemType};

/// Input for creating a catalog item.
#[derive(Debug, Clone)]
pub struct CreateItemInput {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Material or service.
    pub item_type: ItemType,
    /// Unit of measure.
    pub unit: String,
    /// Default price per unit, if one is set.
    pub default_price: Option<Decimal>,
}

/// Catalog item repository.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    db: DatabaseConnection,
}

impl ItemRepository {
    /// Creates a new item repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all catalog items ordered by type, then name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<items::Model>, DbErr> {
        items::Entity::find()
            .order_by_asc(items::Column::ItemType)
            .order_by_asc(items::Column::Name)
            .all(&self.db)
            .await
    }

    /// Creates a new catalog item.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateItemInput) -> Result<items::Model, DbErr> {
        let item = items::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            item_type: Set(input.item_type),
            unit: Set(input.unit),
            default_price: Set(input.default_price),
            ..Default::default()
        };

        item.insert(&self.db).await
    }
}
