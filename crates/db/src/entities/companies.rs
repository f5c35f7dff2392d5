//! `SeaORM` Entity for the companies table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A client company with Russian legal and banking requisites.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(schema_name = "public", table_name = "companies")]
pub struct Model {
    /// Surrogate key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Legal name.
    pub name: String,
    /// Taxpayer identification number.
    pub inn: String,
    /// Tax registration reason code.
    pub kpp: String,
    /// Primary state registration number.
    pub ogrn: String,
    /// Registered legal address.
    #[sea_orm(column_type = "Text")]
    pub legal_address: String,
    /// Actual office address.
    #[sea_orm(column_type = "Text")]
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
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Projects commissioned by this company.
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
    /// Estimates drafted for this company.
    #[sea_orm(has_many = "super::estimates::Entity")]
    Estimates,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::estimates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estimates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
