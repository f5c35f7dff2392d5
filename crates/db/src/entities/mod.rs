//! `SeaORM` entity definitions for the business-management schema.
//!
//! All entities address the `public` schema explicitly so every query is
//! schema-qualified the same way.

pub mod companies;
pub mod contractors;
pub mod estimate_items;
pub mod estimates;
pub mod items;
pub mod payments;
pub mod project_contractors;
pub mod project_items;
pub mod projects;
pub mod sea_orm_active_enums;
