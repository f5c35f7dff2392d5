//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    CompanyRepository, CompanyStats, CompanyWithStats, ContractorRepository,
    ContractorWithEarnings, CreateCompanyInput, CreateContractorInput, CreateEstimateInput,
    CreateItemInput, CreatePaymentInput, CreateProjectInput, DashboardRepository, EstimateError,
    EstimateItemInput, EstimateRepository, EstimateSummary, EstimateWithCompany, ItemRepository,
    MonthlyTotal, PaymentRepository, PaymentSummary, ProjectContractorInput, ProjectError,
    ProjectItemInput, ProjectRepository, ProjectSummary, ProjectWithFinancials,
};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Establishes a pooled connection with explicit pool sizing.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with_pool(
    database_url: &str,
    max_connections: u32,
    min_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(max_connections)
        .min_connections(min_connections);
    Database::connect(options).await
}
