//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Aggregates are computed by fetching rows through bound
//! parameters and folding in Rust with `Decimal`, so the folds stay pure
//! and testable.

pub mod company;
pub mod contractor;
pub mod dashboard;
pub mod estimate;
pub mod item;
pub mod payment;
pub mod project;

pub use company::{CompanyRepository, CompanyStats, CompanyWithStats, CreateCompanyInput};
pub use contractor::{ContractorRepository, ContractorWithEarnings, CreateContractorInput};
pub use dashboard::{
    DashboardRepository, EstimateSummary, MonthlyTotal, PaymentSummary, ProjectSummary,
};
pub use estimate::{
    CreateEstimateInput, EstimateError, EstimateItemInput, EstimateRepository,
    EstimateWithCompany,
};
pub use item::{CreateItemInput, ItemRepository};
pub use payment::{CreatePaymentInput, PaymentRepository};
pub use project::{
    CreateProjectInput, ProjectContractorInput, ProjectError, ProjectItemInput,
    ProjectRepository, ProjectWithFinancials,
};
