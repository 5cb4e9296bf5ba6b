pub mod mappers;
pub mod queries;
pub mod repositories;

pub use repositories::company_repository::PostgresCompanyRepository;
