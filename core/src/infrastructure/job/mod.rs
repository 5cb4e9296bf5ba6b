pub mod mappers;
pub mod queries;
pub mod repositories;

pub use repositories::job_repository::PostgresJobRepository;
