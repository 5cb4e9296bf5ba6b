use std::sync::Arc;

use crate::domain::{company::ports::CompanyRepository, job::ports::JobRepository};

/// Application service, generic over the repository ports it drives.
///
/// Holds no per-request state: every call goes straight to the repositories,
/// and concurrency control is left to the store.
pub struct Service<C, J>
where
    C: CompanyRepository,
    J: JobRepository,
{
    pub(crate) company_repository: Arc<C>,
    pub(crate) job_repository: Arc<J>,
}

impl<C, J> Service<C, J>
where
    C: CompanyRepository,
    J: JobRepository,
{
    pub fn new(company_repository: C, job_repository: J) -> Self {
        Self {
            company_repository: Arc::new(company_repository),
            job_repository: Arc::new(job_repository),
        }
    }
}

impl<C, J> Clone for Service<C, J>
where
    C: CompanyRepository,
    J: JobRepository,
{
    fn clone(&self) -> Self {
        Self {
            company_repository: Arc::clone(&self.company_repository),
            job_repository: Arc::clone(&self.job_repository),
        }
    }
}
