use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, value_objects::ListFilters},
    company::ports::CompanyRepository,
    job::{
        entities::{Job, JobDetail},
        ports::{JobRepository, JobService},
        value_objects::{CreateJobInput, UpdateJobInput},
    },
};

impl<C, J> JobService for Service<C, J>
where
    C: CompanyRepository,
    J: JobRepository,
{
    #[instrument(skip(self, input), fields(company_handle = %input.company_handle))]
    async fn create_job(&self, input: CreateJobInput) -> Result<Job, CoreError> {
        self.job_repository.create(input).await
    }

    #[instrument(skip(self))]
    async fn get_jobs(&self, filters: ListFilters) -> Result<Vec<Job>, CoreError> {
        self.job_repository.find_all(filters).await
    }

    #[instrument(skip(self))]
    async fn get_job(&self, id: i32) -> Result<JobDetail, CoreError> {
        self.job_repository.get(id).await
    }

    #[instrument(skip(self, input))]
    async fn update_job(&self, id: i32, input: UpdateJobInput) -> Result<Job, CoreError> {
        self.job_repository.update(id, input).await
    }

    #[instrument(skip(self))]
    async fn delete_job(&self, id: i32) -> Result<(), CoreError> {
        self.job_repository.remove(id).await
    }
}
