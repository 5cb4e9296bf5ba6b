use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, value_objects::ListFilters},
    company::{
        entities::{Company, CompanyDetail},
        ports::{CompanyRepository, CompanyService},
        value_objects::{CreateCompanyInput, UpdateCompanyInput},
    },
    job::ports::JobRepository,
};

impl<C, J> CompanyService for Service<C, J>
where
    C: CompanyRepository,
    J: JobRepository,
{
    #[instrument(skip(self, input), fields(handle = %input.handle))]
    async fn create_company(&self, input: CreateCompanyInput) -> Result<Company, CoreError> {
        self.company_repository.create(input).await
    }

    #[instrument(skip(self))]
    async fn get_companies(&self, filters: ListFilters) -> Result<Vec<Company>, CoreError> {
        self.company_repository.find_all(filters).await
    }

    #[instrument(skip(self))]
    async fn get_company(&self, handle: String) -> Result<CompanyDetail, CoreError> {
        self.company_repository.get(handle).await
    }

    #[instrument(skip(self, input))]
    async fn update_company(
        &self,
        handle: String,
        input: UpdateCompanyInput,
    ) -> Result<Company, CoreError> {
        self.company_repository.update(handle, input).await
    }

    #[instrument(skip(self))]
    async fn delete_company(&self, handle: String) -> Result<(), CoreError> {
        self.company_repository.remove(handle).await
    }
}
