use std::future::Future;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::ListFilters},
    company::{
        entities::{Company, CompanyDetail},
        value_objects::{CreateCompanyInput, UpdateCompanyInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait CompanyService: Send + Sync {
    fn create_company(
        &self,
        input: CreateCompanyInput,
    ) -> impl Future<Output = Result<Company, CoreError>> + Send;

    fn get_companies(
        &self,
        filters: ListFilters,
    ) -> impl Future<Output = Result<Vec<Company>, CoreError>> + Send;

    fn get_company(
        &self,
        handle: String,
    ) -> impl Future<Output = Result<CompanyDetail, CoreError>> + Send;

    fn update_company(
        &self,
        handle: String,
        input: UpdateCompanyInput,
    ) -> impl Future<Output = Result<Company, CoreError>> + Send;

    fn delete_company(&self, handle: String)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CompanyRepository: Send + Sync {
    /// Fails with [`CoreError::DuplicateEntity`] when the handle is taken.
    fn create(
        &self,
        input: CreateCompanyInput,
    ) -> impl Future<Output = Result<Company, CoreError>> + Send;

    /// Companies matching `filters`, ordered by name.
    fn find_all(
        &self,
        filters: ListFilters,
    ) -> impl Future<Output = Result<Vec<Company>, CoreError>> + Send;

    fn get(&self, handle: String) -> impl Future<Output = Result<CompanyDetail, CoreError>> + Send;

    fn update(
        &self,
        handle: String,
        input: UpdateCompanyInput,
    ) -> impl Future<Output = Result<Company, CoreError>> + Send;

    fn remove(&self, handle: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}
