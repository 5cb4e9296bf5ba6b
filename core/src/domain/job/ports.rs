use std::future::Future;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::ListFilters},
    job::{
        entities::{Job, JobDetail},
        value_objects::{CreateJobInput, UpdateJobInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait JobService: Send + Sync {
    fn create_job(
        &self,
        input: CreateJobInput,
    ) -> impl Future<Output = Result<Job, CoreError>> + Send;

    fn get_jobs(
        &self,
        filters: ListFilters,
    ) -> impl Future<Output = Result<Vec<Job>, CoreError>> + Send;

    fn get_job(&self, id: i32) -> impl Future<Output = Result<JobDetail, CoreError>> + Send;

    fn update_job(
        &self,
        id: i32,
        input: UpdateJobInput,
    ) -> impl Future<Output = Result<Job, CoreError>> + Send;

    fn delete_job(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Jobs are keyed by their server-assigned id; titles are not unique.
#[cfg_attr(test, mockall::automock)]
pub trait JobRepository: Send + Sync {
    /// Fails with [`CoreError::InvalidInput`] when the company does not exist.
    fn create(
        &self,
        input: CreateJobInput,
    ) -> impl Future<Output = Result<Job, CoreError>> + Send;

    /// Jobs matching `filters`, ordered by title.
    fn find_all(
        &self,
        filters: ListFilters,
    ) -> impl Future<Output = Result<Vec<Job>, CoreError>> + Send;

    fn get(&self, id: i32) -> impl Future<Output = Result<JobDetail, CoreError>> + Send;

    fn update(
        &self,
        id: i32,
        input: UpdateJobInput,
    ) -> impl Future<Output = Result<Job, CoreError>> + Send;

    fn remove(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
