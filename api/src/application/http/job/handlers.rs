pub mod create_job;
pub mod delete_job;
pub mod get_job;
pub mod get_jobs;
pub mod update_job;

use axum::extract::{Path, rejection::PathRejection};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Turns a non-integer `{id}` segment into the usual 400 body instead of
/// axum's plain-text rejection.
fn job_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}
