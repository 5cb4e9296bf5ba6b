use super::job_id;
use crate::application::http::job::validators::UpdateJobValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State, rejection::PathRejection};
use jobly_core::domain::job::entities::Job;
use jobly_core::domain::job::ports::JobService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateJobResponse {
    pub job: Job,
}

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "job",
    summary = "Update job",
    description = "Partially updates a job. The id and the owning company cannot change.",
    params(
        ("id" = i32, Path, description = "Job id"),
    ),
    responses(
        (status = 200, body = UpdateJobResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid or empty payload"),
        (status = 404, body = ApiErrorResponse),
    ),
    request_body = UpdateJobValidator
)]
pub async fn update_job(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateJobValidator>,
) -> Result<Response<UpdateJobResponse>, ApiError> {
    let job = state
        .service
        .update_job(job_id(path)?, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateJobResponse { job }))
}
