use super::job_id;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State, rejection::PathRejection};
use jobly_core::domain::job::entities::JobDetail;
use jobly_core::domain::job::ports::JobService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetJobResponse {
    pub job: JobDetail,
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "job",
    summary = "Get job",
    description = "Retrieves a job with its company inlined.",
    params(
        ("id" = i32, Path, description = "Job id"),
    ),
    responses(
        (status = 200, body = GetJobResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_job(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response<GetJobResponse>, ApiError> {
    let job = state
        .service
        .get_job(job_id(path)?)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetJobResponse { job }))
}
