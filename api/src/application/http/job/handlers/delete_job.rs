use super::job_id;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State, rejection::PathRejection};
use jobly_core::domain::job::ports::JobService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteJobResponse {
    pub deleted: i32,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "job",
    summary = "Delete job",
    params(
        ("id" = i32, Path, description = "Job id"),
    ),
    responses(
        (status = 200, body = DeleteJobResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn delete_job(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response<DeleteJobResponse>, ApiError> {
    let id = job_id(path)?;

    state
        .service
        .delete_job(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteJobResponse { deleted: id }))
}
