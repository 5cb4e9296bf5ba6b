use crate::application::http::job::validators::CreateJobValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use jobly_core::domain::job::entities::Job;
use jobly_core::domain::job::ports::JobService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateJobResponse {
    pub job: Job,
}

#[utoipa::path(
    post,
    path = "",
    tag = "job",
    summary = "Create job",
    description = "Posts a job for an existing company. The id is assigned by the server.",
    responses(
        (status = 201, body = CreateJobResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid payload or unknown company"),
    ),
    request_body = CreateJobValidator
)]
pub async fn create_job(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateJobValidator>,
) -> Result<Response<CreateJobResponse>, ApiError> {
    let job = state
        .service
        .create_job(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateJobResponse { job }))
}
