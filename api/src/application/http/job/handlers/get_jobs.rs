use crate::application::http::job::validators::JobFilterParams;
use crate::application::http::query_extractor::ListFiltersExtractor;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use jobly_core::domain::job::entities::Job;
use jobly_core::domain::job::ports::JobService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetJobsResponse {
    pub jobs: Vec<Job>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "job",
    summary = "List jobs",
    description = "Lists jobs ordered by title.",
    params(JobFilterParams),
    responses(
        (status = 200, body = GetJobsResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid filters"),
    ),
)]
pub async fn get_jobs(
    State(state): State<AppState>,
    ListFiltersExtractor(filters): ListFiltersExtractor,
) -> Result<Response<GetJobsResponse>, ApiError> {
    let jobs = state
        .service
        .get_jobs(filters)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetJobsResponse { jobs }))
}
