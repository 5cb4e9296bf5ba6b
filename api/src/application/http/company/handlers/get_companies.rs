use crate::application::http::company::validators::CompanyFilterParams;
use crate::application::http::query_extractor::ListFiltersExtractor;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use jobly_core::domain::company::entities::Company;
use jobly_core::domain::company::ports::CompanyService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCompaniesResponse {
    pub companies: Vec<Company>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "company",
    summary = "List companies",
    description = "Lists companies by name. Rejects unknown filters and inverted ranges.",
    params(CompanyFilterParams),
    responses(
        (status = 200, body = GetCompaniesResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid filters"),
    ),
)]
pub async fn get_companies(
    State(state): State<AppState>,
    ListFiltersExtractor(filters): ListFiltersExtractor,
) -> Result<Response<GetCompaniesResponse>, ApiError> {
    let companies = state
        .service
        .get_companies(filters)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCompaniesResponse { companies }))
}
