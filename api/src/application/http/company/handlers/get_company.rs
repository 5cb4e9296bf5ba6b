use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use jobly_core::domain::company::entities::CompanyDetail;
use jobly_core::domain::company::ports::CompanyService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCompanyResponse {
    pub company: CompanyDetail,
}

#[utoipa::path(
    get,
    path = "/{handle}",
    tag = "company",
    summary = "Get company",
    description = "Retrieves a company with the jobs it posts.",
    params(
        ("handle" = String, Path, description = "Company handle"),
    ),
    responses(
        (status = 200, body = GetCompanyResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_company(
    Path(handle): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetCompanyResponse>, ApiError> {
    let company = state
        .service
        .get_company(handle)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCompanyResponse { company }))
}
