use crate::application::http::company::validators::UpdateCompanyValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use jobly_core::domain::company::entities::Company;
use jobly_core::domain::company::ports::CompanyService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCompanyResponse {
    pub company: Company,
}

#[utoipa::path(
    patch,
    path = "/{handle}",
    tag = "company",
    summary = "Update company",
    description = "Changes only the fields sent. The handle cannot change.",
    params(
        ("handle" = String, Path, description = "Company handle"),
    ),
    responses(
        (status = 200, body = UpdateCompanyResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid or empty payload"),
        (status = 404, body = ApiErrorResponse),
    ),
    request_body = UpdateCompanyValidator
)]
pub async fn update_company(
    Path(handle): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCompanyValidator>,
) -> Result<Response<UpdateCompanyResponse>, ApiError> {
    let company = state
        .service
        .update_company(handle, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCompanyResponse { company }))
}
