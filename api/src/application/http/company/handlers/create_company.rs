use crate::application::http::company::validators::CreateCompanyValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use jobly_core::domain::company::entities::Company;
use jobly_core::domain::company::ports::CompanyService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCompanyResponse {
    pub company: Company,
}

#[utoipa::path(
    post,
    path = "",
    tag = "company",
    summary = "Create company",
    description = "Creates a company. The handle must not already be taken.",
    responses(
        (status = 201, body = CreateCompanyResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid or duplicate company"),
    ),
    request_body = CreateCompanyValidator
)]
pub async fn create_company(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCompanyValidator>,
) -> Result<Response<CreateCompanyResponse>, ApiError> {
    let company = state
        .service
        .create_company(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCompanyResponse { company }))
}
