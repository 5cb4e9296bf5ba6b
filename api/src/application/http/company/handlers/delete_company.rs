use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use jobly_core::domain::company::ports::CompanyService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCompanyResponse {
    pub deleted: String,
}

#[utoipa::path(
    delete,
    path = "/{handle}",
    tag = "company",
    summary = "Delete company",
    description = "Deletes a company and, through the foreign key, its jobs.",
    params(
        ("handle" = String, Path, description = "Company handle"),
    ),
    responses(
        (status = 200, body = DeleteCompanyResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn delete_company(
    Path(handle): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCompanyResponse>, ApiError> {
    state
        .service
        .delete_company(handle.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCompanyResponse { deleted: handle }))
}
