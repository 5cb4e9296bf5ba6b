use jobly_core::domain::company::value_objects::{CreateCompanyInput, UpdateCompanyInput};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

fn validate_handle(handle: &str) -> Result<(), ValidationError> {
    if handle != handle.to_lowercase() || handle.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("handle")
            .with_message("handle must be lowercase without spaces".into()));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCompanyValidator {
    #[validate(
        length(min = 1, max = 25, message = "handle must be 1 to 25 characters"),
        custom(function = "validate_handle")
    )]
    pub handle: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "numEmployees must not be negative"))]
    pub num_employees: Option<i32>,

    #[serde(default)]
    #[validate(url(message = "logoUrl must be a URL"))]
    pub logo_url: Option<String>,
}

impl From<CreateCompanyValidator> for CreateCompanyInput {
    fn from(payload: CreateCompanyValidator) -> Self {
        Self {
            handle: payload.handle,
            name: payload.name,
            description: payload.description,
            num_employees: payload.num_employees,
            logo_url: payload.logo_url,
        }
    }
}

/// Any subset of the mutable fields. `handle` is not one of them.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCompanyValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "numEmployees must not be negative"))]
    pub num_employees: Option<i32>,

    #[serde(default)]
    #[validate(url(message = "logoUrl must be a URL"))]
    pub logo_url: Option<String>,
}

impl From<UpdateCompanyValidator> for UpdateCompanyInput {
    fn from(payload: UpdateCompanyValidator) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            num_employees: payload.num_employees,
            logo_url: payload.logo_url,
        }
    }
}

/// Query options accepted by `GET /companies`. Only used for the OpenAPI
/// document; the handler reads the raw query string.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct CompanyFilterParams {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
}
