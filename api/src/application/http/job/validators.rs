use jobly_core::domain::job::value_objects::{CreateJobInput, UpdateJobInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

fn validate_equity(equity: &Decimal) -> Result<(), ValidationError> {
    if *equity < Decimal::ZERO || *equity > Decimal::ONE {
        return Err(ValidationError::new("equity")
            .with_message("equity must be between 0 and 1".into()));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateJobValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "salary must not be negative"))]
    pub salary: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<Decimal>,

    #[validate(length(min = 1, max = 25, message = "companyHandle must be 1 to 25 characters"))]
    pub company_handle: String,
}

impl From<CreateJobValidator> for CreateJobInput {
    fn from(payload: CreateJobValidator) -> Self {
        Self {
            title: payload.title,
            salary: payload.salary,
            equity: payload.equity,
            company_handle: payload.company_handle,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateJobValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "salary must not be negative"))]
    pub salary: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<Decimal>,
}

impl From<UpdateJobValidator> for UpdateJobInput {
    fn from(payload: UpdateJobValidator) -> Self {
        Self {
            title: payload.title,
            salary: payload.salary,
            equity: payload.equity,
        }
    }
}

/// Query options accepted by `GET /jobs`, for the OpenAPI document.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct JobFilterParams {
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    /// `true` keeps only jobs with non-zero equity; `false` filters nothing.
    pub has_equity: Option<bool>,
}
