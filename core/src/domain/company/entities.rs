use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::job::entities::JobSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// A company together with the jobs it posts.
///
/// A company without jobs is still a company: `jobs` is empty, not missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<JobSummary>,
}

impl CompanyDetail {
    pub fn new(company: Company, jobs: Vec<JobSummary>) -> Self {
        Self { company, jobs }
    }
}
