use crate::application::http::{company::router::CompanyApiDoc, job::router::JobApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobly API"
    ),
    nest(
        (path = "/companies", api = CompanyApiDoc),
        (path = "/jobs", api = JobApiDoc),
    )
)]
pub struct ApiDoc;
