use super::handlers::create_job::{__path_create_job, create_job};
use super::handlers::delete_job::{__path_delete_job, delete_job};
use super::handlers::get_job::{__path_get_job, get_job};
use super::handlers::get_jobs::{__path_get_jobs, get_jobs};
use super::handlers::update_job::{__path_update_job, update_job};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_job, get_jobs, get_job, update_job, delete_job))]
pub struct JobApiDoc;

pub fn job_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/jobs", state.args.server.root_path),
            get(get_jobs).post(create_job),
        )
        .route(
            &format!("{}/jobs/{{id}}", state.args.server.root_path),
            get(get_job).patch(update_job).delete(delete_job),
        )
}
