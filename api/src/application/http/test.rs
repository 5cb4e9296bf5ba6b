use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use jobly_core::application::service_from_db;
use sea_orm::DatabaseConnection;

use crate::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};

/// Serves the full router over `db`, usually a `MockDatabase` connection.
pub fn test_server(db: DatabaseConnection) -> TestServer {
    let args = Arc::new(Args::parse_from(["jobly-api"]));
    let state = AppState::new(args, service_from_db(db));

    TestServer::new(router(state).unwrap()).unwrap()
}
