use super::handlers::create_company::{__path_create_company, create_company};
use super::handlers::delete_company::{__path_delete_company, delete_company};
use super::handlers::get_companies::{__path_get_companies, get_companies};
use super::handlers::get_company::{__path_get_company, get_company};
use super::handlers::update_company::{__path_update_company, update_company};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_company,
    get_companies,
    get_company,
    update_company,
    delete_company
))]
pub struct CompanyApiDoc;

pub fn company_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/companies", state.args.server.root_path),
            get(get_companies).post(create_company),
        )
        .route(
            &format!("{}/companies/{{handle}}", state.args.server.root_path),
            get(get_company)
                .patch(update_company)
                .delete(delete_company),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use jobly_core::entity::{companies, jobs};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::{Value, json};

    use crate::application::http::test::test_server;

    fn anvil() -> companies::Model {
        companies::Model {
            handle: "anvil".to_string(),
            name: "Anvil Inc".to_string(),
            num_employees: Some(12),
            description: "Heavy things".to_string(),
            logo_url: None,
        }
    }

    fn anvil_json() -> Value {
        json!({
            "handle": "anvil",
            "name": "Anvil Inc",
            "description": "Heavy things",
            "numEmployees": 12,
            "logoUrl": null,
        })
    }

    #[tokio::test]
    async fn test_create_company() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<companies::Model>::new(), vec![anvil()]])
            .into_connection();
        let server = test_server(db);

        let response = server
            .post("/companies")
            .json(&json!({
                "handle": "anvil",
                "name": "Anvil Inc",
                "description": "Heavy things",
                "numEmployees": 12,
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({ "company": anvil_json() }));
    }

    #[tokio::test]
    async fn test_create_duplicate_company() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![anvil()]])
            .into_connection();
        let server = test_server(db);

        let response = server
            .post("/companies")
            .json(&json!({
                "handle": "anvil",
                "name": "Anvil Again",
                "description": "Heavier things",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "code": "E_BAD_REQUEST",
            "status": 400,
            "message": "Duplicate company: anvil",
        }));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload() {
        let server = test_server(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let response = server
            .post("/companies")
            .json(&json!({ "handle": "anvil", "name": "Anvil Inc" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_companies() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![anvil()]])
            .into_connection();
        let server = test_server(db);

        let response = server
            .get("/companies")
            .add_query_param("minEmployees", 10)
            .add_query_param("maxEmployees", 20)
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "companies": [anvil_json()] }));
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_filter() {
        let server = test_server(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let response = server
            .get("/companies")
            .add_query_param("colour", "red")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
        assert!(body["message"].as_str().unwrap_or_default().contains("colour"));
    }

    #[tokio::test]
    async fn test_list_rejects_crossed_bounds() {
        let server = test_server(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let response = server
            .get("/companies")
            .add_query_param("minEmployees", 100)
            .add_query_param("maxEmployees", 50)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_company_with_jobs() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![anvil()]])
            .append_query_results([vec![jobs::Model {
                id: 3,
                title: "Smith".to_string(),
                salary: None,
                equity: None,
                company_handle: "anvil".to_string(),
            }]])
            .into_connection();
        let server = test_server(db);

        let response = server.get("/companies/anvil").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["company"]["handle"], "anvil");
        assert_eq!(
            body["company"]["jobs"],
            json!([{ "id": 3, "title": "Smith", "salary": null, "equity": null }])
        );
    }

    #[tokio::test]
    async fn test_get_missing_company() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<companies::Model>::new()])
            .into_connection();
        let server = test_server(db);

        let response = server.get("/companies/nope").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({
            "code": "E_NOT_FOUND",
            "status": 404,
            "message": "No company: nope",
        }));
    }

    #[tokio::test]
    async fn test_update_company() {
        let renamed = companies::Model {
            name: "Anvil & Sons".to_string(),
            ..anvil()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![renamed]])
            .into_connection();
        let server = test_server(db);

        let response = server
            .patch("/companies/anvil")
            .json(&json!({ "name": "Anvil & Sons" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["company"]["name"], "Anvil & Sons");
    }

    #[tokio::test]
    async fn test_update_rejects_handle_and_empty_payload() {
        let server = test_server(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        server
            .patch("/companies/anvil")
            .json(&json!({ "handle": "forge" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .patch("/companies/anvil")
            .json(&json!({}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_company() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let server = test_server(db);

        let response = server.delete("/companies/anvil").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "deleted": "anvil" }));
    }
}
