use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{JoblyConfig, services::Service},
    infrastructure::{
        company::PostgresCompanyRepository,
        db::postgres::{Postgres, PostgresConfig},
        job::PostgresJobRepository,
    },
};

pub type JoblyService = Service<PostgresCompanyRepository, PostgresJobRepository>;

/// Connects to the configured database, applies pending migrations and wires
/// the repositories into a [`JoblyService`].
pub async fn create_service(config: JoblyConfig) -> Result<JoblyService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    Ok(service_from_db(postgres.get_db()))
}

/// Both repositories share the one connection handle.
pub fn service_from_db(db: impl Into<Arc<DatabaseConnection>>) -> JoblyService {
    let db = db.into();

    Service::new(
        PostgresCompanyRepository::new(Arc::clone(&db)),
        PostgresJobRepository::new(db),
    )
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::{
        domain::company::ports::CompanyService,
        entity::companies,
    };

    #[tokio::test]
    async fn test_repositories_share_connection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![companies::Model {
                handle: "anvil".to_string(),
                name: "Anvil Inc".to_string(),
                num_employees: None,
                description: "Heavy things".to_string(),
                logo_url: None,
            }]])
            .into_connection();

        let service = service_from_db(db);
        assert!(Arc::ptr_eq(
            &service.company_repository.db,
            &service.job_repository.db
        ));

        let found = service.get_companies(Default::default()).await.unwrap();
        assert_eq!(
            found.iter().map(|c| c.handle.as_str()).collect::<Vec<_>>(),
            vec!["anvil"]
        );
    }
}
