use std::{sync::Arc, time::Duration};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Clone)]
pub struct Postgres {
    db: Arc<DatabaseConnection>,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Applies the bundled migrations from `core/migrations`.
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        sqlx::migrate!("./migrations")
            .run(self.db.get_postgres_connection_pool())
            .await?;
        info!("database migrations applied");

        Ok(())
    }

    pub fn get_db(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.db)
    }
}
