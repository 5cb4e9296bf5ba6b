use std::sync::Arc;

use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, SqlErr, Statement,
};
use tracing::error;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, value_objects::ListFilters},
        company::entities::Company,
        job::{
            entities::{Job, JobDetail},
            ports::JobRepository,
            value_objects::{CreateJobInput, UpdateJobInput},
        },
    },
    entity::{
        companies,
        jobs::{ActiveModel, Entity},
    },
    infrastructure::{
        job::queries::{JOB_ALIASES, JOB_COLUMNS, JOB_LIST},
        sql::{FieldChanges, build_list_query, sql_for_partial_update},
    },
};

pub struct PostgresJobRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresJobRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn not_found(id: i32) -> CoreError {
        CoreError::NotFound(format!("No job: {id}"))
    }

    /// A job pointing at a missing company is a client error.
    fn constraint_error(violation: Option<SqlErr>, company_handle: &str) -> Option<CoreError> {
        match violation {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Some(CoreError::InvalidInput(
                format!("No company: {company_handle}"),
            )),
            _ => None,
        }
    }
}

impl JobRepository for PostgresJobRepository {
    async fn create(&self, input: CreateJobInput) -> Result<Job, CoreError> {
        let company_handle = input.company_handle.clone();

        let created = Entity::insert(ActiveModel {
            id: NotSet,
            title: Set(input.title),
            salary: Set(input.salary),
            equity: Set(input.equity),
            company_handle: Set(input.company_handle),
        })
        .exec_with_returning(self.db.as_ref())
        .await
        .map_err(|e: DbErr| {
            Self::constraint_error(e.sql_err(), &company_handle).unwrap_or_else(|| {
                error!("Failed to create job: {}", e);
                CoreError::StoreError
            })
        })?;

        Ok(Job::from(created))
    }

    async fn find_all(&self, filters: ListFilters) -> Result<Vec<Job>, CoreError> {
        let query = build_list_query(&JOB_LIST, &filters)?;

        let jobs = Entity::find()
            .from_raw_sql(query.into_statement())
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch jobs: {}", e);
                CoreError::StoreError
            })?
            .into_iter()
            .map(Job::from)
            .collect();

        Ok(jobs)
    }

    async fn get(&self, id: i32) -> Result<JobDetail, CoreError> {
        let job = Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get job: {}", e);
                CoreError::StoreError
            })?
            .map(Job::from)
            .ok_or_else(|| Self::not_found(id))?;

        // The foreign key guarantees the company exists unless it was deleted
        // between the two reads, in which case the job went with it.
        let company = companies::Entity::find_by_id(job.company_handle.clone())
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to load job company: {}", e);
                CoreError::StoreError
            })?
            .map(Company::from)
            .ok_or_else(|| Self::not_found(id))?;

        Ok(JobDetail::new(job, company))
    }

    async fn update(&self, id: i32, input: UpdateJobInput) -> Result<Job, CoreError> {
        let update = sql_for_partial_update(&FieldChanges::from(input), JOB_ALIASES)?;

        let sql = format!(
            "UPDATE jobs SET {} WHERE id = {} RETURNING {JOB_COLUMNS}",
            update.set_clause(),
            update.next_placeholder(),
        );
        let mut values = update.values;
        values.push(id.into());

        let updated = Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                values,
            ))
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to update job: {}", e);
                CoreError::StoreError
            })?
            .ok_or_else(|| Self::not_found(id))?;

        Ok(Job::from(updated))
    }

    async fn remove(&self, id: i32) -> Result<(), CoreError> {
        let result = Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete job: {}", e);
                CoreError::StoreError
            })?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sea_orm::{MockDatabase, MockExecResult, Transaction, Value};

    use super::*;
    use crate::entity::jobs;

    fn transaction_log(db: Arc<DatabaseConnection>) -> Vec<Transaction> {
        match Arc::try_unwrap(db) {
            Ok(db) => db.into_transaction_log(),
            Err(_) => panic!("connection is still shared"),
        }
    }

    fn welder_model() -> jobs::Model {
        jobs::Model {
            id: 7,
            title: "Welder".to_string(),
            salary: Some(60_000),
            equity: Some(Decimal::new(5, 2)),
            company_handle: "anvil".to_string(),
        }
    }

    fn anvil_model() -> companies::Model {
        companies::Model {
            handle: "anvil".to_string(),
            name: "Anvil Inc".to_string(),
            num_employees: Some(12),
            description: "Heavy things".to_string(),
            logo_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![welder_model()]])
            .into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));

        let job = repository
            .create(CreateJobInput {
                title: "Welder".to_string(),
                salary: Some(60_000),
                equity: Some(Decimal::new(5, 2)),
                company_handle: "anvil".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(job, Job::from(welder_model()));
    }

    #[tokio::test]
    async fn test_find_all_with_title_and_equity() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![welder_model()]])
            .into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));

        let filters = ListFilters::new()
            .with("hasEquity", "true")
            .with("title", "weld")
            .with("minSalary", "1000");
        let jobs = repository.find_all(filters).await.unwrap();

        assert_eq!(jobs, vec![Job::from(welder_model())]);
        assert_eq!(
            transaction_log(repository.db),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                "SELECT id, title, salary, equity, company_handle FROM jobs \
                 WHERE title ILIKE $1 AND salary >= $2 AND equity > 0 ORDER BY title, id",
                [Value::from("%weld%"), Value::from(1000)],
            )]
        );
    }

    #[tokio::test]
    async fn test_find_all_rejects_company_filters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));

        let result = repository
            .find_all(ListFilters::new().with("minEmployees", "3"))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidFilter(_))));
    }

    #[tokio::test]
    async fn test_get_inlines_company() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![welder_model()]])
            .append_query_results([vec![anvil_model()]])
            .into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));

        let detail = repository.get(7).await.unwrap();

        assert_eq!(detail.id, 7);
        assert_eq!(detail.title, "Welder");
        assert_eq!(detail.company, Company::from(anvil_model()));
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![welder_model()]])
            .append_query_results([vec![welder_model()]])
            .append_query_results([vec![anvil_model()]])
            .into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));
        let input = CreateJobInput {
            title: "Welder".to_string(),
            salary: Some(60_000),
            equity: Some(Decimal::new(5, 2)),
            company_handle: "anvil".to_string(),
        };

        let created = repository.create(input.clone()).await.unwrap();
        let detail = repository.get(created.id).await.unwrap();

        assert_eq!(detail.id, created.id);
        assert_eq!(detail.title, input.title);
        assert_eq!(detail.salary, input.salary);
        assert_eq!(detail.equity, input.equity);
        assert_eq!(detail.company.handle, input.company_handle);
    }

    #[test]
    fn test_missing_company_is_invalid_input() {
        let violation = Some(SqlErr::ForeignKeyConstraintViolation(
            "insert or update on table \"jobs\" violates foreign key constraint".to_string(),
        ));

        assert_eq!(
            PostgresJobRepository::constraint_error(violation, "forge"),
            Some(CoreError::InvalidInput("No company: forge".to_string()))
        );
        assert_eq!(PostgresJobRepository::constraint_error(None, "forge"), None);
    }

    #[tokio::test]
    async fn test_create_store_failure_is_opaque() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));

        let result = repository
            .create(CreateJobInput {
                title: "Welder".to_string(),
                salary: None,
                equity: None,
                company_handle: "anvil".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::StoreError));
    }

    #[tokio::test]
    async fn test_get_missing_job() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<jobs::Model>::new()])
            .into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));

        assert_eq!(
            repository.get(99).await,
            Err(CoreError::NotFound("No job: 99".to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_keys_on_id() {
        let raised = jobs::Model {
            salary: Some(75_000),
            ..welder_model()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![raised.clone()]])
            .into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));

        let job = repository
            .update(
                7,
                UpdateJobInput {
                    salary: Some(75_000),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(job, Job::from(raised));
        assert_eq!(
            transaction_log(repository.db),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                "UPDATE jobs SET \"salary\"=$1 WHERE id = $2 \
                 RETURNING id, title, salary, equity, company_handle",
                [Value::from(75_000), Value::from(7)],
            )]
        );
    }

    #[tokio::test]
    async fn test_remove_missing_job() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repository = PostgresJobRepository::new(Arc::new(db));

        assert_eq!(
            repository.remove(1).await,
            Err(CoreError::NotFound("No job: 1".to_string()))
        );
    }
}
