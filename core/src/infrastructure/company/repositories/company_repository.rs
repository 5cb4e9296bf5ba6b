use std::sync::Arc;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr, Statement,
};
use tracing::error;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, value_objects::ListFilters},
        company::{
            entities::{Company, CompanyDetail},
            ports::CompanyRepository,
            value_objects::{CreateCompanyInput, UpdateCompanyInput},
        },
        job::entities::JobSummary,
    },
    entity::{
        companies::{ActiveModel, Entity},
        jobs,
    },
    infrastructure::{
        company::queries::{COMPANY_ALIASES, COMPANY_COLUMNS, COMPANY_LIST},
        sql::{FieldChanges, build_list_query, sql_for_partial_update},
    },
};

pub struct PostgresCompanyRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresCompanyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn duplicate(handle: &str) -> CoreError {
        CoreError::DuplicateEntity(format!("Duplicate company: {handle}"))
    }

    /// Constraint violations the caller can fix. `None` means a store failure.
    ///
    /// The name constraint is told apart from the primary key by the default
    /// constraint name Postgres gives `companies.name UNIQUE`.
    fn constraint_error(violation: Option<SqlErr>, handle: &str) -> Option<CoreError> {
        match violation {
            Some(SqlErr::UniqueConstraintViolation(message))
                if message.contains("companies_name_key") =>
            {
                Some(CoreError::DuplicateEntity("Duplicate company name".to_string()))
            }
            Some(SqlErr::UniqueConstraintViolation(_)) => Some(Self::duplicate(handle)),
            _ => None,
        }
    }

    fn not_found(handle: &str) -> CoreError {
        CoreError::NotFound(format!("No company: {handle}"))
    }
}

impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, input: CreateCompanyInput) -> Result<Company, CoreError> {
        let existing = Entity::find_by_id(input.handle.clone())
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to check for existing company: {}", e);
                CoreError::StoreError
            })?;

        if existing.is_some() {
            return Err(Self::duplicate(&input.handle));
        }

        let handle = input.handle.clone();
        let created = Entity::insert(ActiveModel {
            handle: Set(input.handle),
            name: Set(input.name),
            description: Set(input.description),
            num_employees: Set(input.num_employees),
            logo_url: Set(input.logo_url),
        })
        .exec_with_returning(self.db.as_ref())
        .await
        .map_err(|e: DbErr| {
            Self::constraint_error(e.sql_err(), &handle).unwrap_or_else(|| {
                error!("Failed to create company: {}", e);
                CoreError::StoreError
            })
        })?;

        Ok(Company::from(created))
    }

    async fn find_all(&self, filters: ListFilters) -> Result<Vec<Company>, CoreError> {
        let query = build_list_query(&COMPANY_LIST, &filters)?;

        let companies = Entity::find()
            .from_raw_sql(query.into_statement())
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch companies: {}", e);
                CoreError::StoreError
            })?
            .into_iter()
            .map(Company::from)
            .collect();

        Ok(companies)
    }

    async fn get(&self, handle: String) -> Result<CompanyDetail, CoreError> {
        let company = Entity::find_by_id(handle.clone())
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get company: {}", e);
                CoreError::StoreError
            })?
            .map(Company::from)
            .ok_or_else(|| Self::not_found(&handle))?;

        let jobs = jobs::Entity::find()
            .filter(jobs::Column::CompanyHandle.eq(handle))
            .order_by_asc(jobs::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to load company jobs: {}", e);
                CoreError::StoreError
            })?
            .iter()
            .map(JobSummary::from)
            .collect();

        Ok(CompanyDetail::new(company, jobs))
    }

    async fn update(
        &self,
        handle: String,
        input: UpdateCompanyInput,
    ) -> Result<Company, CoreError> {
        let update = sql_for_partial_update(&FieldChanges::from(input), COMPANY_ALIASES)?;

        let sql = format!(
            "UPDATE companies SET {} WHERE handle = {} RETURNING {COMPANY_COLUMNS}",
            update.set_clause(),
            update.next_placeholder(),
        );
        let mut values = update.values;
        values.push(handle.clone().into());

        let updated = Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                values,
            ))
            .one(self.db.as_ref())
            .await
            .map_err(|e: DbErr| {
                Self::constraint_error(e.sql_err(), &handle).unwrap_or_else(|| {
                    error!("Failed to update company: {}", e);
                    CoreError::StoreError
                })
            })?
            .ok_or_else(|| Self::not_found(&handle))?;

        Ok(Company::from(updated))
    }

    async fn remove(&self, handle: String) -> Result<(), CoreError> {
        let result = Entity::delete_by_id(handle.clone())
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete company: {}", e);
                CoreError::StoreError
            })?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(&handle));
        }

        Ok(())
    }
}
