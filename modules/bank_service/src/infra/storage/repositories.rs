//! SeaORM repository implementations

use crate::contract::{Bank, BankInput, Catalog};
use crate::domain::repository::{BankRepository, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use std::sync::Arc;

use super::{entity, mapper};

/// Map a write error, recognising unique index violations on the code
fn write_error(err: DbErr, code: &str) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            RepositoryError::DuplicateCode(code.to_string())
        }
        _ => RepositoryError::Storage(err.into()),
    }
}

fn read_error(err: DbErr) -> RepositoryError {
    RepositoryError::Storage(err.into())
}

/// Bank repository bound to one catalog partition of the `banks` table
pub struct SeaOrmBankRepository {
    db: Arc<DatabaseConnection>,
    catalog: Catalog,
}

impl SeaOrmBankRepository {
    pub fn new(db: Arc<DatabaseConnection>, catalog: Catalog) -> Self {
        Self { db, catalog }
    }

    fn scoped(&self) -> sea_orm::Select<entity::Entity> {
        entity::Entity::find().filter(entity::Column::Catalog.eq(self.catalog.as_str()))
    }
}

#[async_trait]
impl BankRepository for SeaOrmBankRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Bank>> {
        let result = self
            .scoped()
            .filter(entity::Column::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(read_error)?;

        Ok(result.map(Into::into))
    }

    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let count = self
            .scoped()
            .filter(entity::Column::Id.eq(id))
            .count(&*self.db)
            .await
            .map_err(read_error)?;

        Ok(count > 0)
    }

    async fn exists_by_code(&self, code: &str) -> RepositoryResult<bool> {
        let count = self
            .scoped()
            .filter(entity::Column::Code.eq(code))
            .count(&*self.db)
            .await
            .map_err(read_error)?;

        Ok(count > 0)
    }

    async fn exists_by_code_excluding_id(&self, code: &str, id: i64) -> RepositoryResult<bool> {
        let count = self
            .scoped()
            .filter(entity::Column::Code.eq(code))
            .filter(entity::Column::Id.ne(id))
            .count(&*self.db)
            .await
            .map_err(read_error)?;

        Ok(count > 0)
    }

    async fn insert(&self, input: &BankInput) -> RepositoryResult<Bank> {
        let active = mapper::insert_model(self.catalog, input, chrono::Utc::now());

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| write_error(e, &input.code))?;

        Ok(result.into())
    }

    async fn update(&self, bank: &Bank) -> RepositoryResult<Bank> {
        let active = mapper::update_model(bank);

        let result = entity::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| write_error(e, &bank.code))?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        entity::Entity::delete_many()
            .filter(entity::Column::Catalog.eq(self.catalog.as_str()))
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(read_error)?;

        Ok(())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Bank>> {
        let results = self
            .scoped()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await
            .map_err(read_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}
