//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Bank, BankInput};
use async_trait::async_trait;

/// Storage failures surfaced to the domain service
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A write tripped the unique index on the bank code
    #[error("unique index violated by code `{0}`")]
    DuplicateCode(String),

    /// Any other storage failure
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for the banks of a single catalog
#[async_trait]
pub trait BankRepository: Send + Sync {
    /// Find a bank by id
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Bank>>;

    /// Check if a bank with this id exists
    async fn exists_by_id(&self, id: i64) -> RepositoryResult<bool>;

    /// Check if any bank holds this code
    async fn exists_by_code(&self, code: &str) -> RepositoryResult<bool>;

    /// Check if a bank other than `id` holds this code
    async fn exists_by_code_excluding_id(&self, code: &str, id: i64) -> RepositoryResult<bool>;

    /// Insert a new bank, assigning its id and creation date
    async fn insert(&self, input: &BankInput) -> RepositoryResult<Bank>;

    /// Persist code, name, country and active flag of an existing bank
    async fn update(&self, bank: &Bank) -> RepositoryResult<Bank>;

    /// Hard delete a bank
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;

    /// List all banks ordered by id ascending
    async fn list_all(&self) -> RepositoryResult<Vec<Bank>>;
}
