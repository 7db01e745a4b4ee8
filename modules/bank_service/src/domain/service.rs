//! Domain service - business logic orchestration

use crate::contract::{Bank, BankError, BankInput, Catalog};
use super::repository::{BankRepository, RepositoryError};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Domain service for the banks of one catalog
///
/// Mutations hold `write_gate` across their check-then-write sequence, so two
/// concurrent creates with the same code cannot both pass the pre-check in
/// this process. The storage unique index covers writers in other processes.
pub struct Service {
    catalog: Catalog,
    repo: Arc<dyn BankRepository>,
    write_gate: Mutex<()>,
}

impl Service {
    /// Create a new service instance
    pub fn new(catalog: Catalog, repo: Arc<dyn BankRepository>) -> Self {
        Self {
            catalog,
            repo,
            write_gate: Mutex::new(()),
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// List all banks of the catalog
    pub async fn list_banks(&self) -> Result<Vec<Bank>, BankError> {
        let banks = self
            .repo
            .list_all()
            .await
            .map_err(|e| self.storage_failure("list", e))?;

        tracing::debug!(catalog = %self.catalog, count = banks.len(), "listed banks");
        Ok(banks)
    }

    /// Get a bank by id
    pub async fn get_bank(&self, id: i64) -> Result<Bank, BankError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| self.storage_failure("get", e))?
            .ok_or_else(|| self.not_found(id))
    }

    /// Create a bank
    ///
    /// `input` is expected to be validated already.
    pub async fn create_bank(&self, input: BankInput) -> Result<Bank, BankError> {
        let _gate = self.write_gate.lock().await;

        if self
            .repo
            .exists_by_code(&input.code)
            .await
            .map_err(|e| self.storage_failure("create", e))?
        {
            return Err(self.duplicate_code(&input.code));
        }

        let bank = self
            .repo
            .insert(&input)
            .await
            .map_err(|e| self.storage_failure("create", e))?;

        tracing::info!(catalog = %self.catalog, id = bank.id, code = %bank.code, "bank created");
        Ok(bank)
    }

    /// Update a bank
    ///
    /// The duplicate check only runs when the code changes.
    pub async fn update_bank(&self, id: i64, input: BankInput) -> Result<Bank, BankError> {
        let _gate = self.write_gate.lock().await;

        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| self.storage_failure("update", e))?
            .ok_or_else(|| self.not_found(id))?;

        if existing.code != input.code
            && self
                .repo
                .exists_by_code_excluding_id(&input.code, id)
                .await
                .map_err(|e| self.storage_failure("update", e))?
        {
            return Err(self.duplicate_code(&input.code));
        }

        let changed = Bank {
            id: existing.id,
            code: input.code,
            name: input.name,
            country: input.country,
            active: input.active,
            creation_date: existing.creation_date,
        };

        let bank = self
            .repo
            .update(&changed)
            .await
            .map_err(|e| self.storage_failure("update", e))?;

        tracing::info!(catalog = %self.catalog, id = bank.id, code = %bank.code, "bank updated");
        Ok(bank)
    }

    /// Delete a bank permanently
    pub async fn delete_bank(&self, id: i64) -> Result<(), BankError> {
        let _gate = self.write_gate.lock().await;

        if !self
            .repo
            .exists_by_id(id)
            .await
            .map_err(|e| self.storage_failure("delete", e))?
        {
            return Err(self.not_found(id));
        }

        self.repo
            .delete_by_id(id)
            .await
            .map_err(|e| self.storage_failure("delete", e))?;

        tracing::info!(catalog = %self.catalog, id, "bank deleted");
        Ok(())
    }

    // ===== Helper Methods =====

    fn not_found(&self, id: i64) -> BankError {
        tracing::debug!(catalog = %self.catalog, id, "bank not found");
        BankError::NotFound {
            catalog: self.catalog,
            id,
        }
    }

    fn duplicate_code(&self, code: &str) -> BankError {
        tracing::warn!(catalog = %self.catalog, code, "duplicate bank code rejected");
        BankError::DuplicateCode {
            catalog: self.catalog,
            code: code.to_string(),
        }
    }

    /// A unique index violation is a lost race on the code, not an internal error.
    fn storage_failure(&self, operation: &str, error: RepositoryError) -> BankError {
        match error {
            RepositoryError::DuplicateCode(code) => self.duplicate_code(&code),
            RepositoryError::Storage(e) => {
                tracing::error!(catalog = %self.catalog, operation, error = ?e, "bank storage failure");
                BankError::Internal
            }
        }
    }
}
