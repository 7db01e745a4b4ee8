//! Client trait for bank catalogs
//!
//! Implemented in-process by `api::native::NativeClient` and over HTTP by
//! `api::http::HttpBankClient`. One client instance serves one catalog.

use super::{
    error::BankError,
    model::{Bank, BankInput, Catalog},
};
use async_trait::async_trait;

/// Bank catalog API for inter-module communication
#[async_trait]
pub trait BankApi: Send + Sync {
    /// Catalog this client is bound to
    fn catalog(&self) -> Catalog;

    /// List every bank of the catalog, ordered by id
    async fn list_banks(&self) -> Result<Vec<Bank>, BankError>;

    /// Get a bank by id
    async fn get_bank(&self, id: i64) -> Result<Bank, BankError>;

    /// Create a bank with a code not yet used in the catalog
    async fn create_bank(&self, input: BankInput) -> Result<Bank, BankError>;

    /// Overwrite code, name, country and active flag of a bank
    async fn update_bank(&self, id: i64, input: BankInput) -> Result<Bank, BankError>;

    /// Delete a bank permanently
    async fn delete_bank(&self, id: i64) -> Result<(), BankError>;
}
