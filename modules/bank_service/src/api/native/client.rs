//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Bank, BankApi, BankError, BankInput, Catalog};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
/// It backs the self-query endpoint unless HTTP mode is configured.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl BankApi for NativeClient {
    fn catalog(&self) -> Catalog {
        self.service.catalog()
    }

    async fn list_banks(&self) -> Result<Vec<Bank>, BankError> {
        self.service.list_banks().await
    }

    async fn get_bank(&self, id: i64) -> Result<Bank, BankError> {
        self.service.get_bank(id).await
    }

    async fn create_bank(&self, input: BankInput) -> Result<Bank, BankError> {
        self.service.create_bank(input).await
    }

    async fn update_bank(&self, id: i64, input: BankInput) -> Result<Bank, BankError> {
        self.service.update_bank(id, input).await
    }

    async fn delete_bank(&self, id: i64) -> Result<(), BankError> {
        self.service.delete_bank(id).await
    }
}
