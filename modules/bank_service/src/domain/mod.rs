//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{BankRepository, RepositoryError, RepositoryResult};
pub use service::Service;
