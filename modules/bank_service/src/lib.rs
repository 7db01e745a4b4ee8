//! Bank Service Module
//!
//! CRUD over bank records with a per-catalog unique business code.
//! The same implementation serves the Spanish (`/api/bancos`) and English
//! (`/api/banks`) catalogs.

// Public exports
pub mod contract;
pub use contract::{
    client::BankApi, error::BankError, Bank, BankDraft, BankInput, Catalog, FieldViolation,
};

pub mod module;
pub use module::BankServiceModule;

pub mod config;
pub use config::{Config, SelfQueryMode};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
