//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::BankApi;
pub use error::BankError;
pub use model::{Bank, BankDraft, BankInput, Catalog, FieldNames, FieldViolation};
