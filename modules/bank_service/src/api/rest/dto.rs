//! REST DTOs with serde derives for HTTP API
//!
//! Each catalog has its own record/request pair because the JSON field names
//! differ. [`CatalogDialect`] binds a catalog to its DTO types so handlers,
//! routes and the HTTP client stay generic.

use crate::contract::{Bank, BankDraft, BankInput, Catalog};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;

/// Binds a [`Catalog`] to its wire representation
pub trait CatalogDialect: Send + Sync + 'static {
    const CATALOG: Catalog;

    /// Record as returned by the API
    type Record: Serialize + DeserializeOwned + From<Bank> + Into<Bank> + Send + 'static;

    /// Create/update request body
    type Request: Serialize + DeserializeOwned + From<BankInput> + Into<BankDraft> + Send + 'static;
}

/// English catalog served under `/api/banks`
#[derive(Debug, Clone, Copy)]
pub struct BankCatalog;

/// Spanish catalog served under `/api/bancos`
#[derive(Debug, Clone, Copy)]
pub struct BancoCatalog;

impl CatalogDialect for BankCatalog {
    const CATALOG: Catalog = Catalog::Bank;
    type Record = BankDto;
    type Request = BankRequest;
}

impl CatalogDialect for BancoCatalog {
    const CATALOG: Catalog = Catalog::Banco;
    type Record = BancoDto;
    type Request = BancoRequest;
}

// ===== English DTOs =====

/// Bank response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankDto {
    /// Generated identifier
    pub id: i64,

    /// Business code, unique across banks
    #[schema(example = "B001")]
    pub code: String,

    #[schema(example = "Central Bank")]
    pub name: String,

    #[schema(example = "Spain")]
    pub country: Option<String>,

    pub active: bool,

    /// Creation timestamp
    pub creation_date: chrono::DateTime<chrono::Utc>,
}

/// Bank create/update request
///
/// Every field may be omitted at the JSON level; required fields are checked
/// by validation so the client gets field-level messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BankRequest {
    /// 1-20 characters, required
    #[schema(example = "B001")]
    pub code: Option<String>,

    /// 1-200 characters, required
    #[schema(example = "Central Bank")]
    pub name: Option<String>,

    /// Up to 100 characters
    pub country: Option<String>,

    /// Defaults to true
    pub active: Option<bool>,
}

// ===== Spanish DTOs =====

/// Banco response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BancoDto {
    pub id: i64,

    #[schema(example = "B001")]
    pub codigo: String,

    #[schema(example = "Banco Central")]
    pub nombre: String,

    #[schema(example = "España")]
    pub pais: Option<String>,

    pub activo: bool,

    pub fecha_creacion: chrono::DateTime<chrono::Utc>,
}

/// Banco create/update request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BancoRequest {
    #[schema(example = "B001")]
    pub codigo: Option<String>,

    #[schema(example = "Banco Central")]
    pub nombre: Option<String>,

    pub pais: Option<String>,

    pub activo: Option<bool>,
}

// Note: Conversion implementations live in mapper.rs
