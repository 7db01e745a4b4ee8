//! Contract models for bank service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use std::fmt;

/// Naming variant a bank resource is exposed under.
///
/// Both catalogs share one implementation; the catalog decides the base path,
/// the JSON field names, the message language and the storage partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    /// Spanish naming (`/api/bancos`, `codigo`, `nombre`, ...)
    Banco,
    /// English naming (`/api/banks`, `code`, `name`, ...)
    Bank,
}

/// External names of the bank fields for one catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNames {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub active: &'static str,
    pub creation_date: &'static str,
}

const BANCO_FIELDS: FieldNames = FieldNames {
    id: "id",
    code: "codigo",
    name: "nombre",
    country: "pais",
    active: "activo",
    creation_date: "fechaCreacion",
};

const BANK_FIELDS: FieldNames = FieldNames {
    id: "id",
    code: "code",
    name: "name",
    country: "country",
    active: "active",
    creation_date: "creationDate",
};

impl Catalog {
    /// Every catalog, in registration order
    pub const ALL: [Catalog; 2] = [Catalog::Banco, Catalog::Bank];

    /// Storage discriminator
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Banco => "banco",
            Self::Bank => "bank",
        }
    }

    /// Parse a storage discriminator
    pub fn from_storage(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// REST collection path
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Banco => "/api/bancos",
            Self::Bank => "/api/banks",
        }
    }

    /// Path segment of the self-query endpoint, relative to [`Catalog::base_path`]
    pub fn self_query_segment(self) -> &'static str {
        match self {
            Self::Banco => "consulta-interna",
            Self::Bank => "internal-query",
        }
    }

    pub fn field_names(self) -> FieldNames {
        match self {
            Self::Banco => BANCO_FIELDS,
            Self::Bank => BANK_FIELDS,
        }
    }

    pub fn not_found_message(self, id: i64) -> String {
        match self {
            Self::Banco => format!("Banco no encontrado con id: {id}"),
            Self::Bank => format!("Bank not found with id: {id}"),
        }
    }

    pub fn duplicate_code_message(self, code: &str) -> String {
        match self {
            Self::Banco => format!("Ya existe un banco con el código: {code}"),
            Self::Bank => format!("A bank with the code already exists: {code}"),
        }
    }

    /// Prefix of the summary message returned for validation failures
    pub fn validation_prefix(self) -> &'static str {
        match self {
            Self::Banco => "Error de validación: ",
            Self::Bank => "Validation error: ",
        }
    }

    /// Generic, non-leaking message for unexpected failures
    pub fn internal_error_message(self) -> &'static str {
        match self {
            Self::Banco => "Error interno del servidor",
            Self::Bank => "Internal server error",
        }
    }

    pub fn code_required_message(self) -> &'static str {
        match self {
            Self::Banco => "El código es obligatorio",
            Self::Bank => "Code is required",
        }
    }

    pub fn name_required_message(self) -> &'static str {
        match self {
            Self::Banco => "El nombre es obligatorio",
            Self::Bank => "Name is required",
        }
    }

    pub fn size_message(self, min: usize, max: usize) -> String {
        match self {
            Self::Banco => format!("el tamaño debe estar entre {min} y {max}"),
            Self::Bank => format!("size must be between {min} and {max}"),
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted bank record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    /// Generated identifier, immutable after creation
    pub id: i64,
    /// Business code, unique within the catalog
    pub code: String,
    /// Display name
    pub name: String,
    /// Optional country
    pub country: Option<String>,
    /// Active flag (not related to record existence)
    pub active: bool,
    /// Creation timestamp, written once
    pub creation_date: DateTime<Utc>,
}

/// Validated input for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankInput {
    pub code: String,
    pub name: String,
    pub country: Option<String>,
    pub active: bool,
}

/// Unvalidated input as received from a transport
///
/// Turned into a [`BankInput`] by `domain::validation::into_input`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankDraft {
    pub code: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub active: Option<bool>,
}

impl From<BankInput> for BankDraft {
    fn from(input: BankInput) -> Self {
        Self {
            code: Some(input.code),
            name: Some(input.name),
            country: input.country,
            active: Some(input.active),
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// External field name (catalog specific)
    pub field: String,
    /// Human-readable message (catalog language)
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
