//! Contract error types for bank service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use super::model::{Catalog, FieldViolation};

/// Bank service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// No record with this id in the catalog
    NotFound {
        catalog: Catalog,
        id: i64,
    },
    /// Another record of the catalog already holds this code
    DuplicateCode {
        catalog: Catalog,
        code: String,
    },
    /// Input failed field validation
    Validation {
        catalog: Catalog,
        violations: Vec<FieldViolation>,
    },
    /// Internal error (storage or transport failure)
    Internal,
}

impl BankError {
    /// Summary line for a list of violations: `field: msg; field: msg`
    pub fn violation_summary(violations: &[FieldViolation]) -> String {
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl std::fmt::Display for BankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { catalog, id } => {
                write!(f, "{}", catalog.not_found_message(*id))
            }
            Self::DuplicateCode { catalog, code } => {
                write!(f, "{}", catalog.duplicate_code_message(code))
            }
            Self::Validation {
                catalog,
                violations,
            } => {
                write!(
                    f,
                    "{}{}",
                    catalog.validation_prefix(),
                    Self::violation_summary(violations)
                )
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for BankError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_fields() {
        let err = BankError::Validation {
            catalog: Catalog::Bank,
            violations: vec![
                FieldViolation::new("code", "Code is required"),
                FieldViolation::new("name", "Name is required"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Validation error: code: Code is required; name: Name is required"
        );
    }

    #[test]
    fn test_duplicate_display_mentions_code() {
        let err = BankError::DuplicateCode {
            catalog: Catalog::Banco,
            code: "B001".to_string(),
        };
        assert_eq!(err.to_string(), "Ya existe un banco con el código: B001");
    }
}
