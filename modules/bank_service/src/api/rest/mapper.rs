//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract::{Bank, BankDraft, BankInput};

// ===== English conversions =====

impl From<Bank> for BankDto {
    fn from(bank: Bank) -> Self {
        Self {
            id: bank.id,
            code: bank.code,
            name: bank.name,
            country: bank.country,
            active: bank.active,
            creation_date: bank.creation_date,
        }
    }
}

impl From<BankDto> for Bank {
    fn from(dto: BankDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
            name: dto.name,
            country: dto.country,
            active: dto.active,
            creation_date: dto.creation_date,
        }
    }
}

impl From<BankRequest> for BankDraft {
    fn from(req: BankRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            country: req.country,
            active: req.active,
        }
    }
}

impl From<BankInput> for BankRequest {
    fn from(input: BankInput) -> Self {
        Self {
            code: Some(input.code),
            name: Some(input.name),
            country: input.country,
            active: Some(input.active),
        }
    }
}

// ===== Spanish conversions =====

impl From<Bank> for BancoDto {
    fn from(bank: Bank) -> Self {
        Self {
            id: bank.id,
            codigo: bank.code,
            nombre: bank.name,
            pais: bank.country,
            activo: bank.active,
            fecha_creacion: bank.creation_date,
        }
    }
}

impl From<BancoDto> for Bank {
    fn from(dto: BancoDto) -> Self {
        Self {
            id: dto.id,
            code: dto.codigo,
            name: dto.nombre,
            country: dto.pais,
            active: dto.activo,
            creation_date: dto.fecha_creacion,
        }
    }
}

impl From<BancoRequest> for BankDraft {
    fn from(req: BancoRequest) -> Self {
        Self {
            code: req.codigo,
            name: req.nombre,
            country: req.pais,
            active: req.activo,
        }
    }
}

impl From<BankInput> for BancoRequest {
    fn from(input: BankInput) -> Self {
        Self {
            codigo: Some(input.code),
            nombre: Some(input.name),
            pais: input.country,
            activo: Some(input.active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Catalog;

    fn sample() -> Bank {
        Bank {
            id: 1,
            code: "B001".to_string(),
            name: "Banco Central".to_string(),
            country: Some("España".to_string()),
            active: true,
            creation_date: chrono::Utc::now(),
        }
    }

    fn keys(value: serde_json::Value) -> Vec<String> {
        let mut keys: Vec<String> = value
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    fn expected_keys(catalog: Catalog) -> Vec<String> {
        let f = catalog.field_names();
        let mut keys: Vec<String> = [f.id, f.code, f.name, f.country, f.active, f.creation_date]
            .iter()
            .map(|s| s.to_string())
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_record_keys_match_catalog_field_names() {
        let bank_json = serde_json::to_value(BankDto::from(sample())).unwrap();
        assert_eq!(keys(bank_json), expected_keys(Catalog::Bank));

        let banco_json = serde_json::to_value(BancoDto::from(sample())).unwrap();
        assert_eq!(keys(banco_json), expected_keys(Catalog::Banco));
    }

    #[test]
    fn test_request_with_missing_fields_deserializes() {
        let req: BancoRequest = serde_json::from_str(r#"{"codigo": "B001"}"#).unwrap();
        let draft: BankDraft = req.into();
        assert_eq!(draft.code.as_deref(), Some("B001"));
        assert_eq!(draft.name, None);
        assert_eq!(draft.active, None);
    }

    #[test]
    fn test_dto_roundtrips_to_contract_model() {
        let bank = sample();
        let back: Bank = BancoDto::from(bank.clone()).into();
        assert_eq!(back, bank);
    }
}
