//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{Bank, BankInput, Catalog};
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use super::entity;

impl From<entity::Model> for Bank {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            country: entity.country,
            active: entity.active,
            creation_date: entity.creation_date,
        }
    }
}

/// Active model for an insert; the id is left to the database
pub fn insert_model(
    catalog: Catalog,
    input: &BankInput,
    creation_date: DateTime<Utc>,
) -> entity::ActiveModel {
    entity::ActiveModel {
        id: NotSet,
        catalog: Set(catalog.as_str().to_string()),
        code: Set(input.code.clone()),
        name: Set(input.name.clone()),
        country: Set(input.country.clone()),
        active: Set(input.active),
        creation_date: Set(creation_date),
    }
}

/// Active model for an update
///
/// `catalog` and `creation_date` stay `NotSet` so the UPDATE never writes them.
pub fn update_model(bank: &Bank) -> entity::ActiveModel {
    entity::ActiveModel {
        id: Unchanged(bank.id),
        catalog: NotSet,
        code: Set(bank.code.clone()),
        name: Set(bank.name.clone()),
        country: Set(bank.country.clone()),
        active: Set(bank.active),
        creation_date: NotSet,
    }
}
