//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Banks table entity
///
/// Both catalogs share the table; `catalog` partitions the rows and the
/// unique index `ux_banks_catalog_code` covers `(catalog, code)`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "banks")]
pub struct Model {
    /// Generated identifier
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Catalog discriminator ("banco" or "bank")
    pub catalog: String,

    /// Business code
    pub code: String,

    pub name: String,

    pub country: Option<String>,

    pub active: bool,

    /// Creation timestamp, never updated
    pub creation_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
