//! Database migrations for bank service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_banks::Migration)]
    }
}

mod m20250101_000001_create_banks {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Banks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Banks::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Banks::Catalog).string_len(16).not_null())
                        .col(ColumnDef::new(Banks::Code).string_len(20).not_null())
                        .col(ColumnDef::new(Banks::Name).string_len(200).not_null())
                        .col(ColumnDef::new(Banks::Country).string_len(100))
                        .col(
                            ColumnDef::new(Banks::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Banks::CreationDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            // Authoritative guard for code uniqueness within a catalog
            manager
                .create_index(
                    Index::create()
                        .name("ux_banks_catalog_code")
                        .table(Banks::Table)
                        .col(Banks::Catalog)
                        .col(Banks::Code)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Banks::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Banks {
        Table,
        Id,
        Catalog,
        Code,
        Name,
        Country,
        Active,
        CreationDate,
    }
}
