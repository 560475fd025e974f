//! Create `contact` table.
//!
//! One row per person; phone numbers live in `phone`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(integer(Contact::Id).primary_key().auto_increment())
                    .col(string_len(Contact::Name, 100).not_null())
                    .col(
                        ColumnDef::new(Contact::Email)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Contact::Address)
                            .string_len(200)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Contact::BirthDate)
                            .string_len(10)
                            .null(),
                    )
                    .col(string_len(Contact::Group, 50).not_null().default("default"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, Id, Name, Email, Address, BirthDate, Group }
