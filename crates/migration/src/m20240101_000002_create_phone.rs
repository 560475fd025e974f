//! Create `phone` table with FK to `contact`.
//!
//! Deleting a contact cascades to its phone rows.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Phone::Table)
                    .if_not_exists()
                    .col(integer(Phone::Id).primary_key().auto_increment())
                    .col(string_len(Phone::Number, 20).not_null())
                    .col(integer(Phone::ContactId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phone_contact")
                            .from(Phone::Table, Phone::ContactId)
                            .to(Contact::Table, Contact::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Phone::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Phone { Table, Id, Number, ContactId }

#[derive(DeriveIden)]
enum Contact { Table, Id }
