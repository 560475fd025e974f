use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Phone: lookups and replacement by owning contact
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_phone_contact")
                    .table(Phone::Table)
                    .col(Phone::ContactId)
                    .to_owned(),
            )
            .await?;

        // Contact: distinct group listing
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_group")
                    .table(Contact::Table)
                    .col(Contact::Group)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contact_group").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_phone_contact").table(Phone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Phone { Table, ContactId }

#[derive(DeriveIden)]
enum Contact { Table, Group }
