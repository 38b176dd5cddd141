use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attachment::Table)
                    .if_not_exists()
                    .col(pk_auto(Attachment::Id))
                    .col(string(Attachment::Name))
                    .col(string(Attachment::ContentType))
                    .col(string(Attachment::Description))
                    .col(string(Attachment::Path))
                    .col(integer(Attachment::UserId))
                    .col(blob(Attachment::Data))
                    .col(string(Attachment::CreatedBy))
                    .col(string(Attachment::ModifiedBy))
                    .col(timestamp_with_time_zone(Attachment::CreatedAt))
                    .col(timestamp_with_time_zone(Attachment::ModifiedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attachment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attachment {
    Table,
    Id,
    Name,
    ContentType,
    Description,
    Path,
    UserId,
    Data,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    ModifiedAt,
}
