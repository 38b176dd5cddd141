use sea_orm_migration::{prelude::*, schema::*};

/// Fixed RFC 3339 stamp for seeded rows so every backend decodes it the same way.
const SEEDED_AT: &str = "2026-01-05T00:00:00Z";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(string_uniq(Role::Name))
                    .col(string(Role::Description))
                    .col(string(Role::Status))
                    .col(string(Role::CreatedBy))
                    .col(string(Role::ModifiedBy))
                    .col(timestamp_with_time_zone(Role::CreatedAt))
                    .col(timestamp_with_time_zone(Role::ModifiedAt))
                    .to_owned(),
            )
            .await?;

        // Seed the two roles every deployment relies on: 1 = admin, 2 = default member role
        let seed = Query::insert()
            .into_table(Role::Table)
            .columns([
                Role::Id,
                Role::Name,
                Role::Description,
                Role::Status,
                Role::CreatedBy,
                Role::ModifiedBy,
                Role::CreatedAt,
                Role::ModifiedAt,
            ])
            .values_panic([
                1.into(),
                "Admin".into(),
                "System administrator".into(),
                "Active".into(),
                "system".into(),
                "system".into(),
                SEEDED_AT.into(),
                SEEDED_AT.into(),
            ])
            .values_panic([
                2.into(),
                "Student".into(),
                "Default role for self-registered users".into(),
                "Active".into(),
                "system".into(),
                "system".into(),
                SEEDED_AT.into(),
                SEEDED_AT.into(),
            ])
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    Name,
    Description,
    Status,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    ModifiedAt,
}
