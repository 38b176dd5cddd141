use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_uniq(User::LoginId))
                    .col(string(User::Password))
                    .col(string(User::Email))
                    .col(string_null(User::Gender))
                    .col(date_null(User::Dob))
                    .col(string_null(User::Phone))
                    .col(string_null(User::AlternateMobile))
                    .col(string(User::Status))
                    .col(integer(User::RoleId))
                    .col(integer_null(User::ImageId))
                    .col(integer(User::FailedLoginAttempts).default(0))
                    .col(timestamp_with_time_zone_null(User::LastLogin))
                    .col(string(User::CreatedBy))
                    .col(string(User::ModifiedBy))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::ModifiedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    LoginId,
    Password,
    Email,
    Gender,
    Dob,
    Phone,
    AlternateMobile,
    Status,
    RoleId,
    ImageId,
    FailedLoginAttempts,
    LastLogin,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    ModifiedAt,
}
