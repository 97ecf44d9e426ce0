//! Create `user_settings` table.
//!
//! One row per (user_name, application) pair; the payload column holds the
//! caller's JSON blob verbatim.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(UserSettings::Id))
                    .col(string_len(UserSettings::UserName, 128).not_null())
                    .col(string_len(UserSettings::Application, 128).not_null())
                    .col(text(UserSettings::Payload).not_null())
                    .col(timestamp_with_time_zone(UserSettings::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(UserSettings::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserSettings { Table, Id, UserName, Application, Payload, CreatedAt, UpdatedAt }
