use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // UserSettings: composite unique (user_name, application).
        // The upsert in the store relies on this constraint.
        manager
            .create_index(
                Index::create()
                    .name("uniq_user_settings_owner_app")
                    .table(UserSettings::Table)
                    .col(UserSettings::UserName)
                    .col(UserSettings::Application)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // UserSettings: per-key indexes backing the bulk deletes
        manager
            .create_index(
                Index::create()
                    .name("idx_user_settings_owner")
                    .table(UserSettings::Table)
                    .col(UserSettings::UserName)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_user_settings_app")
                    .table(UserSettings::Table)
                    .col(UserSettings::Application)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_user_settings_owner_app")
                    .table(UserSettings::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_settings_owner")
                    .table(UserSettings::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_settings_app")
                    .table(UserSettings::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum UserSettings { Table, UserName, Application }
