use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;
use crate::user_settings;

/// Handle over the settings collection. Holds a connection pool; clones share
/// it. Construct one with [`SettingsStore::new`] and pass it by reference,
/// rather than reaching for ambient globals.
#[derive(Clone)]
pub struct SettingsStore {
    db: DatabaseConnection,
}

impl SettingsStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let db = sea_orm::Database::connect(url)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(Self::new(db))
    }

    /// Serialize `value` and upsert it for the (user, application) pair.
    ///
    /// The write is a single `INSERT .. ON CONFLICT DO UPDATE` against the
    /// unique (user_name, application) index, so concurrent saves for the
    /// same pair resolve to last-committer-wins instead of duplicate rows.
    pub async fn save<T: Serialize>(
        &self,
        value: &T,
        user: &str,
        application: &str,
    ) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let now = Utc::now().into();
        let am = user_settings::ActiveModel {
            user_name: Set(user.to_string()),
            application: Set(application.to_string()),
            payload: Set(payload),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        user_settings::Entity::insert(am)
            .on_conflict(
                OnConflict::columns([
                    user_settings::Column::UserName,
                    user_settings::Column::Application,
                ])
                .update_columns([
                    user_settings::Column::Payload,
                    user_settings::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        tracing::debug!(user, application, "settings saved");
        Ok(())
    }

    /// Fetch the settings for the (user, application) pair, decoded as `T`.
    ///
    /// `Ok(None)` means no record exists for the pair; a payload that does
    /// not parse as `T` is a [`StoreError::Deserialization`].
    pub async fn load<T: DeserializeOwned>(
        &self,
        user: &str,
        application: &str,
    ) -> Result<Option<T>, StoreError> {
        let row = user_settings::Entity::find()
            .filter(user_settings::Column::UserName.eq(user))
            .filter(user_settings::Column::Application.eq(application))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        match row {
            Some(rec) => serde_json::from_str::<T>(&rec.payload)
                .map(Some)
                .map_err(|e| StoreError::Deserialization(e.to_string())),
            None => Ok(None),
        }
    }

    /// Delete every record owned by `user`, across all applications.
    /// Matching zero rows is a success.
    pub async fn remove_all_for_user(&self, user: &str) -> Result<(), StoreError> {
        let res = user_settings::Entity::delete_many()
            .filter(user_settings::Column::UserName.eq(user))
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        tracing::debug!(user, rows = res.rows_affected, "settings removed for user");
        Ok(())
    }

    /// Delete every record for `application`, across all users.
    pub async fn remove_all_for_application(&self, application: &str) -> Result<(), StoreError> {
        let res = user_settings::Entity::delete_many()
            .filter(user_settings::Column::Application.eq(application))
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        tracing::debug!(application, rows = res.rows_affected, "settings removed for application");
        Ok(())
    }

    /// Delete the single record (if any) matching both keys.
    pub async fn remove_for_user_and_application(
        &self,
        user: &str,
        application: &str,
    ) -> Result<(), StoreError> {
        user_settings::Entity::delete_many()
            .filter(user_settings::Column::UserName.eq(user))
            .filter(user_settings::Column::Application.eq(application))
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(())
    }
}
