use crate::db::connect_with_config;
use crate::SettingsStore;
use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

fn memory_config() -> configs::DatabaseConfig {
    configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_secs: 5,
        idle_timeout_secs: 600,
        max_lifetime_secs: 3600,
        acquire_timeout_secs: 5,
        sqlx_logging: false,
    }
}

#[tokio::test]
async fn connect_with_config_works() -> Result<()> {
    let cfg = memory_config();
    cfg.validate()?;
    let db = connect_with_config(&cfg).await?;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

#[tokio::test]
async fn store_connects_from_url() -> Result<()> {
    let store = SettingsStore::connect("sqlite::memory:").await;
    assert!(store.is_ok());
    Ok(())
}

#[tokio::test]
async fn migrations_are_idempotent() -> Result<()> {
    use migration::MigratorTrait;

    let db = connect_with_config(&memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    // A second run must be a no-op, not an error
    migration::Migrator::up(&db, None).await?;
    Ok(())
}
