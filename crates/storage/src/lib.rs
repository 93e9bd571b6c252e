use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use shared::protocol::{SUBMITTED_FLAG_KEY, SUBMITTED_FLAG_VALUE};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

const MEMORY_URL: &str = "sqlite::memory:";

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRecord {
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        create_database_dir(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid sqlite url '{database_url}'"))?
            .create_if_missing(true);
        // Each in-memory connection is its own database, so pin it to one.
        let max_connections = if is_memory_url(database_url) { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_options)
            .await
            .with_context(|| format!("failed to open sqlite database '{database_url}'"))?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run storage migrations")?;
        Ok(Self { pool })
    }

    pub fn sqlite_url_from_path(path: &Path) -> String {
        format!("sqlite://{}", path.display().to_string().replace('\\', "/"))
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    pub async fn load_flag(&self, key: &str) -> Result<Option<FlagRecord>> {
        let row = sqlx::query("SELECT value, updated_at FROM app_flags WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to read flag '{key}'"))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row.try_get("value")?;
        let updated_at: String = row.try_get("updated_at")?;
        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .with_context(|| format!("flag '{key}' has malformed updated_at '{updated_at}'"))?
            .with_timezone(&Utc);
        Ok(Some(FlagRecord { value, updated_at }))
    }

    pub async fn store_flag(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO app_flags (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to write flag '{key}'"))?;
        tracing::debug!(key, "stored flag");
        Ok(())
    }

    /// The submission marker counts as set only when it holds exactly `"true"`.
    pub async fn submitted_flag(&self) -> Result<Option<FlagRecord>> {
        Ok(self
            .load_flag(SUBMITTED_FLAG_KEY)
            .await?
            .filter(|record| record.value == SUBMITTED_FLAG_VALUE))
    }

    pub async fn is_submitted(&self) -> Result<bool> {
        Ok(self.submitted_flag().await?.is_some())
    }

    pub async fn mark_submitted(&self) -> Result<()> {
        self.store_flag(SUBMITTED_FLAG_KEY, SUBMITTED_FLAG_VALUE).await
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.starts_with(MEMORY_URL) || database_url.contains("mode=memory")
}

/// File behind a sqlite url, with any `?options` dropped.
fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    if is_memory_url(database_url) {
        return None;
    }
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let file = rest.split_once('?').map_or(rest, |(file, _)| file);
    (!file.is_empty()).then(|| PathBuf::from(file))
}

fn create_database_dir(database_url: &str) -> Result<()> {
    let dir = sqlite_file_path(database_url)
        .and_then(|file| file.parent().map(Path::to_path_buf))
        .filter(|dir| !dir.as_os_str().is_empty());
    let Some(dir) = dir else {
        return Ok(());
    };
    fs::create_dir_all(&dir).with_context(|| {
        format!(
            "cannot create directory '{}' for sqlite database '{database_url}'",
            dir.display()
        )
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
