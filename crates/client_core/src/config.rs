use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context};
use serde::Deserialize;
use shared::protocol::DEFAULT_RELAY_URL;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "contact_form.toml";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub relay_url: String,
    pub database_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.into(),
            database_url: default_database_url(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Settings {
    /// Parsed relay endpoint; only http(s) is accepted.
    pub fn relay_endpoint(&self) -> anyhow::Result<Url> {
        let url = Url::parse(self.relay_url.trim())
            .with_context(|| format!("invalid relay url '{}'", self.relay_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("relay url '{}' must use http or https", self.relay_url);
        }
        Ok(url)
    }

    pub fn prepared_database_url(&self) -> String {
        normalize_database_url(&self.database_url)
    }
}

pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|base| base.join("contact_form"))
}

fn default_database_url() -> String {
    default_data_dir()
        .map(|dir| storage::Storage::sqlite_url_from_path(&dir.join("session.sqlite3")))
        .unwrap_or_else(|| "sqlite://./data/session.sqlite3".into())
}

/// Defaults, then `config_path` (or `contact_form.toml` in the working
/// directory), then the process environment.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let file = match config_path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };
    load_settings_from(file.as_deref(), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        let file_cfg = toml::from_str::<HashMap<String, String>>(raw)
            .map_err(|err| anyhow!("malformed config file: {err}"))?;
        if let Some(v) = file_cfg.get("relay_url") {
            settings.relay_url = v.clone();
        }
        if let Some(v) = file_cfg.get("database_url") {
            settings.database_url = v.clone();
        }
        if let Some(v) = file_cfg.get("log_filter") {
            settings.log_filter = v.clone();
        }
    }

    if let Some(v) = env("RELAY_URL") {
        settings.relay_url = v;
    }
    if let Some(v) = env("APP__RELAY_URL") {
        settings.relay_url = v;
    }

    if let Some(v) = env("DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = env("APP__DATABASE_URL") {
        settings.database_url = v;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

/// Turns a bare path or `sqlite:path` into a `sqlite://` url; other urls
/// pass through. Blank input means the default profile database.
pub fn normalize_database_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return default_database_url();
    }
    if raw.contains("://") || raw.starts_with("sqlite::memory:") {
        return raw.to_string();
    }
    let path = raw.strip_prefix("sqlite:").unwrap_or(raw);
    format!("sqlite://{}", path.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
