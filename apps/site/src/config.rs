use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON content file; the built-in content is served when unset.
    pub content_file: Option<PathBuf>,
    /// Overrides the site name from the content source.
    pub site_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            content_file: None,
            site_name: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: match optional("PORT") {
                Some(port) => port
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?,
                None => defaults.port,
            },
            rust_log: optional("RUST_LOG").unwrap_or(defaults.rust_log),
            content_file: optional("CONTENT_FILE").map(PathBuf::from),
            site_name: optional("SITE_NAME").map(|name| name.trim().to_string()),
        })
    }
}
