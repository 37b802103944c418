use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables (and `.env`).
/// Command line flags may override the paths afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub site_dir: PathBuf,
    pub exports_dir: PathBuf,
    pub chrome_bin: String,
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_path: env_or("RESUME_DATA", "docs/data.json").into(),
            site_dir: env_or("SITE_DIR", "docs").into(),
            exports_dir: env_or("EXPORTS_DIR", "exports").into(),
            chrome_bin: env_or("CHROME_BIN", "chromium"),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// The text generation key; only the cover letter needs it.
    pub fn require_gemini_api_key(&self) -> Result<&str> {
        self.gemini_api_key.as_deref().context(
            "Required environment variable 'GEMINI_API_KEY' is not set (add it to your .env file)",
        )
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
