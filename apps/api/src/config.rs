use anyhow::{Context, Result};

/// Default company name used in invitation subjects and signatures.
pub const DEFAULT_COMPANY_NAME: &str = "Our Company";
/// Default overall-match percentage a candidate needs to be shortlisted.
pub const DEFAULT_SHORTLIST_THRESHOLD: u8 = 70;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub company_name: String,
    pub shortlist_threshold: u8,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let shortlist_threshold = std::env::var("SHORTLIST_THRESHOLD")
            .unwrap_or_else(|_| DEFAULT_SHORTLIST_THRESHOLD.to_string())
            .parse::<u8>()
            .context("SHORTLIST_THRESHOLD must be an integer percentage")?;
        if shortlist_threshold > 100 {
            anyhow::bail!("SHORTLIST_THRESHOLD must be between 0 and 100, got {shortlist_threshold}");
        }

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            company_name: std::env::var("COMPANY_NAME")
                .unwrap_or_else(|_| DEFAULT_COMPANY_NAME.to_string()),
            shortlist_threshold,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
