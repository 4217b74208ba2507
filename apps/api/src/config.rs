use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Nothing is required; without a key the service runs heuristic-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Server-side default key for the external reviewer. Requests may supply their own.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub ai_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            ai_timeout: Duration::from_secs(60),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_model: optional_env("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_base_url: optional_env("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            ai_timeout: Duration::from_secs(parse_env(
                "AI_TIMEOUT_SECS",
                defaults.ai_timeout.as_secs(),
            )?),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }

    /// Key for one request: the caller's own key, else the server default.
    pub fn resolve_api_key<'a>(&'a self, request_key: Option<&'a str>) -> Option<&'a str> {
        request_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .or(self.openai_api_key.as_deref())
    }
}

/// Unset or blank counts as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.ai_timeout, Duration::from_secs(60));
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_request_key_wins() {
        let config = Config {
            openai_api_key: Some("server".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_api_key(Some("mine")), Some("mine"));
    }

    #[test]
    fn test_blank_request_key_falls_back_to_server_key() {
        let config = Config {
            openai_api_key: Some("server".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_api_key(Some("   ")), Some("server"));
        assert_eq!(config.resolve_api_key(None), Some("server"));
    }

    #[test]
    fn test_no_key_anywhere() {
        assert_eq!(Config::default().resolve_api_key(None), None);
    }

    #[test]
    fn test_parse_env_reports_variable() {
        std::env::set_var("RESUME_REVIEW_TEST_PORT", "not-a-port");
        let err = parse_env::<u16>("RESUME_REVIEW_TEST_PORT", 1).unwrap_err();
        assert!(err.to_string().contains("RESUME_REVIEW_TEST_PORT"));
        std::env::remove_var("RESUME_REVIEW_TEST_PORT");
    }

    #[test]
    fn test_parse_env_default_when_unset() {
        assert_eq!(parse_env::<u64>("RESUME_REVIEW_TEST_UNSET", 42).unwrap(), 42);
    }
}
