///! ELD API configuration
///!
///! Loaded from a TOML file, from the environment (`ELD_API_URL` /
///! `ELD_API_KEY`), or both with the environment taking precedence.
///! There are no built-in fallback credentials.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_API_URL: &str = "ELD_API_URL";
const ENV_API_KEY: &str = "ELD_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EldConfig {
    /// Base URL of the ELD API, e.g. "https://eld.example.com"
    pub api_base_url: String,

    /// Tenant API key, sent as `X-Api-Key`
    pub api_key: String,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl EldConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: EldConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = std::env::var(ENV_API_URL)
            .with_context(|| format!("{} is not set", ENV_API_URL))?;
        let api_key = std::env::var(ENV_API_KEY)
            .with_context(|| format!("{} is not set", ENV_API_KEY))?;
        Ok(Self {
            api_base_url,
            api_key,
            request_timeout_secs: default_timeout_secs(),
        })
    }

    /// Load from an optional file, then let the environment override the
    /// credentials. Fails if either credential ends up missing or empty.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self {
                api_base_url: String::new(),
                api_key: String::new(),
                request_timeout_secs: default_timeout_secs(),
            },
        };

        if let Ok(url) = std::env::var(ENV_API_URL) {
            config.api_base_url = url;
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            config.api_key = key;
        }

        if config.api_base_url.is_empty() {
            bail!("ELD API base URL not configured (set {} or api_base_url)", ENV_API_URL);
        }
        if config.api_key.is_empty() {
            bail!("ELD API key not configured (set {} or api_key)", ENV_API_KEY);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_full() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_base_url = \"https://eld.example.com\"\napi_key = \"k-123\"\nrequest_timeout_secs = 10"
        )
        .unwrap();

        let config = EldConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://eld.example.com");
        assert_eq!(config.api_key, "k-123");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_from_file_default_timeout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = \"https://eld.example.com\"\napi_key = \"k\"").unwrap();

        let config = EldConfig::from_file(file.path()).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(EldConfig::from_file("/nonexistent/eldsync.toml").is_err());
    }
}
