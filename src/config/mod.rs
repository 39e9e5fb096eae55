use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::extractors::ssstik::DEFAULT_BASE_URL;

// The relay turns away clients that do not look like a desktop browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub locale: String,
    pub user_agent: String,
    /// Seconds; unset keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: "en".to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Defaults when `path` is `None`, otherwise the TOML file at `path`
    /// layered over the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.check()?;

        Ok(config)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn check(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url {:?}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("base_url must be http or https, got {}", url.scheme());
        }
        if self.locale.trim().is_empty() {
            anyhow::bail!("locale must not be empty");
        }
        Ok(())
    }
}
