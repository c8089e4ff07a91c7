// src/integrations/catalog/config.rs
//
// Remote catalog settings. Defaults target the public PokeAPI; the
// environment may override them.

use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon/";

/// Environment prefix: `POKECATALOG_BASE_URL`, `POKECATALOG_TIMEOUT_SECS`
pub const ENV_PREFIX: &str = "POKECATALOG";

/// Settings as they come out of the environment, before defaults apply
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Always ends with `/`, so `base_url + id` is a valid URL
    base_url: String,

    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl FetcherConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Defaults overridden by `POKECATALOG_BASE_URL` and
    /// `POKECATALOG_TIMEOUT_SECS`
    pub fn from_env() -> AppResult<Self> {
        Self::from_environment(None)
    }

    /// `vars` replaces the process environment when given
    pub(crate) fn from_environment(vars: Option<config::Map<String, String>>) -> AppResult<Self> {
        let raw: RawSettings = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(vars))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| AppError::Validation(format!("Invalid catalog settings: {}", e)))?;

        let mut config = match raw.base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        };
        config.timeout = raw.timeout_secs.map(Duration::from_secs);

        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn record_url(&self, id: u32) -> String {
        format!("{}{}", self.base_url, id)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
