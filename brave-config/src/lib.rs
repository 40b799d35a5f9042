//! Loader for runtime settings sourced from `BRAVE_SEARCH_*` environment variables.
//!
//! There is no configuration file. The `config` crate maps
//! `BRAVE_SEARCH_API_KEY` to [`SearchConfig::api_key`] and
//! `BRAVE_SEARCH_LOG_DIR` to [`SearchConfig::log_dir`]; anything else under the
//! prefix is ignored.
use config::{Config, Environment, Map};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_PREFIX: &str = "BRAVE_SEARCH";
pub const API_KEY_ENV: &str = "BRAVE_SEARCH_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing BRAVE_SEARCH_API_KEY")]
    MissingApiKey,
    #[error("invalid configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// Subscription token sent as `X-Subscription-Token`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Directory for the optional rolling log file.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl SearchConfig {
    /// The credential, or [`ConfigError::MissingApiKey`] when unset or empty.
    ///
    /// ```
    /// use brave_config::{ConfigError, SearchConfig};
    ///
    /// let cfg = SearchConfig { api_key: Some(String::new()), ..Default::default() };
    /// assert!(matches!(cfg.require_api_key(), Err(ConfigError::MissingApiKey)));
    /// ```
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}

/// Builder hides the `config` crate wiring (environment overlay only).
pub struct SearchConfigLoader {
    env: Environment,
}

impl Default for SearchConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfigLoader {
    /// Read from the process environment with the `BRAVE_SEARCH_` prefix.
    pub fn new() -> Self {
        Self {
            env: Environment::with_prefix(ENV_PREFIX),
        }
    }

    /// Replace the process environment with an explicit set of variables.
    ///
    /// ```
    /// use brave_config::SearchConfigLoader;
    ///
    /// let cfg = SearchConfigLoader::new()
    ///     .with_env_source([("BRAVE_SEARCH_API_KEY", "abc")])
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(cfg.require_api_key().unwrap(), "abc");
    /// assert!(cfg.log_dir.is_none());
    /// ```
    pub fn with_env_source<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.env = self.env.source(Some(map));
        self
    }

    /// Consume the builder and deserialize the environment into [`SearchConfig`].
    pub fn load(self) -> Result<SearchConfig, ConfigError> {
        let cfg = Config::builder().add_source(self.env).build()?;
        let typed: SearchConfig = cfg.try_deserialize()?;
        tracing::debug!(
            has_api_key = typed.api_key.is_some(),
            log_dir = ?typed.log_dir,
            "config.loaded"
        );
        Ok(typed)
    }
}
