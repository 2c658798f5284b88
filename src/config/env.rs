//! Environment variable configuration provider.

use super::provider::ConfigProvider;
use super::{ConfigError, ConfigResult};

/// Prefix used by [`EnvConfigProvider::default`].
pub const DEFAULT_ENV_PREFIX: &str = "TOOL_DISCOVERY_";

/// Maps dotted keys onto upper-cased, underscore-joined variable names.
///
/// With the default prefix, `search.min_score` is read from
/// `TOOL_DISCOVERY_SEARCH_MIN_SCORE`.
#[derive(Debug, Clone)]
pub struct EnvConfigProvider {
    prefix: String,
}

impl EnvConfigProvider {
    pub fn new() -> Self {
        Self::prefixed(DEFAULT_ENV_PREFIX)
    }

    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn env_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_uppercase().replace('.', "_"))
    }
}

impl Default for EnvConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ConfigProvider for EnvConfigProvider {
    fn name(&self) -> &str {
        "env"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        match std::env::var(self.env_key(key)) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::Env(e)),
        }
    }

    // Underscores are ambiguous on the way back, so keys come out fully dotted.
    async fn list_keys(&self, prefix: &str) -> ConfigResult<Vec<String>> {
        let env_prefix = self.env_key(prefix);
        let mut keys: Vec<String> = std::env::vars()
            .filter_map(|(name, _)| {
                name.strip_prefix(&self.prefix)
                    .filter(|_| name.starts_with(&env_prefix))
                    .map(|rest| rest.to_lowercase().replace('_', "."))
            })
            .collect();
        keys.sort();
        Ok(keys)
    }
}
