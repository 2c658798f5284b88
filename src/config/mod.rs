//! Pluggable, read-only configuration providers.
//!
//! ```rust
//! use tool_discovery::config::{ConfigBuilder, MemoryConfigProvider};
//!
//! let config = ConfigBuilder::new()
//!     .env()
//!     .memory(MemoryConfigProvider::new().value("search.alpha", 0.25))
//!     .build();
//! assert_eq!(config.provider_count(), 2);
//! ```

pub mod composite;
pub mod env;
pub mod json;
pub mod memory;
pub mod provider;

pub use composite::CompositeConfigProvider;
pub use env::{DEFAULT_ENV_PREFIX, EnvConfigProvider};
pub use json::JsonConfigProvider;
pub use memory::MemoryConfigProvider;
pub use provider::{ConfigProvider, ConfigProviderExt};

use thiserror::Error;

/// Errors that can occur in configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

impl ConfigError {
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Builds a [`CompositeConfigProvider`]; providers added first win.
pub struct ConfigBuilder {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add environment variables under [`DEFAULT_ENV_PREFIX`].
    pub fn env(mut self) -> Self {
        self.providers.push(Box::new(EnvConfigProvider::new()));
        self
    }

    pub fn env_with_prefix(mut self, prefix: &str) -> Self {
        self.providers
            .push(Box::new(EnvConfigProvider::prefixed(prefix)));
        self
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.providers
            .push(Box::new(JsonConfigProvider::from_value(value)));
        self
    }

    pub fn memory(mut self, provider: MemoryConfigProvider) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn provider(mut self, provider: Box<dyn ConfigProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn build(self) -> CompositeConfigProvider {
        let mut composite = CompositeConfigProvider::new();
        for provider in self.providers {
            composite.add_provider(provider);
        }
        composite
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid_value("search.alpha", "must be within [0, 1]");
        assert!(err.to_string().contains("search.alpha"));
    }

    #[tokio::test]
    async fn test_config_builder_priority() {
        let config = ConfigBuilder::new()
            .memory(MemoryConfigProvider::new().value("search.limit", 3))
            .json(serde_json::json!({"search": {"limit": 9, "alpha": 0.1}}))
            .build();

        let limit: Option<usize> = config.get("search.limit").await.unwrap();
        let alpha: Option<f64> = config.get("search.alpha").await.unwrap();
        assert_eq!(limit, Some(3));
        assert_eq!(alpha, Some(0.1));
    }
}
