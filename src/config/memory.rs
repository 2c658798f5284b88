//! In-memory configuration provider, mostly for tests and code-defined settings.

use std::collections::HashMap;

use super::ConfigResult;
use super::provider::ConfigProvider;

#[derive(Debug, Clone, Default)]
pub struct MemoryConfigProvider {
    data: HashMap<String, String>,
    name: String,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            data: HashMap::new(),
            name: name.into(),
        }
    }

    pub fn from_data(data: HashMap<String, String>) -> Self {
        Self {
            data,
            name: "memory".to_string(),
        }
    }

    pub fn value(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.data.insert(key.into(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait::async_trait]
impl ConfigProvider for MemoryConfigProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    async fn list_keys(&self, prefix: &str) -> ConfigResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .data
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::provider::ConfigProviderExt;

    #[tokio::test]
    async fn test_memory_provider_basic() {
        let provider = MemoryConfigProvider::new().value("search.limit", 10);

        assert_eq!(
            provider.get_raw("search.limit").await.unwrap(),
            Some("10".to_string())
        );
        assert_eq!(provider.get_raw("nonexistent").await.unwrap(), None);
        assert_eq!(provider.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_provider_list_keys() {
        let provider = MemoryConfigProvider::new()
            .value("search.alpha", 0.2)
            .value("search.limit", 5)
            .value("other.key", "x");

        let keys = provider.list_keys("search.").await.unwrap();
        assert_eq!(keys, vec!["search.alpha", "search.limit"]);
    }

    #[tokio::test]
    async fn test_memory_provider_typed() {
        let provider = MemoryConfigProvider::new().value("search.alpha", 0.35);

        let alpha: Option<f64> = provider.get("search.alpha").await.unwrap();
        assert_eq!(alpha, Some(0.35));

        let limit: usize = provider.get_or("search.limit", 5).await.unwrap();
        assert_eq!(limit, 5);
    }

    #[tokio::test]
    async fn test_memory_provider_invalid_value() {
        let provider = MemoryConfigProvider::new().value("search.alpha", "high");
        let result: ConfigResult<Option<f64>> = provider.get("search.alpha").await;
        assert!(result.is_err());
    }
}
