//! Composite configuration provider.
//!
//! Chains multiple providers; earlier providers have higher priority.

use std::collections::BTreeSet;

use super::ConfigResult;
use super::provider::ConfigProvider;

pub struct CompositeConfigProvider {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl CompositeConfigProvider {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a provider (first added = highest priority)
    pub fn add_provider(&mut self, provider: Box<dyn ConfigProvider>) {
        self.providers.push(provider);
    }

    pub fn provider(mut self, provider: Box<dyn ConfigProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl Default for CompositeConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ConfigProvider for CompositeConfigProvider {
    fn name(&self) -> &str {
        "composite"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        for provider in &self.providers {
            if let Some(value) = provider.get_raw(key).await? {
                tracing::trace!(key, provider = provider.name(), "config value resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    async fn list_keys(&self, prefix: &str) -> ConfigResult<Vec<String>> {
        let mut all_keys = BTreeSet::new();
        for provider in &self.providers {
            all_keys.extend(provider.list_keys(prefix).await?);
        }
        Ok(all_keys.into_iter().collect())
    }
}

impl std::fmt::Debug for CompositeConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeConfigProvider")
            .field("provider_names", &self.provider_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::memory::MemoryConfigProvider;

    #[tokio::test]
    async fn test_composite_provider_priority() {
        let high = MemoryConfigProvider::named("high").value("search.alpha", 0.5);
        let low = MemoryConfigProvider::named("low")
            .value("search.alpha", 0.1)
            .value("search.limit", 8);

        let composite = CompositeConfigProvider::new()
            .provider(Box::new(high))
            .provider(Box::new(low));

        assert_eq!(
            composite.get_raw("search.alpha").await.unwrap(),
            Some("0.5".to_string())
        );
        assert_eq!(
            composite.get_raw("search.limit").await.unwrap(),
            Some("8".to_string())
        );
        assert_eq!(composite.provider_names(), vec!["high", "low"]);
    }

    #[tokio::test]
    async fn test_composite_list_keys_deduplicates() {
        let a = MemoryConfigProvider::named("a").value("search.alpha", 0.5);
        let b = MemoryConfigProvider::named("b")
            .value("search.alpha", 0.1)
            .value("search.limit", 3);

        let composite = CompositeConfigProvider::new()
            .provider(Box::new(a))
            .provider(Box::new(b));

        let keys = composite.list_keys("search.").await.unwrap();
        assert_eq!(keys, vec!["search.alpha", "search.limit"]);
    }
}
