//! JSON document configuration provider.
//!
//! Nested objects are addressed with dotted keys, so
//! `{"search": {"alpha": 0.3}}` answers `search.alpha`.

use serde_json::Value;

use super::ConfigResult;
use super::provider::ConfigProvider;

#[derive(Debug, Clone)]
pub struct JsonConfigProvider {
    root: Value,
}

impl JsonConfigProvider {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn parse(content: &str) -> ConfigResult<Self> {
        Ok(Self::from_value(serde_json::from_str(content)?))
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |current, part| current.get(part))
    }

    fn collect_keys(value: &Value, path: String, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (name, child) in map {
                    let child_path = if path.is_empty() {
                        name.clone()
                    } else {
                        format!("{}.{}", path, name)
                    };
                    Self::collect_keys(child, child_path, out);
                }
            }
            _ => out.push(path),
        }
    }
}

#[async_trait::async_trait]
impl ConfigProvider for JsonConfigProvider {
    fn name(&self) -> &str {
        "json"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.lookup(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    async fn list_keys(&self, prefix: &str) -> ConfigResult<Vec<String>> {
        let mut keys = Vec::new();
        Self::collect_keys(&self.root, String::new(), &mut keys);
        keys.retain(|k| k.starts_with(prefix));
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_nested_lookup() {
        let provider =
            JsonConfigProvider::parse(r#"{"search": {"alpha": 0.3, "limit": 7}}"#).unwrap();

        assert_eq!(
            provider.get_raw("search.alpha").await.unwrap(),
            Some("0.3".to_string())
        );
        assert_eq!(provider.get_raw("search.missing").await.unwrap(), None);
        assert_eq!(
            provider.list_keys("search").await.unwrap(),
            vec!["search.alpha", "search.limit"]
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(JsonConfigProvider::parse("{search").is_err());
    }
}
