//! Execution options forwarded to tools.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Options that accompany a single tool invocation.
///
/// The meta-execute tool hands these to the target tool untouched; what a
/// flag means (for example, whether `dry_run` returns the HTTP request that
/// would have been sent) is up to the tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteOptions {
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ExecuteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_options() {
        let options = ExecuteOptions::dry_run().with_metadata("account_id", "acc-1");
        assert!(options.dry_run);
        assert_eq!(options.metadata("account_id"), Some("acc-1"));
        assert_eq!(options.metadata("missing"), None);
        assert!(!ExecuteOptions::new().dry_run);
    }
}
