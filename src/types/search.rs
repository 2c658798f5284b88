//! Search result types returned by tool discovery.

use serde::{Deserialize, Serialize};

use super::ToolDescriptor;

/// A tool matched by a discovery query, with its fused relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
    /// Always within `[0, 1]`.
    pub score: f64,
}

impl SearchResult {
    pub fn new(descriptor: &ToolDescriptor, score: f64) -> Self {
        Self {
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            parameters: descriptor.parameters.clone(),
            score: score.clamp(0.0, 1.0),
        }
    }
}

/// Output payload of the search meta-tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub tools: Vec<SearchResult>,
}

impl SearchResults {
    pub fn new(tools: Vec<SearchResult>) -> Self {
        Self { tools }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }
}
