//! Catalog of tools, keyed by name and ordered by registration.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::access::ToolFilter;
use super::context::ExecuteOptions;
use super::traits::Tool;
use crate::types::{ToolDescriptor, ToolError, ToolResult};

/// Ordered name → tool mapping.
///
/// Registration order is significant: it drives vocabulary id assignment in
/// the search index and breaks ties between equally scored results.
#[derive(Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<Arc<dyn Tool>>,
    positions: HashMap<String, usize>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate names.
    pub fn from_tools(tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> ToolResult<Self> {
        let mut catalog = Self::new();
        for tool in tools {
            catalog.register(tool)?;
        }
        Ok(catalog)
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) -> ToolResult<()> {
        let name = tool.name().to_string();
        if self.positions.contains_key(&name) {
            return Err(ToolError::Duplicate { name });
        }
        self.positions.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    pub fn with_tool(mut self, tool: impl Tool + 'static) -> ToolResult<Self> {
        self.register(Arc::new(tool))?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.positions.get(name).map(|&idx| &self.tools[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Registration index of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor()).collect()
    }

    /// New snapshot containing only tools accepted by `filter`, order preserved.
    pub fn filter(&self, filter: &ToolFilter) -> Self {
        let mut filtered = Self::new();
        for tool in self.tools.iter().filter(|t| filter.is_allowed(t.name())) {
            filtered.positions.insert(tool.name().to_string(), filtered.tools.len());
            filtered.tools.push(Arc::clone(tool));
        }
        filtered
    }

    /// Look up `name` and delegate to its `execute`.
    ///
    /// No timeout or retry is applied here; foreign errors from the tool are
    /// wrapped as [`ToolError::ExecutionFailed`] and recognized kinds are
    /// returned unchanged.
    pub async fn execute(
        &self,
        name: &str,
        params: Value,
        options: &ExecuteOptions,
    ) -> ToolResult<Value> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        tool.execute(params, options)
            .await
            .map_err(|e| ToolError::from_downstream(name, e))
    }
}

impl std::fmt::Debug for ToolCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolCatalog")
            .field("tools", &self.names())
            .finish()
    }
}
