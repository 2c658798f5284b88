//! Meta-tools that let an agent discover and invoke catalog tools.
//!
//! Instead of advertising hundreds of tools, an agent is given two:
//! `meta_search_tools` to find candidates for a task and `meta_execute_tool`
//! to call one of them by name.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use tracing::Instrument;

use super::context::ExecuteOptions;
use super::input::decode_input;
use super::registry::ToolCatalog;
use super::search::{ToolSearchConfig, ToolSearchManager};
use super::traits::{SchemaTool, Tool};
use crate::observability::DiscoveryMetrics;
use crate::types::{SearchResults, ToolResult};

pub const SEARCH_TOOL_NAME: &str = "meta_search_tools";
pub const EXECUTE_TOOL_NAME: &str = "meta_execute_tool";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchToolsInput {
    /// Natural language description of what you want to do, e.g. "list employees"
    pub query: String,
    /// Maximum number of tools to return (default 5)
    #[serde(default, deserialize_with = "deserialize_limit")]
    #[schemars(with = "Option<usize>")]
    pub limit: Option<usize>,
    /// Minimum relevance score between 0 and 1 (default 0.3)
    #[serde(default)]
    pub min_score: Option<f64>,
}

/// Accepts whole numbers written as floats (`5.0`), since JSON has one number type.
fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(n) = number.as_u64() {
        return usize::try_from(n).map(Some).map_err(D::Error::custom);
    }
    match number.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 => Ok(Some(f as usize)),
        _ => Err(D::Error::custom(format!(
            "limit must be a non-negative integer, got {number}"
        ))),
    }
}

/// `meta_search_tools`: ranks catalog tools against a query.
pub struct SearchToolsTool {
    manager: Arc<ToolSearchManager>,
}

impl SearchToolsTool {
    pub fn new(manager: Arc<ToolSearchManager>) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl SchemaTool for SearchToolsTool {
    type Input = SearchToolsInput;
    type Output = SearchResults;

    const NAME: &'static str = SEARCH_TOOL_NAME;
    const DESCRIPTION: &'static str = r#"Search for relevant tools using a natural language query.

- Returns the best matching tools with their name, description, parameter schema and a relevance score between 0 and 1
- Use this first to discover which tool can perform a task, then call meta_execute_tool with the chosen name
- Results below minScore are omitted; an empty list means nothing matched"#;

    async fn handle(
        &self,
        input: SearchToolsInput,
        _options: &ExecuteOptions,
    ) -> ToolResult<SearchResults> {
        let config = self.manager.config();
        let limit = input.limit.unwrap_or(config.default_limit);
        let min_score = input
            .min_score
            .map(|s| if s.is_nan() { config.min_score } else { s.clamp(0.0, 1.0) })
            .unwrap_or(config.min_score);

        Ok(self.manager.search(&input.query, limit, min_score).await)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteToolInput {
    /// Exact name of the tool to execute, as returned by meta_search_tools
    pub tool_name: String,
    /// Parameters for the tool, matching its parameter schema
    pub params: Value,
}

/// `meta_execute_tool`: dispatches a call to a catalog tool by name.
pub struct ExecuteToolTool {
    manager: Arc<ToolSearchManager>,
}

impl ExecuteToolTool {
    pub fn new(manager: Arc<ToolSearchManager>) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl SchemaTool for ExecuteToolTool {
    type Input = ExecuteToolInput;
    type Output = Value;

    const NAME: &'static str = EXECUTE_TOOL_NAME;
    const DESCRIPTION: &'static str = r#"Execute a specific tool by name with the given parameters.

- toolName must be a tool returned by meta_search_tools
- params must match the parameter schema of that tool
- Returns the tool's own result unchanged"#;

    async fn handle(&self, input: ExecuteToolInput, options: &ExecuteOptions) -> ToolResult<Value> {
        let params = decode_input(input.params)?;
        let catalog = self.manager.catalog();

        let timed = self
            .manager
            .spans()
            .execute_span(&input.tool_name, options.dry_run);
        let result = catalog
            .execute(&input.tool_name, params, options)
            .instrument(timed.span().clone())
            .await;

        timed.record_error(result.is_err());
        timed.finish();
        self.manager.metrics().record_execution(result.is_ok());

        if let Err(ref e) = result {
            tracing::warn!(tool = %input.tool_name, error = %e, "Tool execution failed");
        }
        result
    }
}

/// The search/execute pair over one catalog snapshot.
///
/// The search index is built on the first search and reused afterwards.
#[derive(Clone)]
pub struct MetaTools {
    manager: Arc<ToolSearchManager>,
}

impl MetaTools {
    pub fn new(catalog: ToolCatalog, config: ToolSearchConfig) -> Self {
        Self::from_manager(ToolSearchManager::new(catalog, config))
    }

    pub fn from_manager(manager: ToolSearchManager) -> Self {
        Self {
            manager: Arc::new(manager),
        }
    }

    pub fn manager(&self) -> &ToolSearchManager {
        &self.manager
    }

    pub fn catalog(&self) -> &ToolCatalog {
        self.manager.catalog()
    }

    pub fn metrics(&self) -> &Arc<DiscoveryMetrics> {
        self.manager.metrics()
    }

    pub fn search_tool(&self) -> SearchToolsTool {
        SearchToolsTool::new(Arc::clone(&self.manager))
    }

    pub fn execute_tool(&self) -> ExecuteToolTool {
        ExecuteToolTool::new(Arc::clone(&self.manager))
    }

    /// Both meta-tools, ready to be advertised like any other tool.
    pub fn tools(&self) -> ToolResult<ToolCatalog> {
        ToolCatalog::from_tools([
            Arc::new(self.search_tool()) as Arc<dyn Tool>,
            Arc::new(self.execute_tool()) as Arc<dyn Tool>,
        ])
    }

    pub async fn search(&self, query: &str, limit: usize, min_score: f64) -> SearchResults {
        self.manager.search(query, limit, min_score).await
    }

    /// Runs `meta_execute_tool` with raw input (object or JSON string).
    pub async fn execute(&self, input: Value, options: &ExecuteOptions) -> ToolResult<Value> {
        Tool::execute(&self.execute_tool(), input, options).await
    }

    /// Runs `meta_search_tools` with raw input (object or JSON string).
    pub async fn search_raw(&self, input: Value) -> ToolResult<Value> {
        Tool::execute(&self.search_tool(), input, &ExecuteOptions::new()).await
    }
}

impl std::fmt::Debug for MetaTools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaTools")
            .field("manager", &self.manager)
            .finish()
    }
}
