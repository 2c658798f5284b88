//! Closure-backed local tools.

use std::future::Future;

use async_trait::async_trait;
use serde_json::Value;

use super::context::ExecuteOptions;
use super::traits::Tool;
use crate::types::{ToolDescriptor, ToolResult};

/// A tool whose behaviour is an async closure.
///
/// ```rust
/// use tool_discovery::tools::{FnTool, ToolCatalog};
/// use tool_discovery::types::ToolDescriptor;
///
/// let greet = FnTool::new(
///     ToolDescriptor::new("local_greet", "Say hello", serde_json::json!({"type": "object"})),
///     |params: serde_json::Value, _options| async move {
///         Ok(serde_json::json!({"hello": params["name"]}))
///     },
/// );
/// let catalog = ToolCatalog::new().with_tool(greet).unwrap();
/// assert!(catalog.contains("local_greet"));
/// ```
pub struct FnTool<F> {
    descriptor: ToolDescriptor,
    handler: F,
}

impl<F, Fut> FnTool<F>
where
    F: Fn(Value, ExecuteOptions) -> Fut + Send + Sync,
    Fut: Future<Output = ToolResult<Value>> + Send,
{
    pub fn new(descriptor: ToolDescriptor, handler: F) -> Self {
        Self {
            descriptor,
            handler,
        }
    }
}

#[async_trait]
impl<F, Fut> Tool for FnTool<F>
where
    F: Fn(Value, ExecuteOptions) -> Fut + Send + Sync,
    Fut: Future<Output = ToolResult<Value>> + Send,
{
    fn name(&self) -> &str {
        &self.descriptor.name
    }

    fn description(&self) -> &str {
        &self.descriptor.description
    }

    fn parameters(&self) -> Value {
        self.descriptor.parameters.clone()
    }

    async fn execute(&self, params: Value, options: &ExecuteOptions) -> ToolResult<Value> {
        (self.handler)(params, options.clone()).await
    }

    fn descriptor(&self) -> ToolDescriptor {
        self.descriptor.clone()
    }
}
