//! Tool trait definitions.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::context::ExecuteOptions;
use super::input::parse_input;
use crate::types::{ToolDescriptor, ToolError, ToolResult};

/// Callable unit in a catalog.
///
/// Implementations may be HTTP-backed, RPC-backed or purely local; the
/// catalog only relies on this contract.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters(&self) -> Value;
    async fn execute(&self, params: Value, options: &ExecuteOptions) -> ToolResult<Value>;

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(self.name(), self.description(), self.parameters())
    }
}

/// Schema-based tool trait with typed input and output.
///
/// Input may be given as an object or a JSON string; the schema advertised
/// by the tool is derived from `Input` via schemars.
#[async_trait]
pub trait SchemaTool: Send + Sync {
    type Input: JsonSchema + DeserializeOwned + Send;
    type Output: Serialize + Send;
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    async fn handle(&self, input: Self::Input, options: &ExecuteOptions)
    -> ToolResult<Self::Output>;

    fn input_schema() -> Value {
        let schema = schemars::schema_for!(Self::Input);
        let mut value = serde_json::to_value(schema).unwrap_or_else(|_| {
            serde_json::json!({"type": "object"})
        });

        if let Some(obj) = value.as_object_mut() {
            obj.remove("$schema");
            if !obj.contains_key("properties") {
                obj.insert("properties".to_string(), Value::Object(Default::default()));
            }
        }

        value
    }
}

#[async_trait]
impl<T: SchemaTool + 'static> Tool for T {
    fn name(&self) -> &str {
        T::NAME
    }

    fn description(&self) -> &str {
        T::DESCRIPTION
    }

    fn parameters(&self) -> Value {
        T::input_schema()
    }

    async fn execute(&self, params: Value, options: &ExecuteOptions) -> ToolResult<Value> {
        let typed = parse_input::<T::Input>(params)?;
        let output = SchemaTool::handle(self, typed, options).await?;
        serde_json::to_value(output).map_err(|e| ToolError::execution_failed(T::NAME, e.to_string()))
    }
}
