//! # tool-discovery
//!
//! Tool discovery and meta-execution for agents working with large tool
//! catalogs.
//!
//! Rather than advertising every tool to a model, an agent is handed two
//! meta-tools: `meta_search_tools`, which ranks the catalog against a natural
//! language query with a hybrid TF-IDF/BM25 index, and `meta_execute_tool`,
//! which dispatches a call to the chosen tool by name.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tool_discovery::tools::{ExecuteOptions, FnTool, MetaTools, ToolCatalog, ToolSearchConfig};
//! use tool_discovery::types::ToolDescriptor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tool_discovery::Error> {
//!     let catalog = ToolCatalog::new().with_tool(FnTool::new(
//!         ToolDescriptor::new(
//!             "hris_list_employees",
//!             "List all employees",
//!             serde_json::json!({"type": "object"}),
//!         ),
//!         |_params: serde_json::Value, _options| async move { Ok(serde_json::json!([])) },
//!     ))?;
//!
//!     let meta = MetaTools::new(catalog, ToolSearchConfig::default());
//!     let found = meta.search("list employees", 5, 0.3).await;
//!     println!("{:?}", found.names().collect::<Vec<_>>());
//!
//!     let output = meta
//!         .execute(
//!             serde_json::json!({"toolName": "hris_list_employees", "params": {}}),
//!             &ExecuteOptions::new(),
//!         )
//!         .await?;
//!     println!("{output}");
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod observability;
pub mod prelude;
pub mod tools;
pub mod types;

pub use config::{ConfigBuilder, ConfigProvider, ConfigProviderExt};
pub use observability::{DiscoveryMetrics, DiscoverySpans, ObservabilityConfig, TracingConfig};
pub use tools::{
    ExecuteOptions, FnTool, MetaTools, SchemaTool, Tool, ToolCatalog, ToolFilter,
    ToolSearchConfig, ToolSearchManager,
};
pub use types::{SearchResult, SearchResults, ToolDescriptor, ToolError, ToolErrorKind};

/// Error type for tool-discovery operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A tool lookup, input decode or downstream call failed.
    #[error("Tool error: {0}")]
    Tool(#[from] types::ToolError),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Required environment variable missing or invalid.
    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration or catalog setup errors
    Configuration,
    /// Malformed input supplied by the caller
    InvalidInput,
    /// The requested tool is not in the catalog
    NotFound,
    /// The delegated tool itself failed
    Downstream,
    /// Internal errors (JSON, unexpected states)
    Internal,
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Tool(e) => match e.kind() {
                types::ToolErrorKind::InvalidInput => ErrorCategory::InvalidInput,
                types::ToolErrorKind::ToolNotFound => ErrorCategory::NotFound,
                types::ToolErrorKind::DownstreamExecution => ErrorCategory::Downstream,
                types::ToolErrorKind::Registration => ErrorCategory::Configuration,
            },
            Error::Config(_) | Error::Env(_) => ErrorCategory::Configuration,
            Error::Json(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    /// True when the failure came from the executed tool rather than this crate.
    pub fn is_downstream(&self) -> bool {
        self.category() == ErrorCategory::Downstream
    }

    pub fn tool_error(&self) -> Option<&types::ToolError> {
        match self {
            Error::Tool(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::InvalidValue { key, message } => {
                Error::Config(format!("Invalid value for {}: {}", key, message))
            }
            config::ConfigError::Serialization(e) => Error::Json(e),
            config::ConfigError::Env(e) => Error::Env(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: Error = ToolError::not_found("hris_get_payslip").into();
        assert!(err.to_string().contains("hris_get_payslip"));
    }

    #[test]
    fn test_error_category() {
        let not_found: Error = ToolError::not_found("x").into();
        assert!(not_found.is_not_found());

        let invalid: Error = ToolError::invalid_input("bad").into();
        assert_eq!(invalid.category(), ErrorCategory::InvalidInput);

        let downstream: Error = ToolError::execution_failed("crm_sync", "502").into();
        assert!(downstream.is_downstream());
        assert!(downstream.tool_error().is_some());

        assert!(Error::config("missing catalog").is_configuration_error());
    }

    #[test]
    fn test_config_error_conversion() {
        let config_err = config::ConfigError::invalid_value("search.alpha", "2 is outside [0, 1]");
        let err: Error = config_err.into();
        assert!(matches!(err, Error::Config(ref m) if m.contains("search.alpha")));
        assert!(err.is_configuration_error());
    }
}
