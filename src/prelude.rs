//! Prelude module for convenient imports.
//!
//! ```rust
//! use tool_discovery::prelude::*;
//! ```

pub use crate::Error;
pub use crate::Result;

// Tools
pub use crate::tools::{
    ExecuteOptions, FnTool, MetaTools, SchemaTool, Tool, ToolCatalog, ToolFilter,
    ToolSearchConfig,
};
pub use crate::types::{ToolError, ToolResult};

// Types
pub use crate::types::{SearchResult, SearchResults, ToolDescriptor};

// Configuration
pub use crate::config::{ConfigBuilder, ConfigProvider, ConfigProviderExt};
