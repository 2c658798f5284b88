//! Core types shared by the catalog, the search indexes and the meta-tools.

pub mod search;
mod tool;

pub use search::{SearchResult, SearchResults};
pub use tool::{ToolDescriptor, ToolError, ToolErrorKind, ToolResult, estimate_tool_tokens};
