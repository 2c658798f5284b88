//! Tool-related types.

mod definition;
mod error;

pub use definition::{ToolDescriptor, estimate_tool_tokens};
pub use error::{ToolError, ToolErrorKind, ToolResult};
