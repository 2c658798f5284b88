//! Tool catalog, execution contract and the discovery meta-tools.

mod access;
mod context;
mod function;
mod input;
pub mod meta;
mod registry;
pub mod search;
mod testing;
mod traits;

pub use access::ToolFilter;
pub use context::ExecuteOptions;
pub use function::FnTool;
pub use input::{decode_input, parse_input};
pub use meta::{
    EXECUTE_TOOL_NAME, ExecuteToolInput, ExecuteToolTool, MetaTools, SEARCH_TOOL_NAME,
    SearchToolsInput, SearchToolsTool,
};
pub use registry::ToolCatalog;
pub use search::{SearchEngine, SearchMode, ToolIndex, ToolSearchConfig, ToolSearchManager};
pub use traits::{SchemaTool, Tool};
