//! Tool registration.
//!
//! A [`ToolRegistry`] describes a set of tools and produces a future for a
//! call by name. The server asks the registry for its tool list and hands
//! every `tools/call` request to [`ToolRegistry::call`].

use std::future::Future;
use std::pin::Pin;

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;

/// The future returned for a single tool call.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// A set of MCP tools.
pub trait ToolRegistry: Send + Sync {
    /// Descriptions of every tool this registry serves.
    fn tools(&self) -> Vec<Tool>;

    /// Start a call to `name`, or `None` if the tool is not served here.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Number of tools served.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Whether a tool named `name` is served.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|tool| tool.name == name)
    }
}
