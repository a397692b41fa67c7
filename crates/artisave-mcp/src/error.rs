//! Mapping from core errors to MCP error responses.

use artisave_core::Error;
use rmcp::model::ErrorData;

/// Convert an error into an MCP `ErrorData`.
pub trait McpErrorExt {
    /// Build the MCP error for this value.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for Error {
    fn to_mcp_error(&self) -> ErrorData {
        if self.is_invalid_input() {
            ErrorData::invalid_params(self.to_string(), None)
        } else {
            ErrorData::internal_error(self.to_string(), None)
        }
    }
}
