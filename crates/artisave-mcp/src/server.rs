//! rmcp server wiring.
//!
//! [`ArtifactServer`] implements `ServerHandler` by listing the tools of a
//! [`ToolRegistry`] and dispatching calls to it. [`ArtifactServer::serve_stdio`]
//! runs the server until the client disconnects.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, ListToolsResult, PaginatedRequestParams,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde_json::{Map, Value};

use crate::registry::ToolRegistry;

const INSTRUCTIONS: &str = "Saves artifacts to files under a configurable directory. \
    Use save_artifact to write content, set_save_directory to choose where files go, \
    and list_artifacts to see what has been saved.";

/// MCP server exposing the tools of a registry.
pub struct ArtifactServer<R: ToolRegistry> {
    registry: Arc<R>,
    name: String,
    version: String,
}

impl<R: ToolRegistry + 'static> ArtifactServer<R> {
    /// Create a server for `registry`.
    pub fn new(registry: R) -> Self {
        Self {
            registry: Arc::new(registry),
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the server name reported to clients.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the server version reported to clients.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The registry this server dispatches to.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Run a tool by name with already-decoded JSON arguments.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<CallToolResult, ErrorData> {
        log::debug!("Tool call: {name}");
        match self.registry.call(name, args) {
            Some(future) => {
                let result = future.await;
                if let Err(e) = &result {
                    log::warn!("Tool '{name}' failed: {}", e.message);
                }
                result
            }
            None => Err(ErrorData::invalid_params(
                format!("Unknown tool: {name}"),
                None,
            )),
        }
    }

    /// Serve over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        log::info!("Starting {} {} on stdio", self.name, self.version);
        let service = self.serve(stdio()).await.inspect_err(|e| {
            log::error!("serving error: {e:?}");
        })?;
        service.waiting().await?;
        log::info!("Client disconnected");
        Ok(())
    }
}

impl<R: ToolRegistry + 'static> ServerHandler for ArtifactServer<R> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = self.name.clone();
        info.server_info.version = self.version.clone();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.registry.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = Value::Object(request.arguments.unwrap_or_else(Map::new));
        self.dispatch(&request.name, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ArtifactTools;
    use artisave_core::{ArtifactService, ConfigStore, SaveConfig};
    use rmcp::model::ErrorCode;
    use serde_json::json;
    use tempfile::TempDir;

    fn server_in(temp: &TempDir) -> ArtifactServer<ArtifactTools> {
        let service = ArtifactService::new(ConfigStore::new(SaveConfig::new(temp.path())));
        ArtifactServer::new(ArtifactTools::new(service))
    }

    #[test]
    fn test_server_info() {
        let temp = TempDir::new().unwrap();
        let server = server_in(&temp).with_name("artisave").with_version("9.9.9");

        let info = server.get_info();

        assert_eq!(info.server_info.name, "artisave");
        assert_eq!(info.server_info.version, "9.9.9");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("save_artifact"));
    }

    #[test]
    fn test_server_registry() {
        let temp = TempDir::new().unwrap();
        let server = server_in(&temp);
        assert_eq!(server.registry().tool_count(), 5);
    }

    #[tokio::test]
    async fn test_dispatch_save() {
        let temp = TempDir::new().unwrap();
        let server = server_in(&temp);

        let result = server
            .dispatch(
                "save_artifact",
                json!({ "id": "abc", "content": "<p/>", "type": "text/html" }),
            )
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert!(temp.path().join("artifact-abc.html").is_file());
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let temp = TempDir::new().unwrap();
        let server = server_in(&temp);

        let err = server.dispatch("nope", json!({})).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("nope"));
    }
}
