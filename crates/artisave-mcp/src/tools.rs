//! MCP tools for saving and listing artifacts.
//!
//! Provides [`ArtifactTools`], a [`ToolRegistry`] that decodes tool
//! arguments and delegates to an [`ArtifactService`].

use std::sync::Arc;

use artisave_core::{Artifact, ArtifactService};
use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::McpErrorExt;
use crate::registry::{ToolRegistry, ToolResult};

pub const SAVE_ARTIFACT: &str = "save_artifact";
pub const SAVE_ARTIFACT_WITH_METADATA: &str = "save_artifact_with_metadata";
pub const SET_SAVE_DIRECTORY: &str = "set_save_directory";
pub const GET_SAVE_DIRECTORY: &str = "get_save_directory";
pub const LIST_ARTIFACTS: &str = "list_artifacts";

/// Content type assumed when a caller does not declare one.
pub const DEFAULT_TYPE: &str = "text/plain";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a `serde_json::Value::Object` to an `Arc<serde_json::Map>`.
fn json_schema(value: Value) -> Arc<Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(Map::new()),
    }
}

/// Input schema generated from an argument type.
fn schema_for<T: JsonSchema>() -> Arc<Map<String, Value>> {
    let schema = schemars::schema_for!(T);
    json_schema(serde_json::to_value(schema).unwrap_or(Value::Null))
}

/// Serialize a value to a successful `CallToolResult`.
fn serialize_response<T: serde::Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn text_response(text: String) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ErrorData> {
    serde_json::from_value(args).map_err(|e| ErrorData::invalid_params(e.to_string(), None))
}

fn make_tool(name: &'static str, description: &'static str, schema: Arc<Map<String, Value>>) -> Tool {
    Tool::new(name, description, schema)
}

fn generate_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `save_artifact`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveArtifactArgs {
    /// Artifact identifier, used in the filename when no title is given.
    /// A short random id is generated when omitted.
    #[serde(default)]
    pub id: Option<String>,
    /// Filename without extension; may contain `/` to create subdirectories.
    #[serde(default)]
    pub title: Option<String>,
    /// Text content to save.
    pub content: String,
    /// Content type, e.g. `text/markdown` or `application/vnd.ant.code`.
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    /// Programming language, used when the type is `application/vnd.ant.code`.
    #[serde(default)]
    pub language: Option<String>,
}

impl SaveArtifactArgs {
    /// Build the artifact these arguments describe.
    pub fn into_artifact(self) -> Artifact {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_id);
        let mut artifact = Artifact::new(id, self.kind, self.content);
        artifact.title = self.title;
        artifact.language = self.language;
        artifact
    }
}

/// Arguments for `save_artifact_with_metadata`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SaveWithMetadataArgs {
    #[serde(flatten)]
    pub artifact: SaveArtifactArgs,
    /// Arbitrary metadata stored next to the content.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Arguments for `set_save_directory`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetSaveDirectoryArgs {
    /// Absolute or relative directory; `~` is expanded.
    pub path: String,
}

/// Arguments for `list_artifacts`.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListArtifactsArgs {
    /// Include size and modification time for each file.
    #[serde(default)]
    pub detailed: bool,
}

/// Arguments for tools that take none.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoArgs {}

// ---------------------------------------------------------------------------
// ArtifactTools
// ---------------------------------------------------------------------------

/// MCP tools backed by an [`ArtifactService`].
///
/// Serves five tools:
/// - `save_artifact`: write content to a file with an inferred extension
/// - `save_artifact_with_metadata`: write content and metadata as JSON
/// - `set_save_directory`: change the save root
/// - `get_save_directory`: report the current config
/// - `list_artifacts`: list saved files relative to the root
pub struct ArtifactTools {
    service: Arc<ArtifactService>,
}

impl ArtifactTools {
    /// Create tools over the given service.
    pub fn new(service: ArtifactService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl ToolRegistry for ArtifactTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                SAVE_ARTIFACT,
                "Save artifact content to a file. The extension is inferred from the \
                 content type and language; a title containing '/' creates subdirectories.",
                schema_for::<SaveArtifactArgs>(),
            ),
            make_tool(
                SAVE_ARTIFACT_WITH_METADATA,
                "Save artifact content together with metadata as a JSON file.",
                schema_for::<SaveWithMetadataArgs>(),
            ),
            make_tool(
                SET_SAVE_DIRECTORY,
                "Set the directory where artifacts are saved, creating it if needed.",
                schema_for::<SetSaveDirectoryArgs>(),
            ),
            make_tool(
                GET_SAVE_DIRECTORY,
                "Get the current artifact save configuration.",
                schema_for::<NoArgs>(),
            ),
            make_tool(
                LIST_ARTIFACTS,
                "List all saved artifacts as paths relative to the save directory.",
                schema_for::<ListArtifactsArgs>(),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let service = Arc::clone(&self.service);

        match name {
            SAVE_ARTIFACT => Some(Box::pin(async move {
                let args: SaveArtifactArgs = parse_args(args)?;
                let artifact = args.into_artifact();
                let path = service
                    .save_artifact(&artifact)
                    .await
                    .map_err(|e| e.to_mcp_error())?;
                text_response(format!("Artifact saved to: {}", path.display()))
            })),

            SAVE_ARTIFACT_WITH_METADATA => Some(Box::pin(async move {
                let args: SaveWithMetadataArgs = parse_args(args)?;
                let metadata = Value::Object(args.metadata);
                let artifact = args.artifact.into_artifact();
                let path = service
                    .save_artifact_with_metadata(&artifact, &metadata)
                    .await
                    .map_err(|e| e.to_mcp_error())?;
                text_response(format!(
                    "Artifact with metadata saved to: {}",
                    path.display()
                ))
            })),

            SET_SAVE_DIRECTORY => Some(Box::pin(async move {
                let args: SetSaveDirectoryArgs = parse_args(args)?;
                let path = service
                    .update_save_path(&args.path)
                    .await
                    .map_err(|e| e.to_mcp_error())?;
                text_response(format!("Save directory set to: {}", path.display()))
            })),

            GET_SAVE_DIRECTORY => Some(Box::pin(async move {
                let config = service.get_config().await;
                serialize_response(&config)
            })),

            LIST_ARTIFACTS => Some(Box::pin(async move {
                let args: ListArtifactsArgs = parse_args(args)?;
                if args.detailed {
                    serialize_response(&service.list_artifact_entries().await)
                } else {
                    serialize_response(&service.list_artifacts().await)
                }
            })),

            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
