pub mod hydrogen;
pub mod shopify;
pub mod sync;

use crate::mcp::{ToolCallResult, ToolDefinition};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Trait that every MCP tool implements.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    async fn call(&self, params: Value) -> ToolCallResult;
}

/// The tools one server instance exposes.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn Tool>>) -> Self {
        Self { tools }
    }

    /// Scaffolding and analysis tools rooted at `project_root`.
    pub fn hydrogen(project_root: &Path) -> Self {
        Self::new(hydrogen::tools(project_root))
    }

    pub fn shopify() -> Self {
        Self::new(shopify::tools())
    }

    pub fn sync() -> Self {
        Self::new(sync::tools())
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub async fn call(&self, name: &str, params: Value) -> ToolCallResult {
        for tool in &self.tools {
            if tool.definition().name == name {
                tracing::info!("Calling tool {}", name);
                return tool.call(params).await;
            }
        }
        tracing::warn!("Unknown tool requested: {}", name);
        ToolCallResult::error(format!("Unknown tool: {name}"))
    }
}

/// Deserialize tool arguments, mapping failures to an `isError` result.
pub(crate) fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, ToolCallResult> {
    serde_json::from_value(params)
        .map_err(|e| ToolCallResult::error(format!("Invalid parameters: {e}")))
}
