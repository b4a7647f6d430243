use super::{parse_params, Tool};
use crate::mcp::{ToolCallResult, ToolDefinition};
use hf_sync::{ContextSync, GitHubClient, Role, SyncConfig, SyncError};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Build the context tools from `GITHUB_*` environment variables.
pub fn tools() -> Vec<Box<dyn Tool>> {
    let sync = match SyncConfig::from_env() {
        Ok(config) => {
            tracing::info!("Context repository: {}/{}", config.owner, config.repo);
            Some(Arc::new(ContextSync::new(GitHubClient::new(config))))
        }
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    };
    tools_with_sync(sync)
}

pub fn tools_with_sync(sync: Option<Arc<ContextSync>>) -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(ContextPullTool { sync: sync.clone() }),
        Box::new(ContextPushTool { sync: sync.clone() }),
        Box::new(SessionLogTool { sync: sync.clone() }),
        Box::new(ProjectConfigTool { sync }),
    ]
}

fn sync_error(e: SyncError) -> ToolCallResult {
    tracing::warn!("Context sync failed: {e}");
    ToolCallResult::error(e.to_string())
}

macro_rules! require_sync {
    ($sync:expr) => {
        match $sync {
            Some(sync) => sync,
            None => {
                return sync_error(SyncError::MissingConfig(
                    "GITHUB_TOKEN, GITHUB_OWNER and GITHUB_REPO",
                ))
            }
        }
    };
}

// --- claude_context_pull ---

pub struct ContextPullTool {
    sync: Option<Arc<ContextSync>>,
}

#[async_trait::async_trait]
impl Tool for ContextPullTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "claude_context_pull".into(),
            description: "Read the shared .claude/CONTEXT.md file from the context repository.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn call(&self, _params: Value) -> ToolCallResult {
        let sync = require_sync!(&self.sync);
        match sync.context_pull().await {
            Ok(content) => ToolCallResult::text(content),
            Err(e) => sync_error(e),
        }
    }
}

// --- claude_context_push ---

#[derive(Deserialize)]
struct PushInput {
    content: String,
    message: String,
}

pub struct ContextPushTool {
    sync: Option<Arc<ContextSync>>,
}

#[async_trait::async_trait]
impl Tool for ContextPushTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "claude_context_push".into(),
            description: "Replace .claude/CONTEXT.md in the context repository with new content.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "content": {"type": "string", "description": "Full new content of CONTEXT.md"},
                    "message": {"type": "string", "description": "Short summary used in the commit message"}
                },
                "required": ["content", "message"]
            }),
        }
    }

    async fn call(&self, params: Value) -> ToolCallResult {
        let input: PushInput = match parse_params(params) {
            Ok(input) => input,
            Err(invalid) => return invalid,
        };
        let sync = require_sync!(&self.sync);
        match sync.context_push(&input.content, &input.message).await {
            Ok(()) => ToolCallResult::json(&json!({ "success": true }), false),
            Err(e) => sync_error(e),
        }
    }
}

// --- claude_session_log ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionLogInput {
    session_id: String,
    content: String,
}

pub struct SessionLogTool {
    sync: Option<Arc<ContextSync>>,
}

#[async_trait::async_trait]
impl Tool for SessionLogTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "claude_session_log".into(),
            description: "Create a dated session log under .sessions/logs in the context repository.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "sessionId": {"type": "string", "description": "Session identifier (letters, digits, '-' and '_')"},
                    "content": {"type": "string", "description": "Markdown body of the log"}
                },
                "required": ["sessionId", "content"]
            }),
        }
    }

    async fn call(&self, params: Value) -> ToolCallResult {
        let input: SessionLogInput = match parse_params(params) {
            Ok(input) => input,
            Err(invalid) => return invalid,
        };
        let sync = require_sync!(&self.sync);
        match sync.session_log(&input.session_id, &input.content).await {
            Ok(path) => ToolCallResult::json(&json!({ "success": true, "path": path }), false),
            Err(e) => sync_error(e),
        }
    }
}

// --- claude_project_config ---

#[derive(Deserialize)]
struct ProjectConfigInput {
    role: String,
}

pub struct ProjectConfigTool {
    sync: Option<Arc<ContextSync>>,
}

#[async_trait::async_trait]
impl Tool for ProjectConfigTool {
    fn definition(&self) -> ToolDefinition {
        let roles: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
        ToolDefinition {
            name: "claude_project_config".into(),
            description: "Read the project instructions for a role from .claude/projects/<role>.md.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "role": {"type": "string", "enum": roles, "description": "Role to load"}
                },
                "required": ["role"]
            }),
        }
    }

    async fn call(&self, params: Value) -> ToolCallResult {
        let input: ProjectConfigInput = match parse_params(params) {
            Ok(input) => input,
            Err(invalid) => return invalid,
        };
        let role: Role = match input.role.parse() {
            Ok(role) => role,
            Err(e) => return sync_error(e),
        };
        let sync = require_sync!(&self.sync);
        match sync.project_config(role).await {
            Ok(content) => ToolCallResult::text(content),
            Err(e) => sync_error(e),
        }
    }
}
