//! MCP client configuration files.
//!
//! Both the Claude desktop config and a project's `.mcp.json` share the
//! `{"mcpServers": {name: {command, args?, env?}}}` shape. Entries are
//! merged into the parsed document so unrelated keys survive a rewrite.

use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

pub const SERVER_BINARY: &str = "hf-mcp";
pub const SHOPIFY: &str = "shopify";
pub const HYDROGEN: &str = "hydrogen";
pub const PROJECT_CONFIG_FILE: &str = ".mcp.json";

/// `<config dir>/Claude/claude_desktop_config.json` for this platform.
pub fn claude_desktop_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("Claude").join("claude_desktop_config.json"))
}

pub fn shopify_server(store_domain: &str, access_token: &str) -> Value {
    json!({
        "command": SERVER_BINARY,
        "args": [SHOPIFY],
        "env": {
            "SHOPIFY_STORE_DOMAIN": store_domain,
            "SHOPIFY_ACCESS_TOKEN": access_token,
        }
    })
}

pub fn hydrogen_server() -> Value {
    json!({
        "command": SERVER_BINARY,
        "args": [HYDROGEN],
    })
}

/// Hydrogen server pinned to the directory holding the config file.
pub fn project_hydrogen_server() -> Value {
    json!({
        "command": SERVER_BINARY,
        "args": [HYDROGEN, "--project-root", "."],
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct McpConfig {
    document: Map<String, Value>,
}

impl Default for McpConfig {
    fn default() -> Self {
        let mut document = Map::new();
        document.insert("mcpServers".into(), Value::Object(Map::new()));
        Self { document }
    }
}

impl McpConfig {
    /// Read `path`, or start empty when it does not exist.
    ///
    /// A file that is not a JSON object is an error rather than being
    /// replaced.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        match value {
            Value::Object(mut document) => {
                if !document.get("mcpServers").is_some_and(Value::is_object) {
                    document.insert("mcpServers".into(), Value::Object(Map::new()));
                }
                Ok(Self { document })
            }
            _ => Err(CliError::user(format!(
                "{} must contain a JSON object",
                path.display()
            ))),
        }
    }

    fn servers(&self) -> Option<&Map<String, Value>> {
        self.document.get("mcpServers").and_then(Value::as_object)
    }

    pub fn has_server(&self, name: &str) -> bool {
        self.servers().is_some_and(|s| s.contains_key(name))
    }

    pub fn set_server(&mut self, name: &str, entry: Value) {
        let servers = self
            .document
            .entry("mcpServers")
            .or_insert_with(|| Value::Object(Map::new()));
        if !servers.is_object() {
            *servers = Value::Object(Map::new());
        }
        if let Value::Object(servers) = servers {
            servers.insert(name.to_string(), entry);
        }
    }

    pub fn to_pretty(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.document).map_err(|e| {
            CliError::user(format!("Failed to serialize MCP config: {e}"))
        })?;
        text.push('\n');
        Ok(text)
    }

    /// Write the document atomically, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        hf_scaffold::file_ops::atomic_write(path, self.to_pretty()?.as_bytes())?;
        tracing::debug!("Wrote MCP config {}", path.display());
        Ok(())
    }
}
