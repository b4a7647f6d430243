use super::{parse_params, Tool};
use crate::mcp::{ToolCallResult, ToolDefinition};
use hf_scaffold::analyze::{analyze_project, AnalyzeProjectInput};
use hf_scaffold::{scaffold_component, scaffold_route, ScaffoldComponentInput, ScaffoldRouteInput};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub fn tools(project_root: &Path) -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(ScaffoldComponentTool::new(project_root)),
        Box::new(ScaffoldRouteTool::new(project_root)),
        Box::new(AnalyzeProjectTool::new(project_root)),
    ]
}

pub struct ScaffoldComponentTool {
    project_root: PathBuf,
}

impl ScaffoldComponentTool {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for ScaffoldComponentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "scaffoldComponent".into(),
            description: "Generate a new Hydrogen/React component with TypeScript types and an \
                optional test file. Supports component types: basic, product, collection, cart, \
                form, layout. When type is omitted it is inferred from the name (\"ProductCard\" \
                becomes a product component). Each type includes the right imports, a props \
                interface and Tailwind CSS classes."
                .into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Component name in PascalCase (e.g., \"ProductCard\", \"CartDrawer\")"
                    },
                    "type": {
                        "type": "string",
                        "enum": ["basic", "product", "collection", "cart", "form", "layout"],
                        "description": "Component type template. Inferred from the name when omitted."
                    },
                    "props": {
                        "type": "array",
                        "description": "Custom props to add to the component",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string", "description": "Prop name"},
                                "type": {"type": "string", "description": "TypeScript type (e.g., \"string\", \"number\")"},
                                "required": {"type": "boolean", "description": "Is prop required?"},
                                "description": {"type": "string", "description": "JSDoc description"}
                            },
                            "required": ["name", "type"]
                        }
                    },
                    "outputDir": {
                        "type": "string",
                        "description": "Output directory relative to project root",
                        "default": "app/components"
                    },
                    "withStyles": {
                        "type": "boolean",
                        "description": "Include Tailwind CSS classes",
                        "default": true
                    },
                    "withTests": {
                        "type": "boolean",
                        "description": "Generate test file",
                        "default": false
                    }
                },
                "required": ["name"]
            }),
        }
    }

    async fn call(&self, params: Value) -> ToolCallResult {
        let input: ScaffoldComponentInput = match parse_params(params) {
            Ok(p) => p,
            Err(e) => return e,
        };
        let result = scaffold_component(&self.project_root, &input);
        ToolCallResult::json(&result, !result.success)
    }
}

pub struct ScaffoldRouteTool {
    project_root: PathBuf,
}

impl ScaffoldRouteTool {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for ScaffoldRouteTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "scaffoldRoute".into(),
            description: "Generate a new Hydrogen/React Router route with loader, action and meta \
                functions. Route types: page (standard page), resource (API-like), collection \
                (product listing), product (product detail), account (authenticated), api (API \
                endpoint). When type is omitted it is inferred from the name. Includes GraphQL \
                query templates for data fetching."
                .into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Route name using React Router conventions (e.g., \"products.$handle\", \"collections._index\", \"api.webhook\")"
                    },
                    "type": {
                        "type": "string",
                        "enum": ["page", "resource", "collection", "product", "account", "api"],
                        "description": "Route type template. Inferred from the name when omitted."
                    },
                    "withLoader": {
                        "type": "boolean",
                        "description": "Include loader function for data fetching",
                        "default": true
                    },
                    "withAction": {
                        "type": "boolean",
                        "description": "Include action function for form handling",
                        "default": false
                    },
                    "withMeta": {
                        "type": "boolean",
                        "description": "Include meta function for SEO",
                        "default": true
                    },
                    "withGraphQL": {
                        "type": "boolean",
                        "description": "Include GraphQL query template",
                        "default": false
                    },
                    "outputDir": {
                        "type": "string",
                        "description": "Output directory relative to project root",
                        "default": "app/routes"
                    }
                },
                "required": ["name"]
            }),
        }
    }

    async fn call(&self, params: Value) -> ToolCallResult {
        let input: ScaffoldRouteInput = match parse_params(params) {
            Ok(p) => p,
            Err(e) => return e,
        };
        let result = scaffold_route(&self.project_root, &input);
        ToolCallResult::json(&result, !result.success)
    }
}

pub struct AnalyzeProjectTool {
    project_root: PathBuf,
}

impl AnalyzeProjectTool {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for AnalyzeProjectTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "analyzeProject".into(),
            description: "Analyze a Hydrogen project structure: scans routes, components, styles \
                and configuration, and recommends improvements to the project setup."
                .into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "projectPath": {
                        "type": "string",
                        "description": "Path to the Hydrogen project, relative to the server's project root",
                        "default": "."
                    },
                    "includeRoutes": {"type": "boolean", "description": "Analyze routes", "default": true},
                    "includeComponents": {"type": "boolean", "description": "Analyze components", "default": true},
                    "includeStyles": {"type": "boolean", "description": "Analyze style configuration", "default": true},
                    "includeConfig": {"type": "boolean", "description": "Analyze project configuration", "default": true}
                }
            }),
        }
    }

    async fn call(&self, params: Value) -> ToolCallResult {
        let input: AnalyzeProjectInput = match parse_params(params) {
            Ok(p) => p,
            Err(e) => return e,
        };
        let analysis = analyze_project(&self.project_root, &input);
        ToolCallResult::json(&analysis, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let tool = ScaffoldComponentTool::new(dir.path());
        let result = tool.call(json!({"type": "product"})).await;

        assert!(result.is_error);
        assert!(result.content[0].text.starts_with("Invalid parameters: missing field `name`"));
    }

    #[tokio::test]
    async fn test_failed_scaffold_is_error_with_payload() {
        let dir = tempfile::tempdir().unwrap();
        let tool = ScaffoldRouteTool::new(dir.path());
        let result = tool.call(json!({"name": "bad/name"})).await;

        assert!(result.is_error);
        let payload: Value = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(payload["success"], false);
        assert_eq!(payload["files"], json!([]));
    }

    #[tokio::test]
    async fn test_analyze_defaults_to_project_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"devDependencies": {"@shopify/hydrogen": "2025.1.0"}}"#,
        )
        .unwrap();

        let result = AnalyzeProjectTool::new(dir.path()).call(json!({})).await;
        assert!(!result.is_error);
        let payload: Value = serde_json::from_str(&result.content[0].text).unwrap();
        assert_eq!(payload["isHydrogenProject"], true);
        assert!(payload.get("hydrogenVersion").is_none());
    }
}
