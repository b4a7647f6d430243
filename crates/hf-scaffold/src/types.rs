use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_COMPONENT_DIR: &str = "app/components";
pub const DEFAULT_ROUTE_DIR: &str = "app/routes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    #[default]
    Basic,
    Product,
    Collection,
    Cart,
    Form,
    Layout,
}

impl ComponentType {
    pub const ALL: [ComponentType; 6] = [
        ComponentType::Basic,
        ComponentType::Product,
        ComponentType::Collection,
        ComponentType::Cart,
        ComponentType::Form,
        ComponentType::Layout,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Basic => "basic",
            ComponentType::Product => "product",
            ComponentType::Collection => "collection",
            ComponentType::Cart => "cart",
            ComponentType::Form => "form",
            ComponentType::Layout => "layout",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| ScaffoldError::UnknownType {
                kind: "component",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    #[default]
    Page,
    Resource,
    Collection,
    Product,
    Account,
    Api,
}

impl RouteType {
    pub const ALL: [RouteType; 6] = [
        RouteType::Page,
        RouteType::Resource,
        RouteType::Collection,
        RouteType::Product,
        RouteType::Account,
        RouteType::Api,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteType::Page => "page",
            RouteType::Resource => "resource",
            RouteType::Collection => "collection",
            RouteType::Product => "product",
            RouteType::Account => "account",
            RouteType::Api => "api",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| ScaffoldError::UnknownType {
                kind: "route",
                value: s.to_string(),
            })
    }
}

/// A custom prop added to a generated component's `Props` interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ts_type: String,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropDef {
    pub fn new(name: impl Into<String>, ts_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ts_type: ts_type.into(),
            required: true,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldComponentInput {
    pub name: String,

    /// Template to render. Classified from `name` when omitted.
    #[serde(rename = "type", default)]
    pub component_type: Option<ComponentType>,

    #[serde(default)]
    pub props: Vec<PropDef>,

    #[serde(default = "default_component_dir")]
    pub output_dir: String,

    #[serde(default = "default_true")]
    pub with_styles: bool,

    #[serde(default)]
    pub with_tests: bool,
}

impl ScaffoldComponentInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component_type: None,
            props: Vec::new(),
            output_dir: default_component_dir(),
            with_styles: true,
            with_tests: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldRouteInput {
    pub name: String,

    /// Template to render. Classified from `name` when omitted.
    #[serde(rename = "type", default)]
    pub route_type: Option<RouteType>,

    #[serde(default = "default_true")]
    pub with_loader: bool,

    #[serde(default)]
    pub with_action: bool,

    #[serde(default = "default_true")]
    pub with_meta: bool,

    #[serde(rename = "withGraphQL", default)]
    pub with_graphql: bool,

    #[serde(default = "default_route_dir")]
    pub output_dir: String,
}

impl ScaffoldRouteInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route_type: None,
            with_loader: true,
            with_action: false,
            with_meta: true,
            with_graphql: false,
            output_dir: default_route_dir(),
        }
    }
}

/// Outcome of a scaffold operation, serialized as the MCP tool response.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldResult {
    pub success: bool,
    pub files: Vec<ScaffoldedFile>,
    pub message: String,
}

impl ScaffoldResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            files: Vec::new(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldedFile {
    pub path: String,
    pub created: bool,
}

fn default_true() -> bool {
    true
}

fn default_component_dir() -> String {
    DEFAULT_COMPONENT_DIR.to_string()
}

fn default_route_dir() -> String {
    DEFAULT_ROUTE_DIR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_component_input_defaults() {
        let input: ScaffoldComponentInput =
            serde_json::from_value(json!({"name": "ProductCard"})).unwrap();
        assert_eq!(input.component_type, None);
        assert!(input.props.is_empty());
        assert_eq!(input.output_dir, "app/components");
        assert!(input.with_styles);
        assert!(!input.with_tests);
    }

    #[test]
    fn test_component_input_props_default_required() {
        let input: ScaffoldComponentInput = serde_json::from_value(json!({
            "name": "Badge",
            "type": "basic",
            "props": [{"name": "label", "type": "string"}]
        }))
        .unwrap();
        assert_eq!(input.component_type, Some(ComponentType::Basic));
        assert!(input.props[0].required);
        assert_eq!(input.props[0].ts_type, "string");
    }

    #[test]
    fn test_route_input_wire_names() {
        let input: ScaffoldRouteInput = serde_json::from_value(json!({
            "name": "blog._index",
            "type": "page",
            "withGraphQL": true,
            "withAction": true,
            "withMeta": false
        }))
        .unwrap();
        assert!(input.with_graphql);
        assert!(input.with_action);
        assert!(!input.with_meta);
        assert!(input.with_loader);
        assert_eq!(input.output_dir, "app/routes");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<ScaffoldComponentInput, _> =
            serde_json::from_value(json!({"name": "X", "type": "widget"}));
        assert!(result.is_err());
        assert!("widget".parse::<ComponentType>().is_err());
    }

    #[test]
    fn test_type_from_str_is_case_insensitive() {
        assert_eq!("Product".parse::<ComponentType>().unwrap(), ComponentType::Product);
        assert_eq!("API".parse::<RouteType>().unwrap(), RouteType::Api);
    }
}
