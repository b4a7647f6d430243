//! String templates for generated components and routes.
//!
//! Templates are plain TSX text with `__PLACEHOLDER__` markers. Rendering is
//! substitution only; there is no template language.

pub mod components;
pub mod routes;

pub use components::{component_test_file, render_component};
pub use routes::{render_route, RouteFeatures};

use crate::types::PropDef;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a `className` attribute together with the whitespace before it,
/// whether it shares a line with the tag or sits on its own line.
static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+className="[^"]*""#).unwrap());

/// Remove every `className="..."` attribute from rendered markup.
pub(crate) fn strip_class_names(source: &str) -> String {
    CLASS_ATTR.replace_all(source, "").into_owned()
}

/// Interface members for custom props, one per line, indented two spaces.
pub(crate) fn prop_members(props: &[PropDef]) -> String {
    let mut out = String::new();
    for prop in props {
        if let Some(description) = &prop.description {
            out.push_str(&format!("  /** {description} */\n"));
        }
        let optional = if prop.required { "" } else { "?" };
        out.push_str(&format!("  {}{}: {};\n", prop.name, optional, prop.ts_type));
    }
    out
}

/// Comma-separated prop names for a destructuring pattern.
pub(crate) fn prop_names(props: &[PropDef]) -> String {
    props
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
