//! Name-based classification and route-name helpers.
//!
//! Route names follow React Router flat-file conventions: `.` separates
//! segments, `$param` marks a dynamic segment, `_index` marks an index route,
//! a leading `_` marks a pathless layout and `[...]` escapes literal text.

use crate::types::{ComponentType, RouteType};
use regex::Regex;
use std::sync::LazyLock;

static COMPONENT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap());

static ROUTE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z$_.\[\]]+$").unwrap());

/// Pick a component template from keywords in the name.
pub fn detect_component_type(name: &str) -> ComponentType {
    let lower = name.to_lowercase();

    if lower.contains("product") {
        ComponentType::Product
    } else if lower.contains("collection") {
        ComponentType::Collection
    } else if lower.contains("cart") {
        ComponentType::Cart
    } else if lower.contains("form") {
        ComponentType::Form
    } else if lower.contains("layout") {
        ComponentType::Layout
    } else {
        ComponentType::Basic
    }
}

/// Pick a route template from the route name.
pub fn detect_route_type(name: &str) -> RouteType {
    let lower = name.to_lowercase();

    if lower.starts_with("api.") {
        RouteType::Api
    } else if lower.starts_with("account") {
        RouteType::Account
    } else if lower.contains("product") {
        RouteType::Product
    } else if lower.contains("collection") {
        RouteType::Collection
    } else {
        RouteType::Page
    }
}

pub fn is_valid_component_name(name: &str) -> bool {
    COMPONENT_NAME.is_match(name)
}

pub fn is_valid_route_name(name: &str) -> bool {
    ROUTE_NAME.is_match(name)
}

/// Convert a flat route file name into the URL it serves.
///
/// `products.$handle` → `/products/:handle`, `collections._index` →
/// `/collections`, `[sitemap.xml]` → `/sitemap.xml`.
pub fn route_name_to_url_path(name: &str) -> String {
    let name = name.strip_suffix("._index").unwrap_or(name);

    let mut path = String::with_capacity(name.len() + 1);
    path.push('/');

    let mut escaped = false;
    for c in name.chars() {
        match c {
            '[' if !escaped => escaped = true,
            ']' if escaped => escaped = false,
            _ if escaped => path.push(c),
            '.' => path.push('/'),
            '$' => path.push(':'),
            _ => path.push(c),
        }
    }
    path
}

/// Title for a route, also used as its component identifier: the last
/// segment reduced to ASCII alphanumerics and capitalized.
pub fn route_title(name: &str) -> String {
    let last = name.rsplit('.').next().unwrap_or_default();
    let cleaned: String = last.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Page".to_string(),
    }
}

/// Explain where a route file lives and which conventions its name uses.
pub fn route_notes(name: &str, output_dir: &str) -> String {
    let mut info = vec![
        format!("URL Path: {}", route_name_to_url_path(name)),
        format!("File: {}/{}.tsx", output_dir.trim_end_matches('/'), name),
    ];

    if name.contains('$') {
        info.push("Dynamic segment: Use params.paramName to access dynamic values".to_string());
    }
    if name.contains("_index") {
        info.push("Index route: Renders at the parent folder URL".to_string());
    }
    if name.starts_with('_') {
        info.push("Pathless layout: Does not add to URL, used for shared layouts".to_string());
    }
    if name.contains('[') && name.contains(']') {
        info.push("Escaped route: Square brackets are used literally in URL".to_string());
    }

    info.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_component_type_keywords() {
        assert_eq!(detect_component_type("ProductCard"), ComponentType::Product);
        assert_eq!(detect_component_type("FeaturedCollection"), ComponentType::Collection);
        assert_eq!(detect_component_type("CartDrawer"), ComponentType::Cart);
        assert_eq!(detect_component_type("NewsletterForm"), ComponentType::Form);
        assert_eq!(detect_component_type("PageLayout"), ComponentType::Layout);
        assert_eq!(detect_component_type("Hero"), ComponentType::Basic);
    }

    #[test]
    fn test_detect_component_type_precedence() {
        // "product" wins over "cart" because it is checked first
        assert_eq!(detect_component_type("CartProductRow"), ComponentType::Product);
        assert_eq!(detect_component_type("CollectionForm"), ComponentType::Collection);
    }

    #[test]
    fn test_detect_route_type() {
        assert_eq!(detect_route_type("api.webhook"), RouteType::Api);
        assert_eq!(detect_route_type("account.orders"), RouteType::Account);
        assert_eq!(detect_route_type("products.$handle"), RouteType::Product);
        assert_eq!(detect_route_type("collections.$handle"), RouteType::Collection);
        assert_eq!(detect_route_type("_index"), RouteType::Page);
        assert_eq!(detect_route_type("about"), RouteType::Page);
        // "api" must be a full first segment
        assert_eq!(detect_route_type("apiary"), RouteType::Page);
    }

    #[test]
    fn test_component_name_validation() {
        assert!(is_valid_component_name("ProductCard"));
        assert!(is_valid_component_name("Hero2"));
        assert!(!is_valid_component_name("productCard"));
        assert!(!is_valid_component_name("Product-Card"));
        assert!(!is_valid_component_name(""));
    }

    #[test]
    fn test_route_name_validation() {
        assert!(is_valid_route_name("products.$handle"));
        assert!(is_valid_route_name("collections._index"));
        assert!(is_valid_route_name("[sitemap.xml]"));
        assert!(!is_valid_route_name("products/handle"));
        assert!(!is_valid_route_name("blog-posts"));
        assert!(!is_valid_route_name(""));
    }

    #[test]
    fn test_route_name_to_url_path() {
        assert_eq!(route_name_to_url_path("products.$handle"), "/products/:handle");
        assert_eq!(route_name_to_url_path("collections._index"), "/collections");
        assert_eq!(route_name_to_url_path("api.webhook"), "/api/webhook");
        assert_eq!(route_name_to_url_path("[sitemap.xml]"), "/sitemap.xml");
        assert_eq!(route_name_to_url_path("cart"), "/cart");
    }

    #[test]
    fn test_route_title() {
        assert_eq!(route_title("about"), "About");
        assert_eq!(route_title("products.$handle"), "Handle");
        assert_eq!(route_title("collections._index"), "Index");
        assert_eq!(route_title("$"), "Page");
        assert_eq!(route_title("[sitemap.xml]"), "Xml");
    }

    #[test]
    fn test_route_notes() {
        let notes = route_notes("products.$handle", "app/routes");
        assert!(notes.contains("URL Path: /products/:handle"));
        assert!(notes.contains("File: app/routes/products.$handle.tsx"));
        assert!(notes.contains("Dynamic segment"));
        assert!(!notes.contains("Index route"));

        let notes = route_notes("_auth.login", "app/routes/");
        assert!(notes.contains("File: app/routes/_auth.login.tsx"));
        assert!(notes.contains("Pathless layout"));
    }
}
