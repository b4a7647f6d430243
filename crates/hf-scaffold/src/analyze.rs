//! Read-only inspection of a Hydrogen project: routes, components, styling
//! and tooling config, plus recommendations for what is missing.

use crate::classify::route_name_to_url_path;
use hf_common::project::{detect_package_manager, PackageManager};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static LOADER_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+(async\s+)?function\s+loader").unwrap());
static ACTION_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+(async\s+)?function\s+action").unwrap());
static META_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+const\s+meta").unwrap());
static PROPS_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:interface|type)\s+(\w+Props)\s*[={]").unwrap());
static NAMED_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\s+\{[^}]+\}\s+from\s+['"]([^'"]+)['"]"#).unwrap());
static COLORS_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"colors:\s*\{([^}]+)\}").unwrap());
static COLOR_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]?(\w+)['"]?\s*:"#).unwrap());

const TAILWIND_CONFIGS: &[&str] = &["tailwind.config.js", "tailwind.config.ts", "tailwind.config.mjs"];
const ESLINT_CONFIGS: &[&str] = &[
    ".eslintrc.js",
    ".eslintrc.json",
    ".eslintrc.yaml",
    "eslint.config.js",
    "eslint.config.mjs",
];
const PRETTIER_CONFIGS: &[&str] = &[".prettierrc", ".prettierrc.js", ".prettierrc.json", "prettier.config.js"];
const ESSENTIAL_ROUTES: &[&str] = &["products.$handle", "collections.$handle", "cart", "_index"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeProjectInput {
    #[serde(default = "default_project_path")]
    pub project_path: String,
    #[serde(default = "default_true")]
    pub include_routes: bool,
    #[serde(default = "default_true")]
    pub include_components: bool,
    #[serde(default = "default_true")]
    pub include_styles: bool,
    #[serde(default = "default_true")]
    pub include_config: bool,
}

impl Default for AnalyzeProjectInput {
    fn default() -> Self {
        Self {
            project_path: default_project_path(),
            include_routes: true,
            include_components: true,
            include_styles: true,
            include_config: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub project_path: String,
    pub is_hydrogen_project: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydrogen_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub react_router_version: Option<String>,
    pub routes: Vec<RouteInfo>,
    pub components: Vec<ComponentInfo>,
    pub styles: StyleConfig,
    pub config: ProjectConfig,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub file: String,
    pub path: String,
    pub has_loader: bool,
    pub has_action: bool,
    pub has_meta: bool,
    #[serde(rename = "hasGraphQL")]
    pub has_graphql: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub file: String,
    pub name: String,
    pub has_props: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props_interface: Option<String>,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub has_tailwind: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tailwind_config: Option<String>,
    pub custom_classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub typescript: bool,
    pub eslint: bool,
    pub prettier: bool,
    pub package_manager: PackageManager,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            typescript: false,
            eslint: false,
            prettier: false,
            package_manager: PackageManager::Unknown,
        }
    }
}

/// Analyze the project at `input.project_path`, resolved against `base`.
///
/// Missing directories and unreadable files degrade to empty sections and
/// recommendations; analysis itself never fails.
pub fn analyze_project(base: &Path, input: &AnalyzeProjectInput) -> ProjectAnalysis {
    let project = resolve_project_path(base, &input.project_path);
    tracing::debug!("Analyzing project at {}", project.display());

    let mut analysis = ProjectAnalysis {
        project_path: project.display().to_string(),
        is_hydrogen_project: false,
        hydrogen_version: None,
        react_router_version: None,
        routes: Vec::new(),
        components: Vec::new(),
        styles: StyleConfig::default(),
        config: ProjectConfig::default(),
        recommendations: Vec::new(),
    };

    match read_package_json(&project) {
        Some(pkg) => {
            let deps = pkg.get("dependencies");
            let dev_deps = pkg.get("devDependencies");
            analysis.is_hydrogen_project = dependency(deps, "@shopify/hydrogen").is_some()
                || dependency(dev_deps, "@shopify/hydrogen").is_some();
            analysis.hydrogen_version = dependency(deps, "@shopify/hydrogen");
            analysis.react_router_version = dependency(deps, "react-router");
            analysis.config.package_manager = detect_package_manager(&project);
        }
        None => analysis.recommendations.push(
            "No package.json found. Run npm init or create a new Hydrogen project.".to_string(),
        ),
    }

    if input.include_routes {
        analysis.routes = analyze_routes(&project);
        if analysis.routes.is_empty() {
            analysis.recommendations.push(
                "No routes found in app/routes/. Create route files to define pages.".to_string(),
            );
        }
    }

    if input.include_components {
        analysis.components = analyze_components(&project);
        if analysis.components.is_empty() {
            analysis.recommendations.push(
                "No components found in app/components/. Consider creating reusable components."
                    .to_string(),
            );
        }
    }

    if input.include_styles {
        analysis.styles = analyze_styles(&project);
        if !analysis.styles.has_tailwind {
            analysis.recommendations.push(
                "Tailwind CSS not detected. Consider adding it for rapid UI development."
                    .to_string(),
            );
        }
    }

    if input.include_config {
        analysis.config = analyze_config(&project);
        if !analysis.config.typescript {
            analysis.recommendations.push(
                "TypeScript not detected. Consider using TypeScript for better type safety."
                    .to_string(),
            );
        }
        if !analysis.config.eslint {
            analysis
                .recommendations
                .push("ESLint not detected. Consider adding it for code quality.".to_string());
        }
    }

    if analysis.is_hydrogen_project {
        add_hydrogen_recommendations(&mut analysis);
    }

    analysis
}

fn resolve_project_path(base: &Path, project_path: &str) -> PathBuf {
    let joined = base.join(project_path);
    fs::canonicalize(&joined).unwrap_or_else(|_| hf_common::fs_utils::normalize_path(&joined))
}

fn read_package_json(project: &Path) -> Option<serde_json::Value> {
    let raw = fs::read_to_string(project.join("package.json")).ok()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Invalid package.json in {}: {}", project.display(), e);
            None
        }
    }
}

fn dependency(section: Option<&serde_json::Value>, name: &str) -> Option<String> {
    section?.get(name)?.as_str().map(str::to_string)
}

/// `.ts`/`.tsx` files directly inside `dir`, sorted by name, with their stem.
fn source_files(dir: &Path) -> Vec<(String, String, PathBuf)> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|e| {
            let file = e.file_name().to_str()?.to_string();
            let stem = file
                .strip_suffix(".tsx")
                .or_else(|| file.strip_suffix(".ts"))?
                .to_string();
            Some((file, stem, e.path()))
        })
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

fn analyze_routes(project: &Path) -> Vec<RouteInfo> {
    source_files(&project.join("app").join("routes"))
        .into_iter()
        .filter_map(|(file, stem, path)| {
            let content = fs::read_to_string(&path).ok()?;
            Some(RouteInfo {
                path: route_name_to_url_path(&stem),
                has_loader: LOADER_EXPORT.is_match(&content),
                has_action: ACTION_EXPORT.is_match(&content),
                has_meta: META_EXPORT.is_match(&content),
                has_graphql: content.contains("#graphql"),
                file,
            })
        })
        .collect()
}

fn analyze_components(project: &Path) -> Vec<ComponentInfo> {
    source_files(&project.join("app").join("components"))
        .into_iter()
        .filter(|(file, _, _)| !file.starts_with("__"))
        .filter_map(|(file, name, path)| {
            let content = fs::read_to_string(&path).ok()?;
            let props_interface = PROPS_DECL
                .captures(&content)
                .map(|c| c[1].to_string());
            let imports = NAMED_IMPORT
                .captures_iter(&content)
                .map(|c| c[1].to_string())
                .collect();
            Some(ComponentInfo {
                file,
                name,
                has_props: props_interface.is_some(),
                props_interface,
                imports,
            })
        })
        .collect()
}

fn analyze_styles(project: &Path) -> StyleConfig {
    let mut styles = StyleConfig::default();

    let Some(config_file) = TAILWIND_CONFIGS
        .iter()
        .find(|name| project.join(name).exists())
    else {
        return styles;
    };

    styles.has_tailwind = true;
    styles.tailwind_config = Some(config_file.to_string());

    if let Ok(content) = fs::read_to_string(project.join(config_file)) {
        if let Some(block) = COLORS_BLOCK.captures(&content) {
            styles.custom_classes = COLOR_KEY
                .captures_iter(&block[1])
                .map(|c| format!("bg-{}-*", &c[1]))
                .collect();
        }
    }

    styles
}

fn analyze_config(project: &Path) -> ProjectConfig {
    let any_exists = |names: &[&str]| names.iter().any(|n| project.join(n).exists());

    ProjectConfig {
        typescript: project.join("tsconfig.json").exists(),
        eslint: any_exists(ESLINT_CONFIGS),
        prettier: any_exists(PRETTIER_CONFIGS),
        package_manager: detect_package_manager(project),
    }
}

fn add_hydrogen_recommendations(analysis: &mut ProjectAnalysis) {
    let stems: Vec<&str> = analysis
        .routes
        .iter()
        .map(|r| {
            r.file
                .strip_suffix(".tsx")
                .or_else(|| r.file.strip_suffix(".ts"))
                .unwrap_or(&r.file)
        })
        .collect();

    for route in ESSENTIAL_ROUTES {
        if !stems.iter().any(|s| s.contains(route)) {
            analysis
                .recommendations
                .push(format!("Consider adding route: {route} for a complete storefront"));
        }
    }

    let without_loaders = analysis
        .routes
        .iter()
        .filter(|r| !r.has_loader && !r.file.starts_with("api."))
        .count();
    if without_loaders > 0 {
        analysis.recommendations.push(format!(
            "{without_loaders} routes without loaders. Consider adding data loading."
        ));
    }

    if !analysis.routes.is_empty() && !analysis.routes.iter().any(|r| r.has_graphql) {
        analysis.recommendations.push(
            "No GraphQL queries detected. Use storefront.query() for data fetching.".to_string(),
        );
    }
}

fn default_project_path() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}
