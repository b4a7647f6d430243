//! Write rendered components and routes into a project.

use crate::classify::{
    detect_component_type, detect_route_type, is_valid_component_name, is_valid_route_name,
    route_notes,
};
use crate::error::ScaffoldError;
use crate::file_ops::atomic_create;
use crate::templates::{component_test_file, render_component, render_route, RouteFeatures};
use crate::types::{ScaffoldComponentInput, ScaffoldResult, ScaffoldRouteInput, ScaffoldedFile};
use hf_common::fs_utils::resolve_within_root;
use std::path::{Path, PathBuf};

/// Generate a component (and optionally its smoke test) under `root`.
///
/// Never panics; every failure is reported through the returned
/// [`ScaffoldResult`].
pub fn scaffold_component(root: &Path, input: &ScaffoldComponentInput) -> ScaffoldResult {
    let mut written = Vec::new();
    match write_component(root, input, &mut written) {
        Ok(message) => {
            tracing::info!("Scaffolded component {} ({} files)", input.name, written.len());
            ScaffoldResult {
                success: true,
                files: written,
                message,
            }
        }
        Err(e) => {
            tracing::warn!("Component scaffold failed for {}: {}", input.name, e);
            ScaffoldResult {
                success: false,
                files: written,
                message: failure_message("component", &e),
            }
        }
    }
}

/// Generate a route module under `root`.
pub fn scaffold_route(root: &Path, input: &ScaffoldRouteInput) -> ScaffoldResult {
    let mut written = Vec::new();
    match write_route(root, input, &mut written) {
        Ok(message) => {
            tracing::info!("Scaffolded route {}", input.name);
            ScaffoldResult {
                success: true,
                files: written,
                message,
            }
        }
        Err(e) => {
            tracing::warn!("Route scaffold failed for {}: {}", input.name, e);
            ScaffoldResult {
                success: false,
                files: written,
                message: failure_message("route", &e),
            }
        }
    }
}

/// Validation problems read as-is; I/O problems get a prefix.
fn failure_message(kind: &str, err: &ScaffoldError) -> String {
    match err {
        ScaffoldError::MkdirError { .. } | ScaffoldError::WriteError { .. } => {
            format!("Failed to scaffold {kind}: {err}")
        }
        _ => err.to_string(),
    }
}

fn write_component(
    root: &Path,
    input: &ScaffoldComponentInput,
    written: &mut Vec<ScaffoldedFile>,
) -> Result<String, ScaffoldError> {
    if !is_valid_component_name(&input.name) {
        return Err(ScaffoldError::InvalidComponentName(input.name.clone()));
    }

    let component_type = input
        .component_type
        .unwrap_or_else(|| detect_component_type(&input.name));
    tracing::debug!("Component {} resolved to type {}", input.name, component_type);

    let dir = resolve_within_root(root, &input.output_dir).map_err(ScaffoldError::OutputDir)?;
    let component_path = dir.join(format!("{}.tsx", input.name));
    let test_path = input.with_tests.then(|| {
        dir.join("__tests__")
            .join(format!("{}.test.tsx", input.name))
    });

    // Check every target before writing any of them.
    for path in std::iter::once(&component_path).chain(test_path.as_ref()) {
        if path.exists() {
            return Err(ScaffoldError::FileAlreadyExists(path.clone()));
        }
    }

    let code = render_component(
        &input.name,
        component_type,
        &input.props,
        input.with_styles,
    );
    create(&component_path, &code, written)?;

    if let Some(test_path) = test_path {
        create(&test_path, &component_test_file(&input.name), written)?;
    }

    Ok(format!(
        "Successfully created {} component \"{}\" with {} file(s)",
        component_type,
        input.name,
        written.len()
    ))
}

fn write_route(
    root: &Path,
    input: &ScaffoldRouteInput,
    written: &mut Vec<ScaffoldedFile>,
) -> Result<String, ScaffoldError> {
    if !is_valid_route_name(&input.name) {
        return Err(ScaffoldError::InvalidRouteName(input.name.clone()));
    }

    let route_type = input
        .route_type
        .unwrap_or_else(|| detect_route_type(&input.name));
    tracing::debug!("Route {} resolved to type {}", input.name, route_type);

    let dir = resolve_within_root(root, &input.output_dir).map_err(ScaffoldError::OutputDir)?;
    let route_path: PathBuf = dir.join(format!("{}.tsx", input.name));
    if route_path.exists() {
        return Err(ScaffoldError::FileAlreadyExists(route_path));
    }

    let features = RouteFeatures {
        loader: input.with_loader,
        action: input.with_action,
        meta: input.with_meta,
        graphql: input.with_graphql,
    };
    let code = render_route(&input.name, route_type, features);
    create(&route_path, &code, written)?;

    Ok(format!(
        "Successfully created {} route \"{}\".\n{}",
        route_type,
        input.name,
        route_notes(&input.name, &input.output_dir)
    ))
}

fn create(path: &Path, content: &str, written: &mut Vec<ScaffoldedFile>) -> Result<(), ScaffoldError> {
    atomic_create(path, content.as_bytes())?;
    written.push(ScaffoldedFile {
        path: path.display().to_string(),
        created: true,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentType, RouteType};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_component_classified_from_name() {
        let dir = TempDir::new().unwrap();
        let result = scaffold_component(dir.path(), &ScaffoldComponentInput::new("ProductCard"));

        assert!(result.success, "{}", result.message);
        assert_eq!(
            result.message,
            "Successfully created product component \"ProductCard\" with 1 file(s)"
        );
        let code = fs::read_to_string(dir.path().join("app/components/ProductCard.tsx")).unwrap();
        assert!(code.contains("export interface ProductCardProps"));
    }

    #[test]
    fn test_explicit_type_overrides_classifier() {
        let dir = TempDir::new().unwrap();
        let mut input = ScaffoldComponentInput::new("ProductCard");
        input.component_type = Some(ComponentType::Basic);

        let result = scaffold_component(dir.path(), &input);
        assert!(result.success);
        assert!(result.message.starts_with("Successfully created basic component"));
    }

    #[test]
    fn test_invalid_component_name_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let result = scaffold_component(dir.path(), &ScaffoldComponentInput::new("productCard"));

        assert!(!result.success);
        assert!(result.files.is_empty());
        assert!(result.message.contains("Must be PascalCase"));
        assert!(!dir.path().join("app").exists());
    }

    #[test]
    fn test_existing_test_file_blocks_component_write() {
        let dir = TempDir::new().unwrap();
        let tests_dir = dir.path().join("app/components/__tests__");
        fs::create_dir_all(&tests_dir).unwrap();
        fs::write(tests_dir.join("Hero.test.tsx"), "existing").unwrap();

        let mut input = ScaffoldComponentInput::new("Hero");
        input.with_tests = true;
        let result = scaffold_component(dir.path(), &input);

        assert!(!result.success);
        assert!(result.message.contains("already exists"));
        assert!(!dir.path().join("app/components/Hero.tsx").exists());
    }

    #[test]
    fn test_component_with_tests_reports_two_files() {
        let dir = TempDir::new().unwrap();
        let mut input = ScaffoldComponentInput::new("Hero");
        input.with_tests = true;

        let result = scaffold_component(dir.path(), &input);
        assert!(result.success);
        assert_eq!(result.files.len(), 2);
        assert!(result.files.iter().all(|f| f.created));
        assert!(dir
            .path()
            .join("app/components/__tests__/Hero.test.tsx")
            .exists());
    }

    #[test]
    fn test_output_dir_outside_root_rejected() {
        let dir = TempDir::new().unwrap();
        let mut input = ScaffoldComponentInput::new("Hero");
        input.output_dir = "../outside".into();

        let result = scaffold_component(dir.path(), &input);
        assert!(!result.success);
        assert!(result.message.contains("escapes project root"));
    }

    #[test]
    fn test_route_message_carries_notes() {
        let dir = TempDir::new().unwrap();
        let result = scaffold_route(dir.path(), &ScaffoldRouteInput::new("products.$handle"));

        assert!(result.success);
        assert!(result
            .message
            .starts_with("Successfully created product route \"products.$handle\".\n"));
        assert!(result.message.contains("URL Path: /products/:handle"));
        assert!(dir.path().join("app/routes/products.$handle.tsx").exists());
    }

    #[test]
    fn test_route_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let mut input = ScaffoldRouteInput::new("about");
        input.route_type = Some(RouteType::Page);

        assert!(scaffold_route(dir.path(), &input).success);
        let second = scaffold_route(dir.path(), &input);
        assert!(!second.success);
        assert!(second.message.starts_with("File already exists at"));
    }

    #[test]
    fn test_invalid_route_name() {
        let dir = TempDir::new().unwrap();
        let result = scaffold_route(dir.path(), &ScaffoldRouteInput::new("blog/posts"));
        assert!(!result.success);
        assert!(result.message.starts_with("Invalid route name \"blog/posts\""));
    }
}
