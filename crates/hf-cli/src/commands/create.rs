//! `hydrogen-forge create`: copy a starter template into a new project.

use colored::Colorize;
use hf_common::fs_utils::{copy_dir_filtered, is_directory_empty};
use hf_common::process::{git_init_with_commit, run_command};
use hf_common::project::{detect_package_manager, validate_project_name};
use hf_common::PackageManager;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::CreateArgs;
use crate::error::{CliError, Result};
use crate::mcp_config::{self, McpConfig};
use crate::{output, prompts};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from Hydrogen Forge";

const ENV_TEMPLATE: &str = r#"# Shopify Storefront API
SESSION_SECRET="your-session-secret"
PUBLIC_STOREFRONT_API_TOKEN=""
PUBLIC_STORE_DOMAIN=""

# Optional: Customer Account API
PUBLIC_CUSTOMER_ACCOUNT_API_CLIENT_ID=""
PUBLIC_CUSTOMER_ACCOUNT_API_URL=""
"#;

const GITIGNORE_TEMPLATE: &str = "node_modules
.cache
dist
.env
*.local
.DS_Store
";

pub fn run_create(cwd: &Path, args: CreateArgs) -> Result<()> {
    output::banner("🔨 Hydrogen Forge", "Create a new Hydrogen project");

    let name = match args.name {
        Some(name) => name,
        None => prompts::project_name()?,
    };
    if !validate_project_name(&name) {
        return Err(CliError::user(prompts::PROJECT_NAME_HINT));
    }

    let target = cwd.join(&name);
    if target.exists() && !is_directory_empty(&target) {
        let prompt = format!("Directory {name} is not empty. Continue anyway?");
        if !prompts::confirm(&prompt)? {
            output::info("Cancelled");
            return Ok(());
        }
    }

    let template = locate_template(&args.template, args.templates_dir.as_deref())?;
    tracing::debug!("Using template {}", template.display());

    let total = 2 + usize::from(!args.skip_mcp) + usize::from(!args.skip_git)
        + usize::from(!args.skip_install);
    let mut current = 1;
    let mut next_step = |message: &str| {
        output::step(current, total, message);
        current += 1;
    };

    next_step("Creating project directory...");
    let copied = copy_dir_filtered(&template, &target)?;
    write_if_missing(&target.join(".env"), ENV_TEMPLATE)?;
    write_if_missing(&target.join(".gitignore"), GITIGNORE_TEMPLATE)?;
    tracing::info!("Copied {} template files into {}", copied, target.display());

    next_step("Configuring project...");
    set_package_name(&target.join("package.json"), &name)?;

    if !args.skip_mcp {
        next_step("Writing MCP configuration...");
        write_project_mcp_config(&target)?;
    }

    if !args.skip_git {
        next_step("Initializing git repository...");
        git_init_with_commit(&target, INITIAL_COMMIT_MESSAGE)?;
    }

    let package_manager = args
        .package_manager
        .map(PackageManager::from)
        .unwrap_or_else(|| detect_package_manager(&target));
    let mut install_pending = args.skip_install;

    if !args.skip_install {
        next_step(&format!(
            "Installing dependencies with {}...",
            package_manager.command()
        ));
        if let Err(e) = run_command(package_manager.command(), &["install"], &target) {
            output::failure(&format!("Dependency install failed: {e}"));
            install_pending = true;
        }
    }

    print_next_steps(&name, package_manager, install_pending);
    Ok(())
}

/// Find `<template>` under the explicit templates directory, or under a
/// `templates/` directory next to or above the running executable.
pub fn locate_template(template: &str, templates_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = templates_dir {
        let candidate = dir.join(template);
        return if candidate.is_dir() {
            Ok(candidate)
        } else {
            Err(CliError::user(format!(
                "Template \"{template}\" not found in {}",
                dir.display()
            )))
        };
    }

    let exe = std::env::current_exe()?;
    exe.ancestors()
        .skip(1)
        .map(|dir| dir.join("templates").join(template))
        .find(|candidate| candidate.is_dir())
        .ok_or_else(|| CliError::user(format!("Template \"{template}\" not found")))
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if !path.exists() {
        fs::write(path, content)?;
    }
    Ok(())
}

/// Rename the package; a project without package.json is left alone.
pub fn set_package_name(package_json: &Path, name: &str) -> Result<()> {
    if !package_json.exists() {
        return Ok(());
    }
    let text = fs::read_to_string(package_json)?;
    let mut manifest: Value = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: package_json.to_path_buf(),
        source,
    })?;
    let Some(object) = manifest.as_object_mut() else {
        return Err(CliError::user(format!(
            "{} must contain a JSON object",
            package_json.display()
        )));
    };
    object.insert("name".into(), Value::String(name.to_string()));

    let mut text = serde_json::to_string_pretty(&manifest)
        .map_err(|e| CliError::user(format!("Failed to serialize package.json: {e}")))?;
    text.push('\n');
    fs::write(package_json, text)?;
    Ok(())
}

fn write_project_mcp_config(project: &Path) -> Result<()> {
    let path = project.join(mcp_config::PROJECT_CONFIG_FILE);
    let mut config = McpConfig::load(&path)?;
    config.set_server(mcp_config::HYDROGEN, mcp_config::project_hydrogen_server());
    config.save(&path)
}

fn print_next_steps(name: &str, package_manager: PackageManager, install_pending: bool) {
    let pm = package_manager.command();
    println!();
    output::success(&format!("Project {} created successfully!", name.cyan()));
    println!();
    println!("{}", "Next steps:".bold());
    println!();
    println!("  {} {}", "cd".cyan(), name);
    if install_pending {
        println!("  {}", format!("{pm} install").cyan());
    }
    println!("  {}", format!("{pm} run dev").cyan());
    println!();
    println!("{}", "To connect to Shopify, run:".dimmed());
    println!("  {}", "npx shopify hydrogen link".cyan());
    println!();
    println!("{}", "To set up MCP servers for Claude:".dimmed());
    println!("  {}", "hydrogen-forge setup-mcp".cyan());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn locate_template_in_explicit_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("starter")).unwrap();

        let found = locate_template("starter", Some(dir.path())).unwrap();
        assert_eq!(found, dir.path().join("starter"));

        let err = locate_template("missing", Some(dir.path())).unwrap_err();
        assert!(err.to_string().starts_with("Template \"missing\" not found"));
    }

    #[test]
    fn set_package_name_rewrites_only_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name":"starter","private":true,"scripts":{"dev":"shopify hydrogen dev"}}"#)
            .unwrap();

        set_package_name(&path, "my-store").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "my-store");
        assert_eq!(value["private"], true);
        assert!(text.find("\"name\"").unwrap() < text.find("\"private\"").unwrap());
    }

    #[test]
    fn set_package_name_without_manifest() {
        let dir = TempDir::new().unwrap();
        set_package_name(&dir.path().join("package.json"), "x").unwrap();
        assert!(!dir.path().join("package.json").exists());
    }

    #[test]
    fn write_if_missing_keeps_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "KEEP=1\n").unwrap();

        write_if_missing(&path, ENV_TEMPLATE).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "KEEP=1\n");
    }
}
