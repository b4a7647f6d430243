//! Integration tests that drive the compiled `hydrogen-forge` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn forge_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hydrogen-forge").expect("Failed to find hydrogen-forge binary");
    cmd.current_dir(dir)
        .env_remove("SHOPIFY_STORE_DOMAIN")
        .env_remove("SHOPIFY_ACCESS_TOKEN")
        .env_remove("HYDROGEN_FORGE_TEMPLATES");
    cmd
}

fn project_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"name":"store"}"#).unwrap();
    dir
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// add
// ============================================================================

#[test]
fn test_add_component() {
    let dir = project_dir();
    forge_cmd(dir.path())
        .args(["add", "component", "ProductCard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("import {ProductCard} from '~/components/ProductCard';"));

    let code = fs::read_to_string(dir.path().join("app/components/ProductCard.tsx")).unwrap();
    assert!(code.contains("ProductCard"));
}

#[test]
fn test_add_route_prints_url() {
    let dir = project_dir();
    forge_cmd(dir.path())
        .args(["add", "route", "products.$handle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL: /products/:handle"));

    assert!(dir.path().join("app/routes/products.$handle.tsx").exists());
}

#[test]
fn test_add_component_custom_dir_and_type() {
    let dir = project_dir();
    forge_cmd(dir.path())
        .args(["add", "component", "Promo", "-d", "app/ui", "-t", "form"])
        .assert()
        .success();

    assert!(dir.path().join("app/ui/Promo.tsx").exists());
}

#[test]
fn test_add_unknown_type_fails() {
    let dir = project_dir();
    forge_cmd(dir.path())
        .args(["add", "component", "Promo", "-t", "widget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_add_requires_package_json() {
    let dir = TempDir::new().unwrap();
    forge_cmd(dir.path())
        .args(["add", "component", "Hero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in a project directory"));
}

#[test]
fn test_add_invalid_component_name() {
    let dir = project_dir();
    forge_cmd(dir.path())
        .args(["add", "component", "hero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PascalCase"));
}

#[test]
fn test_add_existing_file_fails() {
    let dir = project_dir();
    forge_cmd(dir.path()).args(["add", "route", "about"]).assert().success();
    forge_cmd(dir.path())
        .args(["add", "route", "about"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_add_invalid_kind_rejected_by_parser() {
    let dir = project_dir();
    forge_cmd(dir.path())
        .args(["add", "widget", "Hero"])
        .assert()
        .failure();
}

// ============================================================================
// create
// ============================================================================

fn starter_templates() -> TempDir {
    let templates = TempDir::new().unwrap();
    let starter = templates.path().join("starter");
    fs::create_dir_all(starter.join("app/routes")).unwrap();
    fs::create_dir_all(starter.join("node_modules/pkg")).unwrap();
    fs::write(
        starter.join("package.json"),
        r#"{"name":"hydrogen-forge-starter","private":true}"#,
    )
    .unwrap();
    fs::write(starter.join("app/routes/_index.tsx"), "export default function Index() {}\n").unwrap();
    fs::write(starter.join("node_modules/pkg/index.js"), "").unwrap();
    templates
}

#[test]
fn test_create_from_template() {
    let templates = starter_templates();
    let work = TempDir::new().unwrap();

    forge_cmd(work.path())
        .env("HYDROGEN_FORGE_TEMPLATES", templates.path())
        .args(["create", "my-store", "--skip-install", "--skip-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/3]"))
        .stdout(predicate::str::contains("[3/3]"))
        .stdout(predicate::str::contains("created successfully"))
        .stdout(predicate::str::contains("npm install"));

    let project = work.path().join("my-store");
    assert_eq!(read_json(&project.join("package.json"))["name"], "my-store");
    assert!(project.join("app/routes/_index.tsx").exists());
    assert!(!project.join("node_modules").exists());
    assert!(fs::read_to_string(project.join(".env")).unwrap().contains("SESSION_SECRET"));
    assert!(fs::read_to_string(project.join(".gitignore")).unwrap().contains("node_modules"));

    let mcp = read_json(&project.join(".mcp.json"));
    assert_eq!(mcp["mcpServers"]["hydrogen"]["command"], "hf-mcp");
}

#[test]
fn test_create_skip_mcp() {
    let templates = starter_templates();
    let work = TempDir::new().unwrap();

    forge_cmd(work.path())
        .args(["create", "plain-store", "--skip-install", "--skip-git", "--skip-mcp"])
        .arg("--templates-dir")
        .arg(templates.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[2/2]"));

    assert!(!work.path().join("plain-store/.mcp.json").exists());
}

#[test]
fn test_create_rejects_invalid_name() {
    let work = TempDir::new().unwrap();
    forge_cmd(work.path())
        .args(["create", "My Store", "--skip-install", "--skip-git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid npm package name"));
}

#[test]
fn test_create_unknown_template() {
    let templates = starter_templates();
    let work = TempDir::new().unwrap();
    forge_cmd(work.path())
        .env("HYDROGEN_FORGE_TEMPLATES", templates.path())
        .args(["create", "my-store", "-t", "luxury", "--skip-install", "--skip-git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template \"luxury\" not found"));
}

// ============================================================================
// setup-mcp
// ============================================================================

#[test]
fn test_setup_mcp_writes_both_servers() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("Claude/claude_desktop_config.json");

    forge_cmd(dir.path())
        .args([
            "setup-mcp",
            "--shopify",
            "--hydrogen",
            "--store-domain",
            "https://my-store.myshopify.com/",
            "--access-token",
            "shpat_0123456789",
        ])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP servers configured successfully"));

    let value = read_json(&config);
    let shopify = &value["mcpServers"]["shopify"];
    assert_eq!(shopify["command"], "hf-mcp");
    assert_eq!(shopify["args"][0], "shopify");
    assert_eq!(shopify["env"]["SHOPIFY_STORE_DOMAIN"], "my-store.myshopify.com");
    assert_eq!(shopify["env"]["SHOPIFY_ACCESS_TOKEN"], "shpat_0123456789");
    assert_eq!(value["mcpServers"]["hydrogen"]["args"][0], "hydrogen");
}

#[test]
fn test_setup_mcp_preserves_existing_keys() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{"globalShortcut":"Ctrl+Space","mcpServers":{"filesystem":{"command":"npx"}}}"#,
    )
    .unwrap();

    forge_cmd(dir.path())
        .args(["setup-mcp", "--hydrogen", "--config"])
        .arg(&config)
        .assert()
        .success();

    let value = read_json(&config);
    assert_eq!(value["globalShortcut"], "Ctrl+Space");
    assert_eq!(value["mcpServers"]["filesystem"]["command"], "npx");
    assert_eq!(value["mcpServers"]["hydrogen"]["command"], "hf-mcp");
}

#[test]
fn test_setup_mcp_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"mcpServers":{"hydrogen":{"command":"npx"}}}"#).unwrap();

    forge_cmd(dir.path())
        .args(["setup-mcp", "--hydrogen", "--force", "--config"])
        .arg(&config)
        .assert()
        .success();

    assert_eq!(read_json(&config)["mcpServers"]["hydrogen"]["command"], "hf-mcp");
}

#[test]
fn test_setup_mcp_rejects_short_token() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    forge_cmd(dir.path())
        .args(["setup-mcp", "--shopify", "--store-domain", "a.myshopify.com", "--access-token", "short"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid access token"));

    assert!(!config.exists());
}

#[test]
fn test_setup_mcp_token_from_env() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    forge_cmd(dir.path())
        .env("SHOPIFY_STORE_DOMAIN", "env-store.myshopify.com")
        .env("SHOPIFY_ACCESS_TOKEN", "shpat_from_env_123")
        .args(["setup-mcp", "--shopify", "--config"])
        .arg(&config)
        .assert()
        .success();

    let value = read_json(&config);
    assert_eq!(
        value["mcpServers"]["shopify"]["env"]["SHOPIFY_STORE_DOMAIN"],
        "env-store.myshopify.com"
    );
}

#[test]
fn test_setup_mcp_rejects_broken_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{ broken").unwrap();

    forge_cmd(dir.path())
        .args(["setup-mcp", "--hydrogen", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse"));

    assert_eq!(fs::read_to_string(&config).unwrap(), "{ broken");
}

#[test]
fn test_add_from_subdirectory_points_at_root() {
    let dir = project_dir();
    let sub = dir.path().join("app");
    fs::create_dir_all(&sub).unwrap();

    forge_cmd(&sub)
        .args(["add", "component", "Hero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run this command from your project root ("));
}
