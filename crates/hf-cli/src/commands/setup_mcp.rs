//! `hydrogen-forge setup-mcp`: register the MCP servers with Claude.

use colored::Colorize;
use hf_shopify::config::normalize_domain;
use std::path::PathBuf;

use crate::cli::SetupMcpArgs;
use crate::error::{CliError, Result};
use crate::mcp_config::{self, McpConfig};
use crate::{output, prompts};

pub fn run_setup_mcp(args: SetupMcpArgs) -> Result<()> {
    output::banner("🔧 MCP Server Setup", "Configure MCP servers for Claude");

    let (setup_shopify, setup_hydrogen) = if args.shopify || args.hydrogen {
        (args.shopify, args.hydrogen)
    } else {
        prompts::select_servers()?
    };
    if !setup_shopify && !setup_hydrogen {
        output::info("No MCP servers selected");
        return Ok(());
    }

    let path = config_path(args.config.clone())?;
    output::info(&format!("Config location: {}", path.display().to_string().dimmed()));

    let mut config = McpConfig::load(&path)?;

    if setup_shopify && should_write(&config, mcp_config::SHOPIFY, "Shopify", args.force)? {
        let (domain, token) = shopify_credentials(&args)?;
        config.set_server(mcp_config::SHOPIFY, mcp_config::shopify_server(&domain, &token));
        output::success("Shopify MCP configured");
    }

    if setup_hydrogen && should_write(&config, mcp_config::HYDROGEN, "Hydrogen", args.force)? {
        config.set_server(mcp_config::HYDROGEN, mcp_config::hydrogen_server());
        output::success("Hydrogen MCP configured");
    }

    config.save(&path)?;

    println!();
    output::success("MCP servers configured successfully!");
    println!();
    println!("{}", "Configured servers:".bold());
    if config.has_server(mcp_config::SHOPIFY) {
        println!("  {} - Shopify Admin API operations", mcp_config::SHOPIFY.cyan());
    }
    if config.has_server(mcp_config::HYDROGEN) {
        println!("  {} - Component and route scaffolding", mcp_config::HYDROGEN.cyan());
    }
    println!();
    println!("{}", "Restart Claude to apply changes".dimmed());
    println!();
    Ok(())
}

fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit
        .or_else(mcp_config::claude_desktop_config_path)
        .ok_or_else(|| CliError::user("Could not find the Claude configuration directory"))
}

/// Existing entries are replaced only with `--force` or after confirmation.
fn should_write(config: &McpConfig, server: &str, label: &str, force: bool) -> Result<bool> {
    if !config.has_server(server) || force {
        return Ok(true);
    }
    let overwrite = prompts::confirm(&format!("{label} MCP is already configured. Overwrite?"))?;
    if !overwrite {
        output::info(&format!("Skipping {label} MCP"));
    }
    Ok(overwrite)
}

fn shopify_credentials(args: &SetupMcpArgs) -> Result<(String, String)> {
    let domain = match &args.store_domain {
        Some(domain) => {
            prompts::check_store_domain(domain).map_err(CliError::user)?;
            domain.clone()
        }
        None => prompts::store_domain()?,
    };
    let token = match &args.access_token {
        Some(token) => {
            prompts::check_access_token(token).map_err(CliError::user)?;
            token.clone()
        }
        None => prompts::access_token()?,
    };
    Ok((normalize_domain(&domain), token))
}
