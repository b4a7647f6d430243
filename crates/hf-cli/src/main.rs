//! Hydrogen Forge CLI
//!
//! Creates Hydrogen storefront projects, adds components and routes, and
//! registers the Hydrogen Forge MCP servers with Claude.

mod cli;
mod commands;
mod error;
mod mcp_config;
mod output;
mod prompts;

use clap::Parser;
use colored::Colorize;
use tracing::Level;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;
    match cli.command {
        Commands::Create(args) => commands::create::run_create(&cwd, args),
        Commands::Add(args) => commands::add::run_add(&cwd, args),
        Commands::SetupMcp(args) => commands::setup_mcp::run_setup_mcp(args),
    }
}
