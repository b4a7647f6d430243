//! CLI argument definitions using clap derive

use clap::{Args, Parser, Subcommand, ValueEnum};
use hf_common::PackageManager;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hydrogen-forge")]
#[command(about = "Create and extend Hydrogen storefront projects")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Hydrogen Forge project
    Create(CreateArgs),

    /// Add a component or route to the current project
    Add(AddArgs),

    /// Register the Hydrogen Forge MCP servers with Claude
    SetupMcp(SetupMcpArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project (and directory) name; prompted for when omitted
    pub name: Option<String>,

    /// Template to copy
    #[arg(short, long, default_value = "starter")]
    pub template: String,

    /// Directory holding the templates
    #[arg(long, env = "HYDROGEN_FORGE_TEMPLATES")]
    pub templates_dir: Option<PathBuf>,

    /// Skip dependency installation
    #[arg(long)]
    pub skip_install: bool,

    /// Skip git initialization
    #[arg(long)]
    pub skip_git: bool,

    /// Skip writing the project .mcp.json
    #[arg(long)]
    pub skip_mcp: bool,

    /// Package manager used to install dependencies (detected from lockfiles by default)
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManagerArg>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// What to generate
    #[arg(value_enum, ignore_case = true)]
    pub kind: AddKind,

    /// PascalCase component name or flat route name (e.g. products.$handle)
    pub name: String,

    /// Output directory relative to the project root
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Leave Tailwind classes out of generated components
    #[arg(long)]
    pub no_styles: bool,

    /// Template type; classified from the name when omitted
    #[arg(short = 't', long = "type")]
    pub template_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct SetupMcpArgs {
    /// Configure the Shopify server
    #[arg(long)]
    pub shopify: bool,

    /// Configure the Hydrogen server
    #[arg(long)]
    pub hydrogen: bool,

    /// Config file to update (defaults to the Claude desktop config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Shopify store domain, e.g. my-store.myshopify.com
    #[arg(long, env = "SHOPIFY_STORE_DOMAIN")]
    pub store_domain: Option<String>,

    /// Shopify Admin API access token
    #[arg(long, env = "SHOPIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Overwrite existing entries without asking
    #[arg(long)]
    pub force: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddKind {
    Component,
    Route,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageManagerArg {
    Npm,
    Pnpm,
    Yarn,
}

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => PackageManager::Npm,
            PackageManagerArg::Pnpm => PackageManager::Pnpm,
            PackageManagerArg::Yarn => PackageManager::Yarn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_create_flags() {
        let cli = Cli::try_parse_from([
            "hydrogen-forge",
            "create",
            "my-store",
            "--skip-install",
            "--package-manager",
            "pnpm",
        ])
        .unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name.as_deref(), Some("my-store"));
                assert_eq!(args.template, "starter");
                assert!(args.skip_install);
                assert!(!args.skip_git);
                assert_eq!(args.package_manager, Some(PackageManagerArg::Pnpm));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_add_kind_ignores_case() {
        let cli = Cli::try_parse_from(["hydrogen-forge", "add", "Component", "Hero", "--no-styles"])
            .unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.kind, AddKind::Component);
                assert!(args.no_styles);
                assert!(args.dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["hydrogen-forge", "setup-mcp", "--hydrogen", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn package_manager_arg_maps() {
        assert_eq!(PackageManager::from(PackageManagerArg::Yarn), PackageManager::Yarn);
    }
}
