use clap::Parser;
use mcp::ServerInfo;
use tools::ToolRegistry;
use tracing_subscriber::EnvFilter;

mod mcp;
mod server;
mod tools;

#[derive(Parser)]
#[command(
    name = "hf-mcp",
    version,
    about = "MCP servers for Hydrogen storefront development"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Component and route scaffolding plus project analysis
    Hydrogen {
        /// Path to the project root
        #[arg(long, default_value = ".")]
        project_root: std::path::PathBuf,
    },
    /// Shopify Admin GraphQL API (SHOPIFY_STORE_DOMAIN, SHOPIFY_ACCESS_TOKEN)
    Shopify,
    /// Assistant context stored in a GitHub repository (GITHUB_TOKEN, GITHUB_OWNER, GITHUB_REPO)
    Sync,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // All logging goes to stderr so stdout is reserved for MCP JSON-RPC.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (suffix, registry) = match cli.command {
        Commands::Hydrogen { project_root } => {
            let project_root = project_root.canonicalize()?;
            tracing::info!("Hydrogen tools rooted at {:?}", project_root);
            ("hydrogen", ToolRegistry::hydrogen(&project_root))
        }
        Commands::Shopify => ("shopify", ToolRegistry::shopify()),
        Commands::Sync => ("sync", ToolRegistry::sync()),
    };

    let info = ServerInfo {
        name: format!("hydrogen-forge-{suffix}"),
        version: env!("CARGO_PKG_VERSION").into(),
    };
    server::run(registry, info).await
}
