mod cli;
mod commands;
mod mcp;
mod page_order;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Stderr, so stdout stays clean for command output and the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
        Commands::Select {
            path,
            pages,
            output,
        } => {
            commands::select::run(&path, &pages, &output)?;
        }
        Commands::Sort {
            path,
            preset,
            pages,
            output,
        } => {
            commands::sort::run(&path, &preset, pages.as_deref(), &output)?;
        }
        Commands::Remove {
            path,
            pages,
            output,
        } => {
            commands::remove::run(&path, &pages, &output)?;
        }
    }

    Ok(())
}
