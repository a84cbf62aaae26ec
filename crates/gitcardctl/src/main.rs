//! GitCard Control - CLI for the stats card generator
//!
//! Renders cards and prints account statistics without a running daemon.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitcardctl")]
#[command(about = "GitCard - GitHub stats card generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a stats card to a file
    Render {
        /// Account to render
        user: String,

        /// Output path
        #[arg(long, default_value = "card.svg")]
        out: PathBuf,

        /// Rasterize to PNG instead of SVG
        #[arg(long)]
        png: bool,

        /// Bearer token (defaults to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    /// Print account statistics as text
    Stats {
        /// Account to inspect
        user: String,

        /// Bearer token (defaults to GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            user,
            out,
            png,
            token,
        } => commands::render(&user, &out, png, token).await,
        Commands::Stats { user, token } => commands::stats(&user, token).await,
    }
}
