//! Libra server binary
//!
//! | Command | Description |
//! |---------|-------------|
//! | `libra [serve]` | Run the HTTP server (default) |
//! | `libra keygen` | Print a fresh `[encryption]` configuration section |

use clap::{Parser, Subcommand};
use libra_server::{run_keygen, run_server};
use std::path::PathBuf;

/// Command line interface for Libra
#[derive(Parser, Debug)]
#[command(name = "libra")]
#[command(about = "Libra - hybrid-encrypted login and permission-based authorization server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server
    #[default]
    Serve,
    /// Generate an AES key and RSA key pair
    Keygen,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or_default() {
        Command::Serve => run_server(cli.config.as_deref()).await?,
        Command::Keygen => run_keygen()?,
    }
    Ok(())
}
