//! Command-line interface.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "stockbook", version, about = "Browsable inventory catalog")]
pub struct Cli {
    /// Serve records from a JSON fixture instead of Postgres.
    #[arg(long, global = true, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Listen address; overrides STOCKBOOK_BIND.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Print every record identifier, one per line.
    Ids,
    /// Pre-render the list page and one detail page per record.
    Export {
        /// Output directory (created if missing).
        #[arg(long, short)]
        out: PathBuf,
    },
}

impl Cli {
    pub fn action(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve { bind: None })
    }
}
