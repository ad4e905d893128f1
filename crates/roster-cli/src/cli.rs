use crate::commands::Commands;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Manage the records of a remote store")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides api.base_url)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Wire variant of the store: rest or keyed (overrides api.backend)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Collection name (overrides api.collection)
    #[arg(long, global = true)]
    pub collection: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
