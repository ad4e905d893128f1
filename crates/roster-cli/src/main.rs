//! roster - manage the records of a remote store
//!
//! # Examples
//!
//! ```bash
//! # List all records
//! roster list --pretty
//!
//! # Create a record against a keyed database
//! roster --backend keyed --server https://example-db.firebaseio.com create --name Jane --age 30
//!
//! # Delete a record
//! roster delete 3
//! ```

use roster_cli::{Cli, CliResult, build_model, execute, load_config, logger};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> CliResult<String> {
    let config = load_config(cli)?;

    let log_file = config.log_file_path()?;
    if let Some(parent) = log_file.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    log::info!("Starting roster v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut model = build_model(&config)?;
    let value = execute(&cli.command, &mut model).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(output)
}
