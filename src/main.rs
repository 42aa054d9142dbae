//! param-trie: inspect and query route files.
//!
//! # Architecture Overview
//!
//! ```text
//!   routes.toml ──▶ config (load + validate) ──▶ RouteTable ──▶ match / routes / check
//!                                                    │
//!                                                    └── PrefixTree (arena of nodes)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use param_trie::config::load_config;
use param_trie::observability::init_logging;
use param_trie::RouteTable;

#[derive(Parser)]
#[command(name = "param-trie")]
#[command(about = "Match subjects against a parametrized route file", long_about = None)]
struct Cli {
    /// Route file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a subject and print the route value and parameters
    Match {
        /// Subject to match, e.g. "/sum/a/42/b/24"
        subject: String,
    },
    /// List compiled routes
    Routes,
    /// Validate and compile the route file
    Check,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability.log_filter);

    tracing::info!(
        path = %cli.config.display(),
        delimiter = %config.delimiter,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let table = RouteTable::from_config(&config)?;

    match cli.command {
        Commands::Match { subject } => match table.lookup(&subject) {
            Some(found) => {
                let params: Vec<_> = found
                    .params
                    .iter()
                    .map(|p| {
                        json!({
                            "name": p.name(),
                            "start_index": p.start_index(),
                            "length": p.len(),
                            "value": p.value(&subject),
                        })
                    })
                    .collect();
                let report = json!({ "value": found.value, "params": params });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            None => {
                eprintln!("no route matched {subject:?}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Routes => {
            println!("{}", serde_json::to_string_pretty(table.routes())?);
        }
        Commands::Check => {
            println!(
                "ok: {} routes, {} nodes",
                table.tree().len(),
                table.tree().node_count()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
