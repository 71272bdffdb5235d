#![forbid(unsafe_code)]

//! Tesi CLI
//!
//! Command-line interface for the thesis catalog: loads the static JSON
//! dataset, builds the in-memory index once, and runs a single command
//! against it. The index handle is constructed here and passed by reference
//! into the command handlers; there is no global state.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tesi_fts::{QueryMode, ThesisIndex};

mod commands;
mod config;

/// Tesi - thesis catalog search
#[derive(Parser, Debug)]
#[command(name = "tesi")]
#[command(about = "Full-text search over a static thesis catalog", long_about = None)]
struct Args {
    /// Path to the thesis dataset (JSON array)
    #[arg(short, long, default_value = "data/theses.json")]
    data: PathBuf,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Free-text search over thesis titles
    Search {
        /// Query string
        query: String,

        /// Maximum results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Query mode (smart, and, or)
        #[arg(short, long)]
        mode: Option<QueryMode>,
    },
    /// Look up a single record by id
    Get {
        /// Record id
        id: String,
    },
    /// Print index statistics
    Stats,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing (captures `log` records from the library crates)
    tracing_subscriber::fmt::init();

    let config = config::load_config(args.config.as_deref())?;
    let report = tesi_core::load_dataset(&args.data)?;
    let index = ThesisIndex::build(&report.records, &config.search)?;

    match args.command {
        Command::Search { query, limit, mode } => commands::search(&index, &query, limit, mode)?,
        Command::Get { id } => commands::get(&index, &id)?,
        Command::Stats => commands::stats(&index)?,
    }

    Ok(())
}
