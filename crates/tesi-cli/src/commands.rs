//! Command handlers.
//!
//! Each handler takes the index by reference and prints its result as JSON
//! on stdout. Handlers never touch global state; everything they need is
//! passed in.

use serde::Serialize;

use tesi_core::{Error, Result};
use tesi_fts::schema::SCHEMA_VERSION;
use tesi_fts::{QueryMode, SearchParams, ThesisIndex};

/// Statistics printed by the `stats` command.
#[derive(Debug, Serialize)]
struct StatsOutput {
    /// Live records in the index.
    num_docs: u64,
    /// Records written during the bulk load (including replaced ones).
    records_indexed: usize,
    /// Records that replaced an earlier record with the same id.
    duplicates_replaced: usize,
    /// Schema version the index was built with.
    schema_version: u32,
}

/// Run a free-text title search and print the hits.
pub fn search(
    index: &ThesisIndex,
    query: &str,
    limit: Option<usize>,
    mode: Option<QueryMode>,
) -> Result<()> {
    let params = SearchParams {
        query: query.to_string(),
        limit,
        query_mode: mode,
    };

    let results = index.search_with(&params)?;
    print_json(&results)
}

/// Look up one record by id and print it.
///
/// Returns [`Error::NotFound`] (non-zero exit) if the id is absent.
pub fn get(index: &ThesisIndex, id: &str) -> Result<()> {
    match index.get(id)? {
        Some(record) => print_json(&record),
        None => Err(Error::not_found(id, "thesis record")),
    }
}

/// Print index statistics.
pub fn stats(index: &ThesisIndex) -> Result<()> {
    let stats = index.stats();
    print_json(&StatsOutput {
        num_docs: index.num_docs(),
        records_indexed: stats.records_indexed,
        duplicates_replaced: stats.duplicates_replaced,
        schema_version: SCHEMA_VERSION,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::operation(format!("Failed to serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
