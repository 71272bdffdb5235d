//! Dataset loading and validation.
//!
//! The thesis catalog ships as a static JSON array bundled with the
//! application. It is read exactly once at startup; a missing or malformed
//! file is a fatal error, not something to recover from.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tesi_core::load_dataset;
//!
//! let report = load_dataset(Path::new("data/theses.json"))?;
//! if report.duplicate_ids > 0 {
//!     log::warn!("{} duplicate ids in dataset", report.duplicate_ids);
//! }
//! let index = ThesisIndex::build(&report.records, &config)?;
//! ```

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::Thesis;

/// Result of loading a dataset file.
#[derive(Debug, Clone, Default)]
pub struct DatasetReport {
    /// Records in file order.
    pub records: Vec<Thesis>,
    /// Number of records whose id was already seen earlier in the file.
    pub duplicate_ids: usize,
}

impl DatasetReport {
    /// Number of records loaded (including duplicates).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load and validate a thesis dataset from a JSON file.
///
/// The file must contain a JSON array of thesis records. Records are kept in
/// file order, which the index relies on for its last-write-wins duplicate
/// policy.
///
/// # Errors
///
/// - The file cannot be read ([`Error::Io`] with the path).
/// - The JSON is malformed or a record is missing a required field
///   ([`Error::Parse`] with the path).
/// - A record has an empty `id` ([`Error::InvalidRecord`]).
pub fn load_dataset(path: &Path) -> Result<DatasetReport> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;

    let records: Vec<Thesis> =
        serde_json::from_str(&raw).map_err(|e| Error::parse_with_path(e, path))?;

    for record in &records {
        record.validate()?;
    }

    let duplicate_ids = count_duplicate_ids(&records);
    if duplicate_ids > 0 {
        log::warn!(
            "Dataset {} contains {} duplicate id(s); later records will replace earlier ones",
            path.display(),
            duplicate_ids
        );
    }

    log::info!(
        "Loaded {} thesis record(s) from {}",
        records.len(),
        path.display()
    );

    Ok(DatasetReport {
        records,
        duplicate_ids,
    })
}

/// Count records whose id duplicates an earlier record's id.
fn count_duplicate_ids(records: &[Thesis]) -> usize {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| !seen.insert(r.id.as_str()))
        .count()
}

// ============================================================================
// Tests
// ============================================================================
