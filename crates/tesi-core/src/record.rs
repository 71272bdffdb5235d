//! Record types for the thesis catalog.
//!
//! This module defines [`Thesis`], the unit of data fed to the search index,
//! and [`Tag`], a display-only label used by front-ends. Both types
//! deserialize directly from the bundled JSON dataset.
//!
//! Only `title` is tokenized for search; every other field is carried
//! verbatim through the index and returned with each hit (see `tesi-fts`).

use serde::{Deserialize, Serialize};

/// A single academic thesis record.
///
/// `id` is the primary key: it must be unique across the dataset, and the
/// index addresses records by it. Duplicate ids are resolved with
/// last-write-wins semantics during the bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thesis {
    /// Unique identifier (primary key).
    pub id: String,
    /// Thesis title — the only searchable field.
    pub title: String,
    /// Author display name.
    pub author_name: String,
    /// Author identifier.
    pub author_id: String,
    /// Supervisor display name.
    pub supervisor: String,
    /// Ordered topic labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text abstract.
    #[serde(default)]
    pub description: String,
}

impl Thesis {
    /// Validate the record for indexing.
    ///
    /// The index requires a non-empty primary key; everything else is
    /// accepted as-is.
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::invalid_record(format!(
                "record with title {:?} has an empty id",
                self.title
            )));
        }
        Ok(())
    }
}

/// A display-only label with an associated visual style.
///
/// Purely a presentation concern; has no relationship to the search index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Label text.
    pub name: String,
    /// CSS class name for the label's gradient style.
    #[serde(rename = "gradientClass")]
    pub gradient_class: String,
}

// ============================================================================
// Tests
// ============================================================================
