//! The populated thesis index handle.
//!
//! [`ThesisIndex`] is the one object the rest of the application sees: it is
//! built once at startup from the full static dataset and is read-only
//! thereafter. Construction is all-or-nothing; any writer or commit failure
//! propagates and no partially-built index escapes.
//!
//! There is deliberately no global singleton here. Whoever needs query
//! access receives the handle by reference (see `tesi-cli` for an example
//! of threading it through command handlers).
//!
//! # Usage
//!
//! ```rust,ignore
//! use tesi_fts::{SearchConfig, SearchParams, ThesisIndex};
//!
//! let index = ThesisIndex::build(&records, &SearchConfig::default())?;
//!
//! let results = index.search("sensor networks")?;
//! for hit in &results.hits {
//!     println!("{:.2}  {}", hit.score, hit.record.title);
//! }
//!
//! let record = index.get("thesis-001")?;
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tantivy::collector::{Count, TopDocs};
use tantivy::query::TermQuery;
use tantivy::schema::{IndexRecordOption, Value};
use tantivy::{DocAddress, Index, IndexReader, TantivyDocument, Term};

use tesi_core::{Error, Result, Thesis};

use crate::indexer::Indexer;
use crate::query::QueryBuilder;
use crate::schema::ThesisSchema;
use crate::stopwords::StopwordFilter;
use crate::types::{SearchConfig, SearchParams};

/// Statistics about a bulk load.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of records written to the index (including replaced ones).
    pub records_indexed: usize,
    /// Number of records that replaced an earlier record with the same id.
    pub duplicates_replaced: usize,
}

/// A single search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The stored record, unmodified from the source dataset.
    pub record: Thesis,
    /// BM25 relevance score (higher is better).
    pub score: f32,
}

/// Results of a search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Hits ordered by relevance (highest first).
    pub hits: Vec<SearchHit>,
    /// Total number of matching records (may exceed `hits.len()` if limited).
    pub total: usize,
}

impl SearchResults {
    /// Create empty results.
    pub fn empty() -> Self {
        Self {
            hits: Vec::new(),
            total: 0,
        }
    }
}

/// Read-only handle to the populated in-memory index.
pub struct ThesisIndex {
    index: Index,
    reader: IndexReader,
    schema: ThesisSchema,
    config: SearchConfig,
    stopwords: StopwordFilter,
    stats: BuildStats,
}

impl ThesisIndex {
    /// Build the index from the full static collection in one bulk pass.
    ///
    /// Records are inserted in slice order; a record whose id collides with
    /// an earlier one replaces it (last write wins). The handle is only
    /// returned once everything is committed and searchable.
    ///
    /// An empty slice yields a valid, empty index.
    ///
    /// # Errors
    ///
    /// - A record has an empty id ([`Error::InvalidRecord`]).
    /// - The underlying writer or commit fails ([`Error::Operation`]).
    pub fn build(records: &[Thesis], config: &SearchConfig) -> Result<Self> {
        let schema = ThesisSchema::build();
        let mut indexer = Indexer::new(&schema)?;

        let mut stats = BuildStats::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for record in records {
            record.validate()?;

            if !seen.insert(&record.id) {
                log::warn!("Duplicate id {:?}: replacing earlier record", record.id);
                stats.duplicates_replaced += 1;
            }

            indexer.add_thesis(record)?;
            stats.records_indexed += 1;
        }

        indexer.commit()?;

        let index = indexer.into_index();
        let reader = index
            .reader()
            .map_err(|e| Error::operation(format!("Failed to open index reader: {e}")))?;

        log::info!(
            "Built thesis index: {} record(s), {} duplicate(s) replaced",
            stats.records_indexed,
            stats.duplicates_replaced
        );

        Ok(Self {
            index,
            reader,
            schema,
            config: config.clone(),
            stopwords: StopwordFilter::new(config),
            stats,
        })
    }

    /// Free-text search over titles with default parameters.
    pub fn search(&self, query: &str) -> Result<SearchResults> {
        self.search_with(&SearchParams::query(query))
    }

    /// Free-text search over titles.
    ///
    /// The query is stopword-filtered, parsed with the title analyzer, and
    /// ranked by BM25. Every hit carries the full stored record. An empty or
    /// whitespace query returns empty results.
    pub fn search_with(&self, params: &SearchParams) -> Result<SearchResults> {
        let limit = params.limit.unwrap_or(self.config.default_limit);
        let raw = params.query.trim();
        if raw.is_empty() || limit == 0 {
            return Ok(SearchResults::empty());
        }

        let filtered = self.stopwords.filter(raw);
        let mode = params.query_mode.unwrap_or(self.config.query_mode);

        let query = QueryBuilder::new(&self.index, &self.schema, mode).build(&filtered)?;

        let searcher = self.reader.searcher();
        let (top, total) = searcher
            .search(&*query, &(TopDocs::with_limit(limit).order_by_score(), Count))
            .map_err(|e| Error::operation(format!("Search failed: {e}")))?;

        let mut hits = Vec::with_capacity(top.len());
        for (score, addr) in top {
            hits.push(SearchHit {
                record: self.record_at(&searcher, addr)?,
                score,
            });
        }

        log::debug!(
            "Search {:?} (mode {:?}): {} hit(s) of {} match(es)",
            raw,
            mode,
            hits.len(),
            total
        );

        Ok(SearchResults { hits, total })
    }

    /// Exact primary-key lookup.
    ///
    /// Returns `Ok(None)` if no record carries the id.
    pub fn get(&self, id: &str) -> Result<Option<Thesis>> {
        let term = Term::from_field_text(self.schema.id, id);
        let query = TermQuery::new(term, IndexRecordOption::Basic);

        let searcher = self.reader.searcher();
        let top = searcher
            .search(&query, &TopDocs::with_limit(1).order_by_score())
            .map_err(|e| Error::operation(format!("Lookup of {id:?} failed: {e}")))?;

        match top.first() {
            Some(&(_, addr)) => Ok(Some(self.record_at(&searcher, addr)?)),
            None => Ok(None),
        }
    }

    /// Number of live records in the index.
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.num_docs() == 0
    }

    /// Statistics from the bulk load that produced this index.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Reconstruct a record from its stored fields.
    fn record_at(&self, searcher: &tantivy::Searcher, addr: DocAddress) -> Result<Thesis> {
        let doc: TantivyDocument = searcher
            .doc(addr)
            .map_err(|e| Error::operation(format!("Failed to load stored document: {e}")))?;

        let s = &self.schema;
        Ok(Thesis {
            id: stored_text(&doc, s.id),
            title: stored_text(&doc, s.title),
            author_name: stored_text(&doc, s.author_name),
            author_id: stored_text(&doc, s.author_id),
            supervisor: stored_text(&doc, s.supervisor),
            tags: doc
                .get_all(s.tags)
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect(),
            description: stored_text(&doc, s.description),
        })
    }
}

fn stored_text(doc: &TantivyDocument, field: tantivy::schema::Field) -> String {
    doc.get_first(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

impl std::fmt::Debug for ThesisIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThesisIndex")
            .field("num_docs", &self.num_docs())
            .field("stats", &self.stats)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
