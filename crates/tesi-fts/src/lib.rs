//! Full-text search over the Tesi thesis catalog.
//!
//! This crate builds an in-memory Tantivy index over a static collection of
//! thesis records and exposes it as [`ThesisIndex`], an explicitly
//! constructed, read-only handle. Only the `title` field is tokenized for
//! search; every other field is stored verbatim and returned with each hit.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        tesi-fts                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ThesisIndex (read-only handle: search / get / num_docs)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ThesisSchema (7-field schema, title tokenized)             │
//! │  QueryBuilder (query-mode aware title queries)              │
//! │  StopwordFilter (query preprocessing)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Indexer (Tantivy writer wrapper, upsert by id)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use tesi_core::load_dataset;
//! use tesi_fts::{SearchConfig, ThesisIndex};
//!
//! let report = load_dataset(Path::new("data/theses.json"))?;
//! let index = ThesisIndex::build(&report.records, &SearchConfig::default())?;
//!
//! let results = index.search("distributed consensus")?;
//! for hit in results.hits {
//!     println!("{:.2}  {}", hit.score, hit.record.title);
//! }
//! ```

pub mod index;
pub mod indexer;
pub mod query;
pub mod schema;
pub mod stopwords;
pub mod types;

// Re-exports
pub use index::{BuildStats, SearchHit, SearchResults, ThesisIndex};
pub use indexer::Indexer;
pub use query::QueryBuilder;
pub use schema::ThesisSchema;
pub use stopwords::StopwordFilter;
pub use types::{QueryMode, SearchConfig, SearchParams};
