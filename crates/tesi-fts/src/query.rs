//! Query building.
//!
//! Provides [`QueryBuilder`] for turning a free-text query string into a
//! Tantivy query over the title field, honoring the configured
//! [`QueryMode`].
//!
//! Smart mode combines terms with AND when the query has one or two terms
//! (precise lookups) and falls back to OR for longer queries, where
//! requiring every term would usually return nothing.

use tantivy::Index;
use tantivy::query::{Query, QueryParser};

use tesi_core::Result;

use crate::schema::ThesisSchema;
use crate::types::QueryMode;

/// Builder for title queries.
pub struct QueryBuilder<'a> {
    index: &'a Index,
    schema: &'a ThesisSchema,
    mode: QueryMode,
}

impl<'a> QueryBuilder<'a> {
    /// Create a new query builder for the given index and mode.
    pub fn new(index: &'a Index, schema: &'a ThesisSchema, mode: QueryMode) -> Self {
        Self {
            index,
            schema,
            mode,
        }
    }

    /// Build a Tantivy query from a search string.
    ///
    /// The string is parsed against the title field with the index's
    /// stemming analyzer, so "Networks" matches "network". Parsing is
    /// lenient: the input is free text typed by a user, so syntax issues
    /// (unbalanced quotes, references to unindexed fields) drop the
    /// offending clause instead of failing the whole search.
    pub fn build(&self, query: &str) -> Result<Box<dyn Query>> {
        let mut parser = QueryParser::for_index(self.index, self.schema.search_fields());

        if self.use_conjunction(query) {
            parser.set_conjunction_by_default();
        }

        let (parsed, errors) = parser.parse_query_lenient(query);
        for error in errors {
            log::debug!("Ignoring syntax issue in query {query:?}: {error}");
        }
        Ok(parsed)
    }

    /// Whether terms should be combined with AND for this query.
    fn use_conjunction(&self, query: &str) -> bool {
        match self.mode {
            QueryMode::And => true,
            QueryMode::Or => false,
            QueryMode::Smart => query.split_whitespace().count() <= 2,
        }
    }
}

impl std::fmt::Debug for QueryBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("mode", &self.mode)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
