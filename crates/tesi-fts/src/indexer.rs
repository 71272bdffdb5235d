//! Tantivy index writer wrapper.
//!
//! Provides [`Indexer`], a wrapper around Tantivy's `IndexWriter` that
//! converts [`tesi_core::Thesis`] records and applies the upsert policy.
//! Indices live entirely in RAM: the catalog is small, static, and rebuilt
//! at every startup, so nothing is ever written to disk.
//!
//! # Duplicate ids
//!
//! `add_thesis` is an upsert: it first deletes any document carrying the
//! same `id`, then adds the new one. Within a single bulk load this yields
//! explicit last-write-wins semantics for duplicate primary keys, rather
//! than whatever the library would otherwise do.

use tantivy::schema::Field;
use tantivy::{Index, IndexWriter, TantivyDocument, Term};

use tesi_core::{Error, Result, Thesis};

use crate::schema::ThesisSchema;

/// Index writer buffer size (50MB).
const WRITER_BUFFER_SIZE: usize = 50_000_000;

/// Tantivy index writer wrapper.
///
/// Handles record conversion and the upsert-by-id policy.
pub struct Indexer {
    index: Index,
    writer: IndexWriter,
    schema: ThesisSchema,
}

impl Indexer {
    /// Create a fresh in-memory index with the thesis schema.
    pub fn new(schema: &ThesisSchema) -> Result<Self> {
        let index = Index::create_in_ram(schema.schema().clone());
        ThesisSchema::register_tokenizers(&index);

        let writer = index
            .writer(WRITER_BUFFER_SIZE)
            .map_err(|e| Error::operation(format!("Failed to create index writer: {e}")))?;

        Ok(Self {
            index,
            writer,
            schema: schema.clone(),
        })
    }

    /// Add a thesis record, replacing any earlier record with the same id.
    ///
    /// The record is staged but not searchable until `commit()` is called.
    pub fn add_thesis(&mut self, thesis: &Thesis) -> Result<()> {
        // Upsert: delete-by-id first so the last write wins
        self.writer
            .delete_term(Term::from_field_text(self.schema.id, &thesis.id));

        let doc = self.convert_to_tantivy_doc(thesis);
        self.writer
            .add_document(doc)
            .map_err(|e| Error::operation(format!("Failed to add record {}: {e}", thesis.id)))?;
        Ok(())
    }

    /// Commit staged changes to make them searchable.
    pub fn commit(&mut self) -> Result<()> {
        self.writer
            .commit()
            .map_err(|e| Error::operation(format!("Failed to commit index: {e}")))?;
        Ok(())
    }

    /// Remove every document from the index.
    pub fn clear(&mut self) -> Result<()> {
        self.writer
            .delete_all_documents()
            .map_err(|e| Error::operation(format!("Failed to clear index: {e}")))?;
        self.commit()
    }

    /// Get reference to the underlying Tantivy index.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Get the schema.
    pub fn schema(&self) -> &ThesisSchema {
        &self.schema
    }

    /// Consume the indexer, returning the populated index.
    pub fn into_index(self) -> Index {
        self.index
    }

    /// Convert a thesis record to a Tantivy document.
    fn convert_to_tantivy_doc(&self, thesis: &Thesis) -> TantivyDocument {
        let s = &self.schema;

        let mut doc = TantivyDocument::new();

        add_text(&mut doc, s.id, &thesis.id);
        add_text(&mut doc, s.title, &thesis.title);
        add_text(&mut doc, s.author_name, &thesis.author_name);
        add_text(&mut doc, s.author_id, &thesis.author_id);
        add_text(&mut doc, s.supervisor, &thesis.supervisor);
        for tag in &thesis.tags {
            add_text(&mut doc, s.tags, tag);
        }
        add_text(&mut doc, s.description, &thesis.description);

        doc
    }
}

fn add_text(doc: &mut TantivyDocument, field: Field, value: &str) {
    doc.add_text(field, value);
}

impl std::fmt::Debug for Indexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Indexer")
            .field("index", &"<tantivy::Index>")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_thesis(id: &str) -> Thesis {
        Thesis {
            id: id.to_string(),
            title: format!("Test {id}"),
            author_name: "Test Author".to_string(),
            author_id: "author-1".to_string(),
            supervisor: "Test Supervisor".to_string(),
            tags: vec!["test".to_string()],
            description: "Test description".to_string(),
        }
    }

    #[test]
    fn test_indexer_new() {
        let schema = ThesisSchema::build();
        let indexer = Indexer::new(&schema);
        assert!(indexer.is_ok());
    }

    #[test]
    fn test_indexer_add_thesis() {
        let schema = ThesisSchema::build();
        let mut indexer = Indexer::new(&schema).unwrap();

        let result = indexer.add_thesis(&create_test_thesis("t-1"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_indexer_commit() {
        let schema = ThesisSchema::build();
        let mut indexer = Indexer::new(&schema).unwrap();

        indexer.add_thesis(&create_test_thesis("t-1")).unwrap();
        assert!(indexer.commit().is_ok());

        let reader = indexer.index().reader().unwrap();
        assert_eq!(reader.searcher().num_docs(), 1);
    }

    #[test]
    fn test_indexer_upsert_same_id() {
        let schema = ThesisSchema::build();
        let mut indexer = Indexer::new(&schema).unwrap();

        indexer.add_thesis(&create_test_thesis("t-1")).unwrap();
        indexer.add_thesis(&create_test_thesis("t-1")).unwrap();
        indexer.commit().unwrap();

        // Last write wins: one live document remains
        let reader = indexer.index().reader().unwrap();
        assert_eq!(reader.searcher().num_docs(), 1);
    }

    #[test]
    fn test_indexer_clear() {
        let schema = ThesisSchema::build();
        let mut indexer = Indexer::new(&schema).unwrap();

        indexer.add_thesis(&create_test_thesis("t-1")).unwrap();
        indexer.add_thesis(&create_test_thesis("t-2")).unwrap();
        indexer.commit().unwrap();

        indexer.clear().unwrap();

        let reader = indexer.index().reader().unwrap();
        assert_eq!(reader.searcher().num_docs(), 0);
    }

    #[test]
    fn test_indexer_empty_commit() {
        let schema = ThesisSchema::build();
        let mut indexer = Indexer::new(&schema).unwrap();

        assert!(indexer.commit().is_ok());

        let reader = indexer.index().reader().unwrap();
        assert_eq!(reader.searcher().num_docs(), 0);
    }
}
