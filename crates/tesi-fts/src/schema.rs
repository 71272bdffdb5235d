//! Tantivy schema definition for the thesis catalog.
//!
//! The schema mirrors the shape of [`tesi_core::Thesis`] exactly. Only two
//! fields are indexed: `title` (tokenized, the sole free-text search target)
//! and `id` (raw, for primary-key lookup). The remaining fields are stored
//! so every search result can return the record unmodified.
//!
//! # Schema Fields
//!
//! | Field         | Type            | Purpose                      |
//! |---------------|-----------------|------------------------------|
//! | `id`          | STRING\|STORED  | Primary key, exact lookup    |
//! | `title`       | TEXT\|STORED    | Full-text search             |
//! | `author_name` | STORED          | Metadata                     |
//! | `author_id`   | STORED          | Metadata                     |
//! | `supervisor`  | STORED          | Metadata                     |
//! | `tags`        | STORED          | Metadata (multi-valued)      |
//! | `description` | STORED          | Metadata                     |
//!
//! # Tokenizer
//!
//! Uses an English stemming tokenizer (`en_stem`) for the title field:
//! SimpleTokenizer → LowerCaser → Stemmer(English). "Networks" matches
//! "network", "Indexing" matches "index", etc.

use tantivy::Index;
use tantivy::schema::{
    Field, IndexRecordOption, Schema, SchemaBuilder, STORED, STRING, TextFieldIndexing, TextOptions,
};
use tantivy::tokenizer::{Language, LowerCaser, SimpleTokenizer, Stemmer, TextAnalyzer};

/// Schema version for diagnostics.
///
/// Increment when schema fields change.
pub const SCHEMA_VERSION: u32 = 1;

/// Name of the stemming tokenizer registered on every index.
pub const TOKENIZER_NAME: &str = "en_stem";

/// Search schema holding field references and the Tantivy schema.
///
/// Provides typed access to schema fields, avoiding string lookups during
/// indexing and querying.
#[derive(Clone)]
pub struct ThesisSchema {
    schema: Schema,

    /// Unique record identifier (primary key).
    pub id: Field,
    /// Thesis title (the only tokenized field).
    pub title: Field,
    /// Author display name.
    pub author_name: Field,
    /// Author identifier.
    pub author_id: Field,
    /// Supervisor display name.
    pub supervisor: Field,
    /// Topic labels (multi-valued).
    pub tags: Field,
    /// Free-text abstract.
    pub description: Field,
}

impl ThesisSchema {
    /// Build the thesis search schema.
    pub fn build() -> Self {
        let mut builder = SchemaBuilder::new();

        // Title options with positions (for phrase queries)
        let title_options = TextOptions::default()
            .set_indexing_options(
                TextFieldIndexing::default()
                    .set_tokenizer(TOKENIZER_NAME)
                    .set_index_option(IndexRecordOption::WithFreqsAndPositions),
            )
            .set_stored();

        // Identity
        let id = builder.add_text_field("id", STRING | STORED);

        // Full-text
        let title = builder.add_text_field("title", title_options);

        // Stored-only metadata
        let author_name = builder.add_text_field("author_name", STORED);
        let author_id = builder.add_text_field("author_id", STORED);
        let supervisor = builder.add_text_field("supervisor", STORED);
        let tags = builder.add_text_field("tags", STORED);
        let description = builder.add_text_field("description", STORED);

        let schema = builder.build();

        Self {
            schema,
            id,
            title,
            author_name,
            author_id,
            supervisor,
            tags,
            description,
        }
    }

    /// Get the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Register the stemming tokenizer with a Tantivy index.
    ///
    /// Must be called after creating an index so the title analyzer resolves.
    pub fn register_tokenizers(index: &Index) {
        let en_stem = TextAnalyzer::builder(SimpleTokenizer::default())
            .filter(LowerCaser)
            .filter(Stemmer::new(Language::English))
            .build();

        index.tokenizers().register(TOKENIZER_NAME, en_stem);
    }

    /// Fields matched against free-text queries.
    pub fn search_fields(&self) -> Vec<Field> {
        vec![self.title]
    }

    /// All fields, in schema order.
    pub fn all_fields(&self) -> Vec<Field> {
        vec![
            self.id,
            self.title,
            self.author_name,
            self.author_id,
            self.supervisor,
            self.tags,
            self.description,
        ]
    }
}

impl std::fmt::Debug for ThesisSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThesisSchema")
            .field("field_count", &7)
            .field("schema_version", &SCHEMA_VERSION)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_build() {
        let schema = ThesisSchema::build();
        assert_eq!(schema.all_fields().len(), 7);
    }

    #[test]
    fn test_schema_field_names() {
        let schema = ThesisSchema::build();
        let tantivy_schema = schema.schema();

        assert!(tantivy_schema.get_field("id").is_ok());
        assert!(tantivy_schema.get_field("title").is_ok());
        assert!(tantivy_schema.get_field("author_name").is_ok());
        assert!(tantivy_schema.get_field("author_id").is_ok());
        assert!(tantivy_schema.get_field("supervisor").is_ok());
        assert!(tantivy_schema.get_field("tags").is_ok());
        assert!(tantivy_schema.get_field("description").is_ok());
    }

    #[test]
    fn test_only_title_is_search_field() {
        let schema = ThesisSchema::build();
        assert_eq!(schema.search_fields(), vec![schema.title]);
    }

    #[test]
    fn test_field_types() {
        let schema = ThesisSchema::build();
        let tantivy_schema = schema.schema();

        // id is indexed (raw) and stored
        let id_entry = tantivy_schema.get_field_entry(schema.id);
        assert!(id_entry.is_indexed());
        assert!(id_entry.is_stored());

        // title is indexed and stored
        let title_entry = tantivy_schema.get_field_entry(schema.title);
        assert!(title_entry.is_indexed());
        assert!(title_entry.is_stored());

        // description is stored only
        let description_entry = tantivy_schema.get_field_entry(schema.description);
        assert!(!description_entry.is_indexed());
        assert!(description_entry.is_stored());

        // tags are stored only
        let tags_entry = tantivy_schema.get_field_entry(schema.tags);
        assert!(!tags_entry.is_indexed());
        assert!(tags_entry.is_stored());
    }

    #[test]
    fn test_tokenizer_registration() {
        let schema = ThesisSchema::build();
        let index = Index::create_in_ram(schema.schema().clone());

        ThesisSchema::register_tokenizers(&index);

        let tokenizer = index.tokenizers().get(TOKENIZER_NAME);
        assert!(tokenizer.is_some());
    }

    #[test]
    fn test_schema_debug() {
        let schema = ThesisSchema::build();
        let debug = format!("{:?}", schema);
        assert!(debug.contains("ThesisSchema"));
        assert!(debug.contains("field_count"));
    }
}
