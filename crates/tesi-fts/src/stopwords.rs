//! Stopword filtering for search queries.
//!
//! Filters common words from queries before they reach the query parser.
//! Uses the `stop-words` crate for the English list and supports:
//!
//! - Allowlist: words to preserve even if they are stopwords
//! - Custom stopwords: additional words to filter
//! - Graceful fallback: if all terms are filtered, the original query is kept
//!
//! Thesis titles are full of connective words ("A Study of...", "An Approach
//! to..."), so filtering the query side noticeably improves precision.
//!
//! # Example
//!
//! ```rust
//! use tesi_fts::stopwords::StopwordFilter;
//! use tesi_fts::SearchConfig;
//!
//! let filter = StopwordFilter::new(&SearchConfig::default());
//! assert_eq!(filter.filter("what is a cadence"), "cadence");
//! ```

use std::collections::HashSet;

use stop_words::{LANGUAGE, get};

use crate::types::SearchConfig;

/// Stopword filter for query preprocessing.
pub struct StopwordFilter {
    stopwords: HashSet<String>,
    allowlist: HashSet<String>,
    enabled: bool,
}

impl StopwordFilter {
    /// Create a new stopword filter from configuration.
    pub fn new(config: &SearchConfig) -> Self {
        let mut stopwords: HashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        for word in &config.custom_stopwords {
            stopwords.insert(word.to_lowercase());
        }

        // Allowlist stays case-sensitive (acronyms, Roman numerals)
        let allowlist: HashSet<String> = config.allowlist.iter().cloned().collect();

        Self {
            stopwords,
            allowlist,
            enabled: config.stopwords_enabled,
        }
    }

    /// Filter stopwords from a query string.
    ///
    /// Returns the filtered query. If every word would be filtered, returns
    /// the original query to avoid empty searches.
    pub fn filter(&self, query: &str) -> String {
        if !self.enabled {
            return query.to_string();
        }

        let kept: Vec<&str> = query
            .split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .collect();

        // Never hand the query parser an empty string
        if kept.is_empty() {
            query.to_string()
        } else {
            kept.join(" ")
        }
    }

    /// Check if a word is a stopword.
    ///
    /// Allowlisted words are never stopwords (case-sensitive check);
    /// otherwise the stopword list is consulted case-insensitively.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.allowlist.contains(word) {
            return false;
        }

        self.stopwords.contains(&word.to_lowercase())
    }
}

impl std::fmt::Debug for StopwordFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopwordFilter")
            .field("enabled", &self.enabled)
            .field("stopword_count", &self.stopwords.len())
            .field("allowlist_count", &self.allowlist.len())
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
    fn test_filter_removes_stopwords() {
        let filter = StopwordFilter::new(&SearchConfig::default());
        assert_eq!(filter.filter("what is a consensus"), "consensus");
        assert_eq!(filter.filter("the segmentation"), "segmentation");
    }

    #[test]
    fn test_filter_keeps_content_words() {
        let filter = StopwordFilter::new(&SearchConfig::default());
        assert_eq!(
            filter.filter("distributed sensor networks"),
            "distributed sensor networks"
        );
    }

    #[test]
    fn test_filter_fallback_when_all_filtered() {
        let filter = StopwordFilter::new(&SearchConfig::default());
        // All stopwords: keep original rather than searching for nothing
        assert_eq!(filter.filter("of the a"), "of the a");
    }

    #[test]
    fn test_filter_disabled_via_config() {
        let config = SearchConfig {
            stopwords_enabled: false,
            ..Default::default()
        };
        let filter = StopwordFilter::new(&config);
        assert_eq!(filter.filter("a study of things"), "a study of things");
    }

    #[test]
    fn test_custom_stopwords() {
        let config = SearchConfig {
            custom_stopwords: vec!["thesis".to_string()],
            ..Default::default()
        };
        let filter = StopwordFilter::new(&config);
        assert_eq!(filter.filter("thesis consensus"), "consensus");
    }

    #[test]
    fn test_allowlist_preserves_words() {
        let config = SearchConfig {
            allowlist: vec!["IT".to_string()],
            ..Default::default()
        };
        let filter = StopwordFilter::new(&config);
        assert!(!filter.is_stopword("IT"));
        // Lowercase "it" is not allowlisted (case-sensitive) and stays a stopword
        assert!(filter.is_stopword("it"));
    }
}
