//! Common configuration and parameter types for the FTS crate.

use serde::{Deserialize, Serialize};

/// Search query mode.
///
/// Controls how multiple search terms are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Smart mode: AND for 1-2 terms, OR for 3+.
    #[default]
    Smart,
    /// All terms must match (AND).
    And,
    /// Any term can match (OR).
    Or,
}

impl std::str::FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "smart" => Ok(Self::Smart),
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(format!("unknown query mode: {other}")),
        }
    }
}

/// Search configuration.
///
/// Deserializable from TOML or JSON with sensible defaults; the CLI feeds
/// this from an optional config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default query mode.
    #[serde(default)]
    pub query_mode: QueryMode,

    /// Default result limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Enable stopword filtering of queries.
    #[serde(default = "default_true")]
    pub stopwords_enabled: bool,

    /// Custom stopwords to add to the English list.
    #[serde(default)]
    pub custom_stopwords: Vec<String>,

    /// Words to preserve even if they are stopwords.
    #[serde(default)]
    pub allowlist: Vec<String>,
}

fn default_limit() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            query_mode: QueryMode::default(),
            default_limit: default_limit(),
            stopwords_enabled: default_true(),
            custom_stopwords: Vec::new(),
            allowlist: Vec::new(),
        }
    }
}

/// Parameters for a single search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search query string.
    pub query: String,

    /// Maximum results to return (falls back to the configured default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Query mode override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_mode: Option<QueryMode>,
}

impl SearchParams {
    /// Create params for a plain query with defaults.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_mode_default() {
        assert_eq!(QueryMode::default(), QueryMode::Smart);
    }

    #[test]
    fn test_query_mode_serialization() {
        let json = serde_json::to_string(&QueryMode::And).unwrap();
        assert_eq!(json, "\"and\"");
    }

    #[test]
    fn test_query_mode_from_str() {
        assert_eq!("smart".parse::<QueryMode>().unwrap(), QueryMode::Smart);
        assert_eq!("AND".parse::<QueryMode>().unwrap(), QueryMode::And);
        assert_eq!("or".parse::<QueryMode>().unwrap(), QueryMode::Or);
        assert!("fuzzy".parse::<QueryMode>().is_err());
    }

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();
        assert_eq!(config.query_mode, QueryMode::Smart);
        assert_eq!(config.default_limit, 10);
        assert!(config.stopwords_enabled);
        assert!(config.custom_stopwords.is_empty());
    }

    #[test]
    fn test_search_config_deserialization_with_defaults() {
        let json = r#"{"default_limit": 25}"#;
        let config: SearchConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.default_limit, 25);
        assert_eq!(config.query_mode, QueryMode::Smart);
        assert!(config.stopwords_enabled);
    }

    #[test]
    fn test_search_params_serialization_skips_none() {
        let params = SearchParams::query("sensor networks");
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("sensor networks"));
        assert!(!json.contains("limit"));
        assert!(!json.contains("query_mode"));
    }
}
