//! CLI configuration file handling.
//!
//! The CLI accepts an optional TOML file with a `[search]` table mapping
//! onto [`tesi_fts::SearchConfig`]:
//!
//! ```toml
//! [search]
//! query_mode = "smart"
//! default_limit = 20
//! stopwords_enabled = true
//! allowlist = ["IT"]
//! ```
//!
//! Absent file (when none was requested) or absent keys fall back to
//! defaults; a requested file that is missing or malformed is an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use tesi_core::{Error, Result};
use tesi_fts::SearchConfig;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Search configuration.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Load configuration from an optional TOML file.
///
/// With `None`, returns defaults. With `Some(path)`, the file must exist
/// and parse.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };

    let raw = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let config: CliConfig = toml::from_str(&raw)
        .map_err(|e| Error::config(format!("Invalid config {}: {e}", path.display())))?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================
