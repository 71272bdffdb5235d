//! Tesi Core — shared types, errors, and dataset loading.
//!
//! This crate provides the foundational types used across all Tesi crates.
//! It has no internal Tesi dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: The `Thesis` and `Tag` record types
//! - [`dataset`]: Loading and validating the static JSON dataset

pub mod dataset;
pub mod error;
pub mod record;

// Re-export key types at crate root for convenience
pub use dataset::{DatasetReport, load_dataset};
pub use error::{Error, Result};
pub use record::{Tag, Thesis};
