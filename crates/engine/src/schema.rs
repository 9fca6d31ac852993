//! Schema Store: the ordered feature-column list the model was trained
//! against.
//!
//! The column order is load-bearing. Every feature vector handed to the
//! model must follow it exactly, so the schema is loaded once, validated,
//! and never mutated afterwards.

use crate::error::EngineError;
use homeval_domain::constants::RESERVED_COLUMNS;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Expected names of the reserved numeric columns, in schema order.
const RESERVED_NAMES: [&str; RESERVED_COLUMNS] = ["total_sqft", "bath", "bhk"];

/// On-disk shape of the columns artifact.
#[derive(Debug, Deserialize)]
struct ColumnsFile {
    data_columns: Vec<String>,
}

/// The ordered feature-name list, immutable for the process lifetime.
///
/// Positions `0..3` are `total_sqft`, `bath`, `bhk`; everything after is a
/// lower-cased location indicator.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    /// Loads the schema from a `columns.json` artifact.
    ///
    /// # Errors
    /// * [`EngineError::ArtifactMissing`] if the file is absent.
    /// * [`EngineError::ArtifactMalformed`] if it cannot be parsed into an
    ///   ordered list of names, or the list is shorter than the reserved
    ///   prefix.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|_| EngineError::ArtifactMissing { path: path.to_path_buf() })?;

        let file: ColumnsFile =
            serde_json::from_str(&raw).map_err(|e| EngineError::ArtifactMalformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_columns(file.data_columns).map_err(|message| EngineError::ArtifactMalformed {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Builds a schema from an already-materialized column list.
    ///
    /// # Errors
    /// Returns a description of the problem if the list is shorter than the
    /// reserved numeric prefix.
    pub fn from_columns(columns: Vec<String>) -> Result<Self, String> {
        if columns.len() < RESERVED_COLUMNS {
            return Err(format!(
                "expected at least {RESERVED_COLUMNS} columns, got {}",
                columns.len()
            ));
        }

        for (i, expected) in RESERVED_NAMES.iter().enumerate() {
            if columns[i] != *expected {
                warn!(
                    position = i,
                    found = %columns[i],
                    expected,
                    "schema reserved column name differs from convention"
                );
            }
        }

        info!(
            columns = columns.len(),
            locations = columns.len() - RESERVED_COLUMNS,
            "column schema loaded"
        );

        Ok(Self { columns })
    }

    /// All feature columns, in training order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The location indicator names: everything after the reserved prefix.
    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.columns[RESERVED_COLUMNS..]
    }

    /// Width of the feature vectors this schema describes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name, matched exactly after ASCII
    /// lower-casing. Absence is a normal outcome, not an error.
    ///
    /// Surrounding whitespace is deliberately not trimmed; the schema is
    /// produced by the training pipeline with already-normalized names.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        let needle = name.to_ascii_lowercase();
        self.columns.iter().position(|c| *c == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ColumnSchema {
        ColumnSchema::from_columns(vec![
            "total_sqft".to_owned(),
            "bath".to_owned(),
            "bhk".to_owned(),
            "indira nagar".to_owned(),
            "whitefield".to_owned(),
        ])
        .expect("sample schema")
    }

    #[test]
    fn locations_are_the_tail_of_the_columns() {
        let schema = sample();
        assert_eq!(schema.size(), 5);
        assert_eq!(schema.locations(), ["indira nagar", "whitefield"]);
    }

    #[test]
    fn position_is_case_insensitive_exact() {
        let schema = sample();
        assert_eq!(schema.position("Whitefield"), Some(4));
        assert_eq!(schema.position("WHITEFIELD"), Some(4));
        // No whitespace normalization: exact match after lower-casing only.
        assert_eq!(schema.position(" whitefield "), None);
        assert_eq!(schema.position("unknown place"), None);
    }

    #[test]
    fn too_few_columns_is_rejected() {
        let err = ColumnSchema::from_columns(vec!["total_sqft".to_owned()]).unwrap_err();
        assert!(err.contains("at least 3"));
    }
}
