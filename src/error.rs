//! Error types.
//!
//! Enumeration itself cannot fail once its inputs are valid, so the
//! [`ComposeError`] variants are all about rejecting malformed arguments.
//! Catalog lookups have their own [`CatalogError`], which keeps a missing
//! catalog entry apart from a genuine I/O or parse failure.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for catalog operations.
#[derive(Debug)]
pub enum CatalogError {
    /// No catalog file exists for the requested structure.
    NotFound(PathBuf),
    /// File I/O error.
    Io(io::Error),
    /// Malformed catalog content.
    Parse(String),
}

impl From<io::Error> for CatalogError {
    fn from(e: io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(path) => write!(f, "Catalog entry not found: {}", path.display()),
            CatalogError::Io(e) => write!(f, "I/O error: {}", e),
            CatalogError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Error type for enumeration and conversion operations.
#[derive(Debug)]
pub enum ComposeError {
    /// Composition structure is empty, has a zero group, or too many inputs.
    InvalidStructure(String),
    /// Truth table has the wrong length or contains non-binary characters.
    InvalidTruthTable(String),
    /// Relabeling is not a permutation of the original inputs.
    InvalidPermutation(String),
    /// DNF text could not be parsed, or names an out-of-range input.
    ParseDnf(String),
    /// Structure exceeds the configured input ceiling.
    TooManyInputs { inputs: usize, max: usize },
    /// Catalog failure other than a missing entry.
    Catalog(CatalogError),
}

impl From<CatalogError> for ComposeError {
    fn from(e: CatalogError) -> Self {
        ComposeError::Catalog(e)
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::InvalidStructure(msg) => write!(f, "Invalid composition structure: {}", msg),
            ComposeError::InvalidTruthTable(msg) => write!(f, "Invalid truth table: {}", msg),
            ComposeError::InvalidPermutation(msg) => write!(f, "Invalid input permutation: {}", msg),
            ComposeError::ParseDnf(msg) => write!(f, "Invalid DNF: {}", msg),
            ComposeError::TooManyInputs { inputs, max } => {
                write!(f, "Structure has {} inputs, but at most {} are supported", inputs, max)
            }
            ComposeError::Catalog(e) => write!(f, "Catalog error: {}", e),
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComposeError::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct() {
        let e = CatalogError::NotFound(PathBuf::from("catalog/1-1.json"));
        assert!(matches!(e, CatalogError::NotFound(_)));
        assert_eq!(e.to_string(), "Catalog entry not found: catalog/1-1.json");
    }

    #[test]
    fn test_catalog_error_wraps() {
        let e: ComposeError = CatalogError::Parse("bad".to_string()).into();
        assert!(matches!(e, ComposeError::Catalog(CatalogError::Parse(_))));
        assert_eq!(e.to_string(), "Catalog error: Parse error: bad");
    }

    #[test]
    fn test_too_many_inputs_message() {
        let e = ComposeError::TooManyInputs { inputs: 7, max: 5 };
        assert_eq!(e.to_string(), "Structure has 7 inputs, but at most 5 are supported");
    }
}
