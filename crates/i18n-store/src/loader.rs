//! Reading translation tables from JSON.
//!
//! A translation file is a single flat JSON object whose values are all
//! strings:
//!
//! ```json
//! { "greet": "Hello {name}", "farewell": "Goodbye" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::TranslationTable;

/// Errors that occur while loading a translation table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a translation file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a flat JSON object of strings.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

/// Parse a translation table from a JSON string.
///
/// # Example
///
/// ```
/// use i18n_store::loader::parse_table;
///
/// let table = parse_table(r#"{ "greet": "Hello {name}" }"#).unwrap();
/// assert_eq!(table.get("greet"), Some("Hello {name}"));
/// assert!(parse_table(r#"{ "count": 3 }"#).is_err());
/// ```
pub fn parse_table(content: &str) -> Result<TranslationTable, LoadError> {
    parse_table_at(content, None)
}

/// Read and parse a translation table from a JSON file.
pub fn load_table(path: impl AsRef<Path>) -> Result<TranslationTable, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_table_at(&content, Some(path))
}

fn parse_table_at(content: &str, path: Option<&Path>) -> Result<TranslationTable, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::Parse {
        path: path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("<string>")),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}
