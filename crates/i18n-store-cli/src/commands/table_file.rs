//! Shared loading of translation files for CLI commands.

// miette's derive reads the diagnostic fields in generated code that rustc
// does not see.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use i18n_store::loader::parse_table;
use i18n_store::{LoadError, TranslationTable};
use miette::{miette, Diagnostic, IntoDiagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A translation file whose content is not a flat JSON object of strings.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid translation file: {message}")]
#[diagnostic(
    code(i18n_store::parse),
    help("translation files must be a flat JSON object with string values")
)]
pub struct TableDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    at: SourceSpan,

    message: String,
}

impl TableDiagnostic {
    fn new(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        Self {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            at: (byte_offset(content, line, column), 1).into(),
            message,
        }
    }
}

/// Byte offset of a 1-based line and column, clamped to the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}

/// Read a translation file.
///
/// Unreadable files are fatal errors. Content that is not a flat JSON object
/// of strings is returned as a diagnostic so callers can keep going.
pub fn read_table(path: &Path) -> miette::Result<Result<TranslationTable, TableDiagnostic>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read translation file {:?}: {}", path, e))?;

    match parse_table(&content) {
        Ok(table) => Ok(Ok(table)),
        Err(LoadError::Parse {
            line,
            column,
            message,
            ..
        }) => Ok(Err(TableDiagnostic::new(
            path, &content, line, column, message,
        ))),
        Err(e @ LoadError::Io { .. }) => Err(miette!("{}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_counts_preceding_lines() {
        let content = "{\n  \"a\": 1\n}";
        assert_eq!(byte_offset(content, 1, 1), 0);
        assert_eq!(byte_offset(content, 2, 8), 9);
    }

    #[test]
    fn offset_handles_crlf_and_overflow() {
        let content = "{\r\n  \"a\": 1\r\n}";
        assert_eq!(byte_offset(content, 2, 3), 5);
        assert_eq!(byte_offset(content, 9, 9), content.len());
    }
}
