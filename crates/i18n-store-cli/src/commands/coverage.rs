//! Coverage command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use comfy_table::{presets, ContentArrangement, Table};
use i18n_store::TranslationTable;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::table_file::read_table;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source locale file (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Locales to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Key coverage of one locale against the source table.
#[derive(Debug, Serialize)]
struct LocaleCoverage {
    locale: String,
    translated: usize,
    total: usize,
    /// Source keys with no translation, sorted.
    missing: Vec<String>,
}

impl LocaleCoverage {
    fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source = match read_table(&args.source)? {
        Ok(table) => table,
        Err(diagnostic) => return Err(diagnostic.into()),
    };

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut report: Vec<LocaleCoverage> = Vec::new();

    for locale in &args.lang {
        let locale_file = base_dir.join(format!("{}.json", locale));

        let translated = if locale_file.exists() {
            match read_table(&locale_file)? {
                Ok(table) => table,
                Err(diagnostic) => return Err(diagnostic.into()),
            }
        } else {
            // File doesn't exist - all keys are missing
            TranslationTable::new()
        };

        report.push(locale_coverage(locale, &source, &translated));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
        println!("{}", json);
    } else {
        println!("{}", coverage_table(&report));
        for coverage in report.iter().filter(|c| !c.is_complete()) {
            println!("\nMissing in {}:", coverage.locale);
            for key in &coverage.missing {
                println!("  - {}", key);
            }
        }
    }

    if args.strict && !report.iter().all(LocaleCoverage::is_complete) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Compare a translated table against the source keys.
fn locale_coverage(
    locale: &str,
    source: &TranslationTable,
    translated: &TranslationTable,
) -> LocaleCoverage {
    let missing: Vec<String> = source
        .keys()
        .filter(|key| !translated.contains_key(key))
        .map(ToString::to_string)
        .collect();

    LocaleCoverage {
        locale: locale.to_string(),
        translated: source.len() - missing.len(),
        total: source.len(),
        missing,
    }
}

/// One row per locale: translated/total and the number of missing keys.
fn coverage_table(report: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Locale", "Coverage", "Missing"]);

    for coverage in report {
        table.add_row([
            coverage.locale.clone(),
            format!("{}/{}", coverage.translated, coverage.total),
            coverage.missing.len().to_string(),
        ]);
    }
    table
}
