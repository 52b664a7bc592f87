//! Implementation of the `i18n-store check` command.

use std::path::{Path, PathBuf};

use i18n_store::{validate_tables, ValidationWarning};
use miette::{miette, Report};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::table_file::read_table;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Check keys and placeholders against a source file
    #[arg(long)]
    pub strict: Option<PathBuf>,
}

/// JSON output for a single checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    valid: bool,
    keys: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let source = match &args.strict {
        Some(path) => match read_table(path)? {
            Ok(table) => Some(table),
            Err(diagnostic) => return Err(diagnostic.into()),
        },
        None => None,
    };

    let mut results = Vec::with_capacity(args.files.len());
    let mut failed = false;

    for file in &args.files {
        let name = file.display().to_string();
        match read_table(file)? {
            Ok(table) => {
                let warnings: Vec<ValidationWarning> = source
                    .as_ref()
                    .map(|source| validate_tables(source, &table, &locale_name(file)))
                    .unwrap_or_default();
                failed |= !warnings.is_empty();
                results.push(CheckJson {
                    file: name,
                    valid: true,
                    keys: table.len(),
                    errors: Vec::new(),
                    warnings: warnings.iter().map(ToString::to_string).collect(),
                });
            }
            Err(diagnostic) => {
                failed = true;
                let message = diagnostic.to_string();
                if !args.json {
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                results.push(CheckJson {
                    file: name,
                    valid: false,
                    keys: 0,
                    errors: vec![message],
                    warnings: Vec::new(),
                });
            }
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| miette!("Failed to serialize results: {}", e))?;
        println!("{}", json);
    } else {
        for result in results.iter().filter(|r| r.valid) {
            if result.warnings.is_empty() {
                println!("{} {} ({} keys)", "ok".green(), result.file, result.keys);
            } else {
                println!("{} {}", "warning".yellow(), result.file);
                for warning in &result.warnings {
                    println!("  - {}", warning);
                }
            }
        }
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Locale name for warnings: the file stem, e.g. `de` for `i18n/de.json`.
fn locale_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
