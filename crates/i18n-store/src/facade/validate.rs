//! Cross-locale validation of translation tables.

use std::collections::BTreeSet;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::scan_template;
use crate::types::TranslationTable;

/// A problem found when comparing a translation against its source locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    /// The target defines a key the source does not have.
    #[error("unknown key '{key}' in locale '{locale}'{}", format_suggestions(suggestions))]
    UnknownKey {
        key: String,
        locale: String,
        suggestions: Vec<String>,
    },

    /// The source defines a key the target does not translate.
    #[error("key '{key}' is missing in locale '{locale}'")]
    MissingKey { key: String, locale: String },

    /// The target template uses a different set of placeholders.
    #[error(
        "key '{key}' in locale '{locale}' uses placeholders [{}], source uses [{}]",
        found.join(", "),
        expected.join(", ")
    )]
    PlaceholderMismatch {
        key: String,
        locale: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compare `target` against `source`, reporting keys only one side defines
/// and keys whose placeholder sets differ.
///
/// Warnings are ordered: unknown keys, then missing keys, then placeholder
/// mismatches, each sorted by key.
pub fn validate_tables(
    source: &TranslationTable,
    target: &TranslationTable,
    target_locale: &str,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for key in target.keys().filter(|key| !source.contains_key(key)) {
        warnings.push(ValidationWarning::UnknownKey {
            key: key.to_string(),
            locale: target_locale.to_string(),
            suggestions: compute_suggestions(key, source.keys()),
        });
    }

    for key in source.keys().filter(|key| !target.contains_key(key)) {
        warnings.push(ValidationWarning::MissingKey {
            key: key.to_string(),
            locale: target_locale.to_string(),
        });
    }

    for (key, source_template) in source {
        let Some(target_template) = target.get(key) else {
            continue;
        };
        let expected = placeholder_set(source_template);
        let found = placeholder_set(target_template);
        if expected != found {
            warnings.push(ValidationWarning::PlaceholderMismatch {
                key: key.clone(),
                locale: target_locale.to_string(),
                expected: expected.into_iter().collect(),
                found: found.into_iter().collect(),
            });
        }
    }

    warnings
}

/// Distinct placeholder names used by a template, sorted.
pub fn placeholder_set(template: &str) -> BTreeSet<String> {
    scan_template(template)
        .placeholders()
        .map(ToString::to_string)
        .collect()
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for keys <= 3 chars
/// - distance <= 2 for longer keys
/// - Limit to 3 suggestions, sorted by distance
fn compute_suggestions<'a>(key: &str, available: impl Iterator<Item = &'a str>) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(key, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
