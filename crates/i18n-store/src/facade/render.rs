//! Placeholder interpolation.

use thiserror::Error;
use tracing::{warn, warn_span};

use crate::parser::{Segment, Template, scan_template};
use crate::types::Replacements;

/// A non-fatal problem found while rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderWarning {
    /// A placeholder had no value in the replacement mapping. The token was
    /// left in the output unchanged.
    #[error("placeholder '{placeholder}' not found in replacements for \"{template}\"")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },
}

impl RenderWarning {
    /// The unresolved `{name}` token, braces included.
    pub fn placeholder(&self) -> &str {
        match self {
            RenderWarning::UnresolvedPlaceholder { placeholder, .. } => placeholder,
        }
    }
}

/// Substitute `{name}` placeholders in `template` with values from
/// `replacements`.
///
/// Substitution is a single left-to-right pass: replacement values are never
/// scanned for further placeholders. A placeholder with no replacement stays
/// in the output verbatim and is reported as a `warn`-level diagnostic.
///
/// # Example
///
/// ```
/// use i18n_store::{render, replacements};
///
/// let text = render("Hi {name}, {unknown}", &replacements! { "name" => "Bo" });
/// assert_eq!(text, "Hi Bo, {unknown}");
/// ```
pub fn render(template: &str, replacements: &Replacements) -> String {
    let (text, warnings) = render_with_warnings(template, replacements);
    report_unresolved(template, &warnings);
    text
}

/// Like [`render`], but returns unresolved placeholders as values instead of
/// logging them.
pub fn render_with_warnings(
    template: &str,
    replacements: &Replacements,
) -> (String, Vec<RenderWarning>) {
    render_template(template, &scan_template(template), replacements)
}

/// Render an already scanned template. `source` is the original text, used
/// for capacity and for warnings.
pub(crate) fn render_template(
    source: &str,
    template: &Template,
    replacements: &Replacements,
) -> (String, Vec<RenderWarning>) {
    let mut output = String::with_capacity(source.len());
    let mut warnings = Vec::new();

    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => {
                if let Some(value) = replacements.get(name) {
                    output.push_str(&value.to_string());
                } else {
                    let token = segment.source_text();
                    output.push_str(&token);
                    warnings.push(RenderWarning::UnresolvedPlaceholder {
                        template: source.to_string(),
                        placeholder: token,
                    });
                }
            }
        }
    }

    (output, warnings)
}

/// Emit one grouped diagnostic per unresolved placeholder.
pub(crate) fn report_unresolved(template: &str, warnings: &[RenderWarning]) {
    if warnings.is_empty() {
        return;
    }
    let span = warn_span!("unresolved_placeholders", template);
    let _entered = span.enter();
    for warning in warnings {
        warn!(
            template,
            placeholder = warning.placeholder(),
            "not all placeholders found"
        );
    }
}
