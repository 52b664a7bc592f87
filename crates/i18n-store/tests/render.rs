//! Integration tests for placeholder interpolation.

use i18n_store::{RenderWarning, Replacements, render, render_with_warnings, replacements};
use tracing_test::traced_test;

// =========================================================================
// Substitution
// =========================================================================

#[test]
fn template_without_placeholders_is_unchanged() {
    assert_eq!(render("Hello, world!", &Replacements::new()), "Hello, world!");
}

#[test]
fn substitutes_single_placeholder() {
    assert_eq!(
        render("Hello {name}", &replacements! { "name" => "Ada" }),
        "Hello Ada"
    );
}

#[test]
fn substitutes_repeated_placeholder() {
    assert_eq!(
        render("{x}-{x}-{x}", &replacements! { "x" => "o" }),
        "o-o-o"
    );
}

#[test]
fn extra_replacements_are_ignored() {
    assert_eq!(
        render("Hi {a}", &replacements! { "a" => 1, "b" => 2 }),
        "Hi 1"
    );
}

#[test]
fn float_replacement() {
    assert_eq!(
        render("{ratio}%", &replacements! { "ratio" => 12.5 }),
        "12.5%"
    );
}

#[test]
fn count_replacement_keeps_full_magnitude() {
    assert_eq!(
        render("{n} items", &replacements! { "n" => 3_usize }),
        "3 items"
    );
    assert_eq!(
        render("{n}", &replacements! { "n" => usize::MAX }),
        usize::MAX.to_string()
    );
}

#[test]
fn empty_string_replacement_counts_as_defined() {
    let (text, warnings) = render_with_warnings("[{x}]", &replacements! { "x" => "" });
    assert_eq!(text, "[]");
    assert!(warnings.is_empty());
}

#[test]
fn replacement_values_are_not_rescanned() {
    let r = replacements! { "a" => "{b}", "b" => "nope" };
    assert_eq!(render("{a}", &r), "{b}");
}

#[test]
fn non_token_braces_pass_through() {
    let r = replacements! { "name" => "Bo" };
    assert_eq!(render("{} {name} {first name}", &r), "{} Bo {first name}");
}

#[test]
fn doubled_braces_keep_outer_braces() {
    assert_eq!(
        render("{{name}}", &replacements! { "name" => "Bo" }),
        "{Bo}"
    );
}

// =========================================================================
// Unresolved Placeholders
// =========================================================================

#[test]
fn unresolved_placeholder_is_left_verbatim() {
    let (text, warnings) =
        render_with_warnings("Hi {name}, {unknown}", &replacements! { "name" => "Bo" });

    assert_eq!(text, "Hi Bo, {unknown}");
    assert_eq!(
        warnings,
        vec![RenderWarning::UnresolvedPlaceholder {
            template: "Hi {name}, {unknown}".to_string(),
            placeholder: "{unknown}".to_string(),
        }]
    );
}

#[test]
fn each_unresolved_occurrence_is_reported() {
    let (_, warnings) = render_with_warnings("{a} {b} {a}", &Replacements::new());
    let tokens: Vec<&str> = warnings.iter().map(RenderWarning::placeholder).collect();
    assert_eq!(tokens, vec!["{a}", "{b}", "{a}"]);
}

#[test]
fn warning_display_text() {
    let (_, warnings) = render_with_warnings("Hi {name}", &Replacements::new());
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @r#"placeholder '{name}' not found in replacements for "Hi {name}""#
    );
}

#[test]
#[traced_test]
fn render_emits_one_diagnostic_per_unresolved_placeholder() {
    let text = render("Hi {name}, {unknown}", &replacements! { "name" => "Bo" });
    assert_eq!(text, "Hi Bo, {unknown}");

    assert!(logs_contain("not all placeholders found"));
    assert!(logs_contain("{unknown}"));
    logs_assert(|lines: &[&str]| {
        let count = lines
            .iter()
            .filter(|line| line.contains("not all placeholders found"))
            .count();
        if count == 1 {
            Ok(())
        } else {
            Err(format!("expected 1 diagnostic, got {count}"))
        }
    });
}

#[test]
#[traced_test]
fn fully_resolved_render_is_silent() {
    render("Hello {name}", &replacements! { "name" => "Ada" });
    assert!(!logs_contain("not all placeholders found"));
}

#[test]
#[traced_test]
fn render_with_warnings_does_not_log() {
    let (_, warnings) = render_with_warnings("{missing}", &Replacements::new());
    assert_eq!(warnings.len(), 1);
    assert!(!logs_contain("not all placeholders found"));
}
