//! Placeholder scanner using winnow.
//!
//! Splits a template into literal runs and `{identifier}` tokens, where an
//! identifier is one or more ASCII word characters (`[A-Za-z0-9_]`). Any
//! brace that does not open a complete token is literal text, so scanning
//! never fails.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Scan a template string into literal and placeholder segments.
///
/// Tokens are matched left to right without overlap, so `"{{name}}"` yields
/// the literal `{`, the placeholder `name`, and the literal `}`.
pub fn scan_template(input: &str) -> Template {
    let mut remaining = input;
    let mut segments: Vec<Segment> = repeat(0.., segment)
        .parse_next(&mut remaining)
        .unwrap_or_default();

    if !remaining.is_empty() {
        segments.push(Segment::Literal(remaining.to_string()));
    }

    Template {
        segments: merge_literals(segments),
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder(_) => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_run, literal_char)).parse_next(input)
}

/// Parse a placeholder token: { word+ }
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', take_while(1.., is_word_char), '}')
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

/// Parse a run of characters that cannot start a placeholder.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// Parse a single `{` that did not open a placeholder.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Check if a character is a placeholder word character.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
