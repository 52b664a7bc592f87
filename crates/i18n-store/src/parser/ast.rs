//! AST types for scanned templates.

/// A template string split into literal text and `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterate over placeholder identifiers in order of appearance.
    ///
    /// Repeated placeholders are yielded once per occurrence.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Returns true if the template contains no placeholders.
    pub fn is_literal(&self) -> bool {
        self.placeholders().next().is_none()
    }
}

/// A segment of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, emitted unchanged.
    Literal(String),

    /// A `{name}` token. Holds the identifier without braces.
    Placeholder(String),
}

impl Segment {
    /// Reconstruct the source text of this segment.
    pub fn source_text(&self) -> String {
        match self {
            Segment::Literal(text) => text.clone(),
            Segment::Placeholder(name) => format!("{{{name}}}"),
        }
    }
}
