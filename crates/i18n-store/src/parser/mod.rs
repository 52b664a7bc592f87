//! Template scanning.
//!
//! Templates are plain strings with `{identifier}` placeholders. The scanner
//! produces an AST that the renderer walks and that validation tooling uses
//! to compare placeholder sets across locales.

pub mod ast;
mod template;

pub use ast::{Segment, Template};
pub use template::scan_template;
