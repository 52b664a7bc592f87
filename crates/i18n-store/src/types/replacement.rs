use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Per-call mapping from placeholder identifier to replacement value.
pub type Replacements = HashMap<String, Replacement>;

/// A value substituted for a `{name}` placeholder.
///
/// Any variant is rendered through its `Display` form, so numbers and
/// booleans can be passed without converting them to strings first.
///
/// # Example
///
/// ```
/// use i18n_store::Replacement;
///
/// let count: Replacement = 3.into();
/// let name: Replacement = "Ada".into();
/// assert_eq!(count.to_string(), "3");
/// assert_eq!(name.as_string(), Some("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A boolean, rendered as `true` or `false`.
    Bool(bool),

    /// A string value.
    String(String),
}

impl Replacement {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Replacement::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Replacement::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Replacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Replacement::Number(n) => write!(f, "{n}"),
            Replacement::Float(n) => write!(f, "{n}"),
            Replacement::Bool(b) => write!(f, "{b}"),
            Replacement::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for Replacement {
    fn from(n: i32) -> Self {
        Replacement::Number(i64::from(n))
    }
}

impl From<i64> for Replacement {
    fn from(n: i64) -> Self {
        Replacement::Number(n)
    }
}

impl From<u32> for Replacement {
    fn from(n: u32) -> Self {
        Replacement::Number(i64::from(n))
    }
}

impl From<usize> for Replacement {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Replacement::String(n.to_string()), Replacement::Number)
    }
}

impl From<f64> for Replacement {
    fn from(n: f64) -> Self {
        Replacement::Float(n)
    }
}

impl From<bool> for Replacement {
    fn from(b: bool) -> Self {
        Replacement::Bool(b)
    }
}

impl From<String> for Replacement {
    fn from(s: String) -> Self {
        Replacement::String(s)
    }
}

impl From<&str> for Replacement {
    fn from(s: &str) -> Self {
        Replacement::String(s.to_string())
    }
}

impl From<&String> for Replacement {
    fn from(s: &String) -> Self {
        Replacement::String(s.clone())
    }
}
