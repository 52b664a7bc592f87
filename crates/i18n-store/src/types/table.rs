use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use serde::{Deserialize, Serialize};

/// A flat mapping from translation key to template string for one locale.
///
/// Keys are unique. Iteration order is sorted by key so reports and
/// serialized output are stable.
///
/// # Example
///
/// ```
/// use i18n_store::TranslationTable;
///
/// let table = TranslationTable::from([("greet", "Hello {name}")]);
/// assert_eq!(table.get("greet"), Some("Hello {name}"));
/// assert!(!table.contains_key("farewell"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, String>,
}

impl TranslationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the template for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether the table has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a template, returning the previous one for that key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(key.into(), template.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, template)` pairs in sorted key order.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a TranslationTable {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, template)| (key.into(), template.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for TranslationTable {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
