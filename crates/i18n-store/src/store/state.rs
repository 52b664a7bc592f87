use std::collections::BTreeMap;

use crate::store::mutation::Mutation;
use crate::types::{LocaleId, TranslationTable};

/// State owned by the translation module: the active locale and the
/// per-locale translation tables.
///
/// The state is read-only outside this crate. It changes only when the
/// owning [`Store`](crate::Store) commits a [`Mutation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationState {
    /// Active locale, or `None` before any locale has been selected.
    locale: Option<LocaleId>,

    /// Locale registry. The active locale need not have an entry here.
    translations: BTreeMap<LocaleId, TranslationTable>,
}

impl TranslationState {
    /// Create an empty state with no active locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the active locale.
    pub fn locale(&self) -> Option<&LocaleId> {
        self.locale.as_ref()
    }

    /// Get the full locale registry.
    pub fn translations(&self) -> &BTreeMap<LocaleId, TranslationTable> {
        &self.translations
    }

    /// Get the translation table for a locale.
    pub fn table(&self, locale: &str) -> Option<&TranslationTable> {
        self.translations.get(locale)
    }

    /// Get the translation table for the active locale.
    pub fn active_table(&self) -> Option<&TranslationTable> {
        self.locale
            .as_ref()
            .and_then(|locale| self.translations.get(locale))
    }

    /// Check whether the registry has an entry for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.translations.contains_key(locale)
    }

    /// Iterate over registered locales in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleId> {
        self.translations.keys()
    }

    /// Apply a committed mutation.
    pub(crate) fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::SetLocale { locale } => {
                self.locale = Some(locale.clone());
            }
            Mutation::AddLocale {
                locale,
                translations,
            } => {
                self.translations
                    .insert(locale.clone(), translations.clone());
            }
        }
    }
}
