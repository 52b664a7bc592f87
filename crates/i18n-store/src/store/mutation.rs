use crate::types::{LocaleId, TranslationTable};

/// A synchronous state change committed to a [`TranslationState`](crate::TranslationState).
///
/// Mutations are produced by dispatching an [`Action`](crate::Action) and are
/// reported to store subscribers after they are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Overwrite the active locale.
    SetLocale { locale: LocaleId },

    /// Replace the translation table for a locale. Existing keys are not merged.
    AddLocale {
        locale: LocaleId,
        translations: TranslationTable,
    },
}

impl Mutation {
    /// The mutation type name, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::SetLocale { .. } => "SET_LOCALE",
            Mutation::AddLocale { .. } => "ADD_LOCALE",
        }
    }

    /// The locale this mutation targets.
    pub fn locale(&self) -> &LocaleId {
        match self {
            Mutation::SetLocale { locale } | Mutation::AddLocale { locale, .. } => locale,
        }
    }
}
