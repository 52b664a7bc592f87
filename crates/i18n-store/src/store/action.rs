use crate::store::mutation::Mutation;
use crate::types::{LocaleId, TranslationTable};

/// A named command dispatched to the translation module.
///
/// Each action commits exactly one [`Mutation`]. Neither action validates
/// its payload: a locale may be selected before its translations are added,
/// and an empty table is a valid way to clear a locale.
///
/// # Example
///
/// ```
/// use i18n_store::{Action, Store, TranslationModule, TranslationTable};
///
/// let mut store = Store::new();
/// store.register_module("i18n", TranslationModule::new());
/// store
///     .dispatch("i18n", Action::add_locale("en", TranslationTable::from([("hi", "Hi")])))
///     .unwrap();
/// store.dispatch("i18n", Action::set_locale("en")).unwrap();
///
/// let state = store.state("i18n").unwrap();
/// assert_eq!(state.locale().map(|l| l.as_str()), Some("en"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select the active locale.
    SetLocale { locale: LocaleId },

    /// Register or replace a locale's translation table.
    AddLocale {
        locale: LocaleId,
        translations: TranslationTable,
    },
}

impl Action {
    /// Build a `SetLocale` action.
    pub fn set_locale(locale: impl Into<LocaleId>) -> Self {
        Action::SetLocale {
            locale: locale.into(),
        }
    }

    /// Build an `AddLocale` action.
    pub fn add_locale(locale: impl Into<LocaleId>, translations: TranslationTable) -> Self {
        Action::AddLocale {
            locale: locale.into(),
            translations,
        }
    }

    /// The action name, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetLocale { .. } => "setLocale",
            Action::AddLocale { .. } => "addLocale",
        }
    }

    /// Convert this action into the mutation it commits.
    pub(crate) fn into_mutation(self) -> Mutation {
        match self {
            Action::SetLocale { locale } => Mutation::SetLocale { locale },
            Action::AddLocale {
                locale,
                translations,
            } => Mutation::AddLocale {
                locale,
                translations,
            },
        }
    }
}
