//! Module-level translation namespace for the `global` feature.
//!
//! Code that has no [`I18n`] handle in reach (free functions, error
//! formatting) can use these functions after one handle has been installed
//! with [`install_global`]. The namespace is per thread, matching the
//! single-threaded execution model of the store.
//!
//! Before installation every function behaves like a degraded facade: keys
//! are returned unchanged and commands are ignored with a diagnostic.

use std::cell::RefCell;

use tracing::error;

use crate::{I18n, LocaleId, Replacements, TranslationTable};

thread_local! {
    static GLOBAL_I18N: RefCell<Option<I18n>> = const { RefCell::new(None) };
}

/// Install `i18n` as this thread's global facade, returning the previous one.
pub fn install_global(i18n: I18n) -> Option<I18n> {
    GLOBAL_I18N.with(|global| global.borrow_mut().replace(i18n))
}

/// Remove this thread's global facade.
pub fn uninstall_global() -> Option<I18n> {
    GLOBAL_I18N.with(|global| global.borrow_mut().take())
}

/// Provides access to the installed global facade, if any.
pub fn with_i18n<T>(f: impl FnOnce(&I18n) -> T) -> Option<T> {
    let i18n = GLOBAL_I18N.with(|global| global.borrow().clone())?;
    Some(f(&i18n))
}

/// Resolve `key` with `replacements` through the global facade.
pub fn translate(key: &str, replacements: &Replacements) -> String {
    with_i18n(|i18n| i18n.translate(key, replacements)).unwrap_or_else(|| key.to_string())
}

/// Resolve `key` with no replacements through the global facade.
pub fn t(key: &str) -> String {
    translate(key, &Replacements::new())
}

/// Returns the active locale of the global facade.
pub fn locale() -> Option<LocaleId> {
    with_i18n(I18n::locale).flatten()
}

/// Sets the active locale of the global facade.
pub fn set_locale(locale: impl Into<LocaleId>) {
    if with_i18n(|i18n| i18n.set_locale(locale)).is_none() {
        error!("global i18n facade is not installed");
    }
}

/// Registers translations for `locale` through the global facade.
pub fn add_locale(locale: impl Into<LocaleId>, translations: TranslationTable) {
    if with_i18n(|i18n| i18n.add_locale(locale, translations)).is_none() {
        error!("global i18n facade is not installed");
    }
}

/// Checks whether the global facade has translations for `locale`.
pub fn exists(locale: &str) -> bool {
    with_i18n(|i18n| i18n.exists(locale)).unwrap_or(false)
}
