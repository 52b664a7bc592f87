//! Runtime string localization backed by an observable translation store.
//!
//! A [`Store`] holds a translation module with the active locale and one
//! flat [`TranslationTable`] per locale. The [`I18n`] facade resolves a key
//! against the active locale and substitutes `{name}` placeholders. Missing
//! locales, keys, and replacements never fail: they fall back to the key
//! itself or leave the placeholder in place.

pub mod facade;
#[cfg(feature = "global")]
pub mod global;
pub mod loader;
pub mod parser;
pub mod store;
pub mod types;

pub use facade::{
    DEFAULT_MODULE_NAME, I18n, InstallOptions, RenderWarning, ValidationWarning, placeholder_set,
    render, render_with_warnings, validate_tables,
};
pub use loader::LoadError;
pub use store::{
    Action, CommitEvent, Mutation, PendingCommit, Store, StoreError, StoreHandle,
    SubscriptionId, TranslationModule, TranslationState,
};
pub use types::{LocaleId, Replacement, Replacements, TranslationTable};

#[cfg(feature = "global")]
pub use global::{install_global, uninstall_global, with_i18n};

/// Creates a [`Replacements`] map from key-value pairs.
///
/// Values are converted via `Into<Replacement>`, so you can pass integers,
/// floats, booleans, or strings directly.
///
/// # Example
///
/// ```
/// use i18n_store::replacements;
///
/// let r = replacements! { "count" => 3, "name" => "Alice" };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r["count"].as_number(), Some(3));
/// assert_eq!(r["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! replacements {
    {} => {
        ::std::collections::HashMap::<String, $crate::Replacement>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Replacement>::new();
            $(
                let value: $crate::Replacement = ::std::convert::Into::into($value);
                map.insert($key.to_string(), value);
            )+
            map
        }
    };
}
