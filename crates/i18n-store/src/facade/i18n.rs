//! The resolution facade handed to UI components.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use tracing::{error, warn};

use crate::facade::options::InstallOptions;
use crate::facade::render::{RenderWarning, render_template, report_unresolved};
use crate::facade::validate::{ValidationWarning, validate_tables};
use crate::loader::{LoadError, load_table};
use crate::parser::{Template, scan_template};
use crate::store::{Action, StoreHandle, TranslationState};
use crate::types::{LocaleId, Replacements, TranslationTable};

/// Resolves translation keys against a [`Store`](crate::Store) and exposes
/// locale management commands.
///
/// `I18n` is a cheap, cloneable service handle: install it once and pass
/// clones to every component that renders text. All clones share the same
/// store and template cache.
///
/// Resolution never fails. A key with no translation in the active locale
/// (or with no active locale at all) is rendered as if the key itself were
/// the template.
///
/// If the translation module is not registered under the configured name at
/// install time, the facade runs in degraded mode: keys are returned
/// unchanged, no locale is reported, and commands are ignored with a
/// diagnostic.
///
/// Store subscribers may call back into the facade. Reads made while the
/// store is being mutated fall back as if the module held no state, and
/// commands issued from a subscriber are ignored; both are logged.
///
/// # Example
///
/// ```
/// use i18n_store::{
///     I18n, InstallOptions, Store, TranslationModule, TranslationTable, replacements,
/// };
///
/// let mut store = Store::new();
/// store.register_module("i18n", TranslationModule::new());
/// let i18n = I18n::install(store.into_handle(), InstallOptions::default());
///
/// i18n.add_locale("en", TranslationTable::from([("greet", "Hello {name}")]));
/// i18n.set_locale("en");
///
/// assert_eq!(i18n.translate("greet", &replacements! { "name" => "Ada" }), "Hello Ada");
/// assert_eq!(i18n.t("farewell"), "farewell");
/// ```
#[derive(Debug, Clone)]
pub struct I18n {
    store: StoreHandle,

    /// Name of the translation module in the store.
    module: String,

    /// True when the module was missing at install time.
    degraded: bool,

    /// Scanned translation templates keyed by template text. Keys that fall
    /// back to themselves are not cached.
    template_cache: Rc<RefCell<HashMap<String, Rc<Template>>>>,
}

impl I18n {
    /// Install the facade over `store`.
    ///
    /// Checks once that a translation module is registered under
    /// `options.module_name`. If not, logs the misconfiguration and returns a
    /// facade in degraded mode.
    pub fn install(store: StoreHandle, options: InstallOptions) -> Self {
        let degraded = !store.borrow().has_module(&options.module_name);
        if degraded {
            error!(
                module = %options.module_name,
                "i18n store module is not correctly initialized, check the module name"
            );
        }

        Self {
            store,
            module: options.module_name,
            degraded,
            template_cache: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Install with the default module name.
    pub fn install_default(store: StoreHandle) -> Self {
        Self::install(store, InstallOptions::default())
    }

    /// Returns true if the facade is running in degraded mode.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Name of the store module this facade reads.
    pub fn module_name(&self) -> &str {
        &self.module
    }

    /// Get a handle to the underlying store.
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve `key` in the active locale and substitute `replacements`.
    ///
    /// Falls back to rendering `key` itself when the active locale has no
    /// table or the table has no entry for `key`. Unresolved placeholders
    /// are logged and left in the output.
    pub fn translate(&self, key: &str, replacements: &Replacements) -> String {
        if self.degraded {
            return key.to_string();
        }
        let (text, template, warnings) = self.resolve(key, replacements);
        report_unresolved(&template, &warnings);
        text
    }

    /// Resolve `key` with no replacements.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &Replacements::new())
    }

    /// Like [`I18n::translate`], but returns unresolved placeholders instead
    /// of logging them.
    pub fn translate_with_warnings(
        &self,
        key: &str,
        replacements: &Replacements,
    ) -> (String, Vec<RenderWarning>) {
        if self.degraded {
            return (key.to_string(), Vec::new());
        }
        let (text, _, warnings) = self.resolve(key, replacements);
        (text, warnings)
    }

    /// Look up the template for `key` and render it. Returns the text, the
    /// template that was rendered, and any warnings.
    fn resolve(
        &self,
        key: &str,
        replacements: &Replacements,
    ) -> (String, String, Vec<RenderWarning>) {
        let found = self
            .read_state(|state| {
                let table = state.active_table()?;
                table.get(key).map(ToString::to_string)
            })
            .flatten();

        match found {
            Some(template) => {
                let scanned = self.cached_template(&template);
                let (text, warnings) = render_template(&template, &scanned, replacements);
                (text, template, warnings)
            }
            None => {
                let (text, warnings) = render_template(key, &scan_template(key), replacements);
                (text, key.to_string(), warnings)
            }
        }
    }

    /// Look up or scan and cache a translation template.
    fn cached_template(&self, template: &str) -> Rc<Template> {
        if let Some(scanned) = self.template_cache.borrow().get(template) {
            return Rc::clone(scanned);
        }
        let scanned = Rc::new(scan_template(template));
        self.template_cache
            .borrow_mut()
            .insert(template.to_string(), Rc::clone(&scanned));
        scanned
    }

    /// Clear the template cache.
    pub fn clear_template_cache(&self) {
        self.template_cache.borrow_mut().clear();
    }

    /// Return the number of cached templates.
    pub fn template_cache_len(&self) -> usize {
        self.template_cache.borrow().len()
    }

    // =========================================================================
    // Locale Management
    // =========================================================================

    /// Get the active locale. Always `None` in degraded mode.
    pub fn locale(&self) -> Option<LocaleId> {
        if self.degraded {
            return None;
        }
        self.read_state(|state| state.locale().cloned()).flatten()
    }

    /// Select the active locale. The locale does not need translations yet.
    pub fn set_locale(&self, locale: impl Into<LocaleId>) {
        let action = Action::set_locale(locale);
        if self.degraded {
            self.report_degraded(&action);
            return;
        }
        self.dispatch(action);
    }

    /// Register translations for `locale`, replacing any existing table.
    pub fn add_locale(&self, locale: impl Into<LocaleId>, translations: TranslationTable) {
        let action = Action::add_locale(locale, translations);
        if self.degraded {
            self.report_degraded(&action);
            return;
        }
        self.dispatch(action);
    }

    /// Check whether translations are registered for `locale`.
    pub fn exists(&self, locale: &str) -> bool {
        if self.degraded {
            return false;
        }
        self.read_state(|state| state.has_locale(locale)).unwrap_or(false)
    }

    /// Load a JSON translation file and register it for `locale`.
    ///
    /// Loading the same locale twice **replaces** its previous table.
    /// Returns the number of keys loaded. Nothing is dispatched if the file
    /// cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// i18n.load_translations("de", "assets/i18n/de.json")?;
    /// ```
    pub fn load_translations(
        &self,
        locale: impl Into<LocaleId>,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let table = load_table(path)?;
        let count = table.len();
        self.add_locale(locale, table);
        Ok(count)
    }

    fn report_degraded(&self, action: &Action) {
        error!(
            module = %self.module,
            action = action.name(),
            "i18n store module is not correctly initialized, ignoring command"
        );
    }

    /// Run `read` against the module state.
    ///
    /// Returns `None` if the module is missing or the store is mutably
    /// borrowed by a dispatch in progress.
    fn read_state<T>(&self, read: impl FnOnce(&TranslationState) -> T) -> Option<T> {
        let Ok(store) = self.store.try_borrow() else {
            warn!(module = %self.module, "i18n store is being mutated, reading no state");
            return None;
        };
        store.state(&self.module).map(read)
    }

    /// Commit `action`, then notify subscribers once the mutable borrow is
    /// released so they can read through the facade.
    fn dispatch(&self, action: Action) {
        let name = action.name();
        let committed = match self.store.try_borrow_mut() {
            Ok(mut store) => store.dispatch_deferred(&self.module, action),
            Err(_) => {
                error!(
                    module = %self.module,
                    action = name,
                    "i18n store is busy, ignoring command"
                );
                return;
            }
        };

        match committed {
            Ok(pending) => pending.notify(&self.store.borrow()),
            Err(e) => error!(action = name, error = %e, "failed to dispatch i18n action"),
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate translations for a target locale against a source locale.
    ///
    /// Returns an empty vector if either locale has no translations.
    pub fn validate_translations(&self, source: &str, target: &str) -> Vec<ValidationWarning> {
        if self.degraded {
            return Vec::new();
        }
        self.read_state(|state| match (state.table(source), state.table(target)) {
            (Some(source_table), Some(target_table)) => {
                validate_tables(source_table, target_table, target)
            }
            _ => Vec::new(),
        })
        .unwrap_or_default()
    }
}
