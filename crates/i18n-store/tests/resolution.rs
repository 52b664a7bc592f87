//! Integration tests for key resolution through the facade.

use i18n_store::{
    I18n, InstallOptions, Replacements, Store, TranslationModule, TranslationTable, render,
    replacements,
};
use tracing_test::traced_test;

fn install() -> I18n {
    let mut store = Store::new();
    store.register_module("i18n", TranslationModule::new());
    I18n::install_default(store.into_handle())
}

fn install_with_english() -> I18n {
    let i18n = install();
    i18n.add_locale(
        "en",
        TranslationTable::from([
            ("greet", "Hello {name}"),
            ("plain", "Just text"),
            ("pair", "{a} and {b}"),
        ]),
    );
    i18n.set_locale("en");
    i18n
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn resolves_key_with_replacement() {
    let i18n = install_with_english();
    assert_eq!(
        i18n.translate("greet", &replacements! { "name" => "Ada" }),
        "Hello Ada"
    );
}

#[test]
fn resolves_key_without_placeholders() {
    let i18n = install_with_english();
    assert_eq!(i18n.t("plain"), "Just text");
}

#[test]
fn numeric_and_boolean_replacements_are_stringified() {
    let i18n = install_with_english();
    assert_eq!(
        i18n.translate("pair", &replacements! { "a" => 7, "b" => true }),
        "7 and true"
    );
}

#[test]
fn no_locale_set_returns_key() {
    let i18n = install();
    assert_eq!(i18n.t("greet"), "greet");
}

#[test]
fn missing_key_returns_key() {
    let i18n = install_with_english();
    assert_eq!(i18n.t("farewell"), "farewell");
}

#[test]
fn missing_locale_returns_key() {
    let i18n = install_with_english();
    i18n.set_locale("de");
    assert_eq!(i18n.t("greet"), "greet");
}

#[test]
fn missing_key_is_rendered_as_template() {
    let i18n = install_with_english();
    assert_eq!(
        i18n.translate("Welcome back, {user}", &replacements! { "user" => "Bo" }),
        "Welcome back, Bo"
    );
}

#[test]
fn missing_locale_and_missing_key_fall_back_identically() {
    let key = "Items: {count}";
    let r = replacements! { "count" => 2 };

    let missing_key = install_with_english();
    let missing_locale = install_with_english();
    missing_locale.set_locale("xx");

    assert_eq!(missing_key.translate(key, &r), render(key, &r));
    assert_eq!(missing_locale.translate(key, &r), render(key, &r));
}

#[test]
fn switching_locale_changes_resolution() {
    let i18n = install_with_english();
    i18n.add_locale("de", TranslationTable::from([("greet", "Hallo {name}")]));
    let r = replacements! { "name" => "Ada" };

    assert_eq!(i18n.translate("greet", &r), "Hello Ada");
    i18n.set_locale("de");
    assert_eq!(i18n.translate("greet", &r), "Hallo Ada");
}

#[test]
fn locale_selected_before_translations_arrive() {
    let i18n = install();
    i18n.set_locale("de");
    assert_eq!(i18n.t("greet"), "greet");

    i18n.add_locale("de", TranslationTable::from([("greet", "Hallo")]));
    assert_eq!(i18n.t("greet"), "Hallo");
}

#[test]
fn replaced_table_drops_old_keys() {
    let i18n = install_with_english();
    i18n.add_locale("en", TranslationTable::from([("other", "Other")]));
    assert_eq!(i18n.t("plain"), "plain");
    assert_eq!(i18n.t("other"), "Other");
}

#[test]
fn resolution_does_not_mutate_state() {
    let i18n = install_with_english();
    let before = i18n.store().borrow().state("i18n").cloned();

    i18n.t("greet");
    i18n.t("missing {x}");
    i18n.translate("pair", &replacements! { "a" => 1 });

    let after = i18n.store().borrow().state("i18n").cloned();
    assert_eq!(before, after);
}

#[test]
fn translate_with_warnings_reports_unresolved() {
    let i18n = install_with_english();
    let (text, warnings) = i18n.translate_with_warnings("pair", &replacements! { "a" => 1 });
    assert_eq!(text, "1 and {b}");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].placeholder(), "{b}");
}

#[test]
fn clones_share_state() {
    let i18n = install();
    let component = i18n.clone();
    i18n.add_locale("en", TranslationTable::from([("hi", "Hi")]));
    i18n.set_locale("en");
    assert_eq!(component.t("hi"), "Hi");
}

#[test]
fn template_cache_is_shared_and_clearable() {
    let i18n = install_with_english();
    i18n.t("plain");
    i18n.t("plain");
    i18n.translate("greet", &replacements! { "name" => "x" });
    assert_eq!(i18n.clone().template_cache_len(), 2);

    i18n.clear_template_cache();
    assert_eq!(i18n.template_cache_len(), 0);
}

#[test]
fn missing_keys_are_not_cached() {
    let i18n = install_with_english();
    for n in 0..50 {
        i18n.t(&format!("missing.{n}"));
    }
    assert_eq!(i18n.template_cache_len(), 0);

    assert_eq!(
        i18n.translate("Hi {who}", &replacements! { "who" => "there" }),
        "Hi there"
    );
    assert_eq!(i18n.template_cache_len(), 0);
}

// =========================================================================
// Locale Commands
// =========================================================================

#[test]
fn locale_is_none_until_set() {
    let i18n = install();
    assert!(i18n.locale().is_none());
    i18n.set_locale("en");
    assert_eq!(i18n.locale().unwrap(), "en");
}

#[test]
fn exists_reports_registered_locales() {
    let i18n = install_with_english();
    assert!(i18n.exists("en"));
    assert!(!i18n.exists("de"));
}

#[test]
fn exists_is_independent_of_active_locale() {
    let i18n = install();
    i18n.set_locale("fr");
    assert!(!i18n.exists("fr"));
}

#[test]
fn custom_module_name() {
    let mut store = Store::new();
    store.register_module("translations", TranslationModule::new());
    let i18n = I18n::install(
        store.into_handle(),
        InstallOptions::builder().module_name("translations").build(),
    );

    assert!(!i18n.is_degraded());
    assert_eq!(i18n.module_name(), "translations");
    i18n.add_locale("en", TranslationTable::from([("hi", "Hi")]));
    i18n.set_locale("en");
    assert_eq!(i18n.t("hi"), "Hi");
}

#[test]
fn facades_over_separate_stores_are_independent() {
    let a = install_with_english();
    let b = install();
    assert_eq!(a.t("plain"), "Just text");
    assert_eq!(b.t("plain"), "plain");
    assert!(b.locale().is_none());
}

// =========================================================================
// Degraded Mode
// =========================================================================

fn install_misconfigured() -> I18n {
    let mut store = Store::new();
    store.register_module("i18n", TranslationModule::new());
    I18n::install(
        store.into_handle(),
        InstallOptions::builder().module_name("l10n").build(),
    )
}

#[test]
#[traced_test]
fn missing_module_logs_misconfiguration_once() {
    let i18n = install_misconfigured();
    assert!(i18n.is_degraded());
    i18n.t("a");
    i18n.t("b");

    assert!(logs_contain("not correctly initialized, check the module name"));
    logs_assert(|lines: &[&str]| {
        let count = lines
            .iter()
            .filter(|line| line.contains("check the module name"))
            .count();
        if count == 1 {
            Ok(())
        } else {
            Err(format!("expected 1 misconfiguration diagnostic, got {count}"))
        }
    });
}

#[test]
fn degraded_translate_is_identity() {
    let i18n = install_misconfigured();
    assert_eq!(
        i18n.translate("Hello {name}", &replacements! { "name" => "Ada" }),
        "Hello {name}"
    );
    let (text, warnings) = i18n.translate_with_warnings("k {x}", &Replacements::new());
    assert_eq!(text, "k {x}");
    assert!(warnings.is_empty());
}

#[test]
#[traced_test]
fn degraded_set_locale_is_ignored_with_diagnostic() {
    let i18n = install_misconfigured();
    i18n.set_locale("en");

    assert!(i18n.locale().is_none());
    assert!(i18n.store().borrow().state("i18n").unwrap().locale().is_none());
    assert!(logs_contain("ignoring command"));
    assert!(logs_contain("setLocale"));
}

#[test]
fn degraded_add_locale_is_ignored() {
    let i18n = install_misconfigured();
    i18n.add_locale("en", TranslationTable::from([("hi", "Hi")]));

    assert!(!i18n.exists("en"));
    assert!(!i18n.store().borrow().state("i18n").unwrap().has_locale("en"));
}

#[test]
fn degraded_validation_is_empty() {
    let i18n = install_misconfigured();
    assert!(i18n.validate_translations("en", "de").is_empty());
}
