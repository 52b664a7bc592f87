//! Tests for cross-locale translation validation.

use i18n_store::{
    I18n, Store, TranslationModule, TranslationTable, ValidationWarning, placeholder_set,
    validate_tables,
};

fn install() -> I18n {
    let mut store = Store::new();
    store.register_module("i18n", TranslationModule::new());
    I18n::install_default(store.into_handle())
}

// =========================================================================
// Key Coverage
// =========================================================================

#[test]
fn identical_tables_produce_no_warnings() {
    let table = TranslationTable::from([("greet", "Hello {name}")]);
    assert!(validate_tables(&table, &table, "en").is_empty());
}

#[test]
fn unknown_key_in_target() {
    let source = TranslationTable::from([("greet", "Hello")]);
    let target = TranslationTable::from([("greet", "Hallo"), ("extra", "Extra")]);

    assert_eq!(
        validate_tables(&source, &target, "de"),
        vec![ValidationWarning::UnknownKey {
            key: "extra".to_string(),
            locale: "de".to_string(),
            suggestions: vec![],
        }]
    );
}

#[test]
fn unknown_key_suggests_near_miss() {
    let source = TranslationTable::from([("greeting", "Hello")]);
    let target = TranslationTable::from([("greeting", "Hallo"), ("greting", "Hallo")]);

    let warnings = validate_tables(&source, &target, "de");
    assert_eq!(warnings.len(), 1);
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"unknown key 'greting' in locale 'de', did you mean: greeting?"
    );
}

#[test]
fn missing_key_in_target() {
    let source = TranslationTable::from([("greet", "Hello"), ("bye", "Bye")]);
    let target = TranslationTable::from([("greet", "Hallo")]);

    assert_eq!(
        validate_tables(&source, &target, "de"),
        vec![ValidationWarning::MissingKey {
            key: "bye".to_string(),
            locale: "de".to_string(),
        }]
    );
}

// =========================================================================
// Placeholder Sets
// =========================================================================

#[test]
fn placeholder_mismatch() {
    let source = TranslationTable::from([("greet", "Hello {name}")]);
    let target = TranslationTable::from([("greet", "Hallo {first} {last}")]);

    let warnings = validate_tables(&source, &target, "de");
    assert_eq!(
        warnings,
        vec![ValidationWarning::PlaceholderMismatch {
            key: "greet".to_string(),
            locale: "de".to_string(),
            expected: vec!["name".to_string()],
            found: vec!["first".to_string(), "last".to_string()],
        }]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"key 'greet' in locale 'de' uses placeholders [first, last], source uses [name]"
    );
}

#[test]
fn placeholder_order_and_repetition_do_not_matter() {
    let source = TranslationTable::from([("pair", "{a} and {b}")]);
    let target = TranslationTable::from([("pair", "{b}, {a}, {b}")]);
    assert!(validate_tables(&source, &target, "de").is_empty());
}

#[test]
fn placeholder_set_is_sorted_and_distinct() {
    let names: Vec<String> = placeholder_set("{z} {a} {z} {m}").into_iter().collect();
    assert_eq!(names, vec!["a", "m", "z"]);
}

// =========================================================================
// Through the Facade
// =========================================================================

#[test]
fn validate_translations_between_registered_locales() {
    let i18n = install();
    i18n.add_locale("en", TranslationTable::from([("a", "A"), ("b", "B")]));
    i18n.add_locale("de", TranslationTable::from([("a", "A"), ("c", "C")]));

    let warnings = i18n.validate_translations("en", "de");
    let rendered: Vec<String> = warnings.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "unknown key 'c' in locale 'de', did you mean: a, b?".to_string(),
            "key 'b' is missing in locale 'de'".to_string(),
        ]
    );
}

#[test]
fn validate_translations_with_unregistered_locale_is_empty() {
    let i18n = install();
    i18n.add_locale("en", TranslationTable::from([("a", "A")]));
    assert!(i18n.validate_translations("en", "de").is_empty());
    assert!(i18n.validate_translations("de", "en").is_empty());
}
