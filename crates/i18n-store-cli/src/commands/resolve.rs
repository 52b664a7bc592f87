//! Implementation of the `i18n-store resolve` command.

use std::path::PathBuf;

use i18n_store::{I18n, InstallOptions, Replacement, Replacements, Store, TranslationModule};
use miette::IntoDiagnostic;
use serde::Serialize;

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Active locale (e.g., en, de-DE)
    #[arg(long, required = true)]
    pub locale: String,

    /// Translation key to resolve
    #[arg(long, required = true)]
    pub key: String,

    /// Translation files in locale=path format (repeatable)
    #[arg(short = 't', long = "translations", value_parser = parse_key_val::<PathBuf>)]
    pub translations: Vec<(String, PathBuf)>,

    /// Replacements in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val::<String>)]
    pub params: Vec<(String, String)>,

    /// Store module name for the translation state
    #[arg(long, default_value = i18n_store::DEFAULT_MODULE_NAME)]
    pub module_name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
pub struct ResolveResult {
    pub result: String,
    pub unresolved: Vec<String>,
}

/// Parse a key=value argument string.
fn parse_key_val<T: From<String>>(s: &str) -> Result<(String, T), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid argument format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), T::from(s[pos + 1..].to_string())))
}

/// Interpret a replacement value: integer, then boolean, then string.
fn parse_replacement(value: String) -> Replacement {
    if let Ok(n) = value.parse::<i64>() {
        Replacement::from(n)
    } else if let Ok(b) = value.parse::<bool>() {
        Replacement::from(b)
    } else {
        Replacement::from(value)
    }
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    let mut store = Store::new();
    store.register_module(args.module_name.clone(), TranslationModule::new());
    let options = InstallOptions::builder()
        .module_name(args.module_name)
        .build();
    let i18n = I18n::install(store.into_handle(), options);

    for (locale, path) in &args.translations {
        i18n.load_translations(locale.as_str(), path)
            .map_err(|e| miette::miette!("Failed to load translations for '{}': {}", locale, e))?;
    }
    i18n.set_locale(args.locale.as_str());

    let replacements: Replacements = args
        .params
        .into_iter()
        .map(|(name, value)| (name, parse_replacement(value)))
        .collect();

    if args.json {
        let (result, warnings) = i18n.translate_with_warnings(&args.key, &replacements);
        let output = ResolveResult {
            result,
            unresolved: warnings
                .iter()
                .map(|w| w.placeholder().to_string())
                .collect(),
        };
        let json = serde_json::to_string_pretty(&output).into_diagnostic()?;
        println!("{}", json);
    } else {
        println!("{}", i18n.translate(&args.key, &replacements));
    }
    Ok(exitcode::OK)
}
