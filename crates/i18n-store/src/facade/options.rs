use bon::Builder;
use serde::{Deserialize, Serialize};

/// Module name the facade looks up when none is configured.
pub const DEFAULT_MODULE_NAME: &str = "i18n";

/// Options for [`I18n::install`](crate::I18n::install).
///
/// # Example
///
/// ```
/// use i18n_store::InstallOptions;
///
/// let options = InstallOptions::builder().module_name("translations").build();
/// assert_eq!(options.module_name, "translations");
/// assert_eq!(InstallOptions::default().module_name, "i18n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InstallOptions {
    /// Name under which the translation module is registered in the store.
    #[builder(default = DEFAULT_MODULE_NAME.to_string())]
    #[serde(default = "default_module_name")]
    pub module_name: String,
}

impl Default for InstallOptions {
    fn default() -> Self {
        InstallOptions::builder().build()
    }
}

fn default_module_name() -> String {
    DEFAULT_MODULE_NAME.to_string()
}
