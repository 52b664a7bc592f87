//! The resolution facade.
//!
//! [`I18n`] reads the active locale and templates from a store, renders
//! them with [`render`], and forwards locale commands to the store as
//! actions.

mod i18n;
mod options;
mod render;
mod validate;

pub use i18n::I18n;
pub use options::{DEFAULT_MODULE_NAME, InstallOptions};
pub use render::{RenderWarning, render, render_with_warnings};
pub use validate::{ValidationWarning, placeholder_set, validate_tables};
