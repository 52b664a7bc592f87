mod locale_id;
mod replacement;
mod table;

pub use locale_id::LocaleId;
pub use replacement::{Replacement, Replacements};
pub use table::TranslationTable;
