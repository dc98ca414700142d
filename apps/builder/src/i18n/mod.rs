// Localization: typed string catalog plus explicit selection state.
// The catalog schema is declared as plain structs, so a missing key is a
// compile error rather than a runtime hole; unknown language ids fall back
// to the default language at the call site.

pub mod catalog;
pub mod store;

pub use catalog::{BuildTranslations, Language, LanguageId, Translations};
pub use store::LanguageStore;
