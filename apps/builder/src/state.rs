use crate::config::Config;
use crate::export::ExportSession;
use crate::i18n::LanguageStore;

/// Application state built once in `main` and passed explicitly to every
/// flow. Language selection and form state are plain values, not ambient
/// singletons.
pub struct AppState {
    pub config: Config,
    pub languages: LanguageStore,
    /// One gate per user session: at most one export in flight at a time.
    pub exports: ExportSession,
}
