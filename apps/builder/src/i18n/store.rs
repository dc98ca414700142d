#![allow(dead_code)]

//! Language selection state and its single persisted key.
//!
//! The only thing this app ever persists is the selected language id: one
//! small JSON file under the data dir. Resume data never touches disk here.
//! A missing, unreadable, or unknown value degrades to "no selection", which
//! callers resolve to the default language.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::i18n::catalog::{Language, LanguageId, Translations};

const STATE_FILE: &str = "language.json";

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSelection {
    language: String,
}

/// Explicit selection state owned by the caller, not an ambient singleton.
///
/// `tentative` tracks the pick inside the language modal before the user
/// confirms; `cancel` reverts it. `cycle_index` drives the intro screen's
/// rotating language display (the frame clock lives with the UI, not here).
#[derive(Debug)]
pub struct LanguageStore {
    state_path: PathBuf,
    selected: Option<LanguageId>,
    tentative: Option<LanguageId>,
    cycle_index: usize,
}

impl LanguageStore {
    /// Loads the persisted selection from `data_dir`, tolerating every
    /// failure mode by starting unselected.
    pub fn load(data_dir: &Path) -> Self {
        let state_path = data_dir.join(STATE_FILE);
        let selected = read_selection(&state_path);
        LanguageStore {
            state_path,
            selected,
            // Pre-select the first catalog language for new users, matching
            // the language modal's initial highlight.
            tentative: selected.or(Some(LanguageId::DEFAULT)),
            cycle_index: 0,
        }
    }

    /// Whether the user has ever confirmed a language. New users get the
    /// animated intro; returning users skip it.
    pub fn is_confirmed(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<LanguageId> {
        self.selected
    }

    /// The effective language: the confirmed selection, else the default.
    pub fn language(&self) -> &'static Language {
        Language::get(self.selected.unwrap_or(LanguageId::DEFAULT))
    }

    pub fn translations(&self) -> &'static Translations {
        self.language().translations
    }

    /// Stages a pick inside the language modal without persisting it.
    pub fn set_tentative(&mut self, id: LanguageId) {
        self.tentative = Some(id);
    }

    /// Reverts the staged pick to the confirmed selection.
    pub fn cancel(&mut self) {
        self.tentative = self.selected;
    }

    /// Confirms the staged pick and persists it. No-op when nothing is staged.
    pub fn confirm(&mut self) -> io::Result<()> {
        let Some(id) = self.tentative else {
            return Ok(());
        };
        self.selected = Some(id);
        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let state = PersistedSelection {
            language: id.as_str().to_string(),
        };
        let json = serde_json::to_string_pretty(&state).map_err(io::Error::other)?;
        fs::write(&self.state_path, json)?;
        info!("Persisted language selection: {id}");
        Ok(())
    }

    /// Advances the intro-screen language rotation and returns the language
    /// now on display. Wraps around the catalog.
    pub fn cycle_language(&mut self) -> &'static Language {
        let all = Language::all();
        self.cycle_index = (self.cycle_index + 1) % all.len();
        &all[self.cycle_index]
    }
}

fn read_selection(path: &Path) -> Option<LanguageId> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Could not read language state at {}: {e}", path.display());
            return None;
        }
    };
    let state: PersistedSelection = match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(e) => {
            warn!("Ignoring malformed language state: {e}");
            return None;
        }
    };
    match state.language.parse::<LanguageId>() {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Ignoring persisted language: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_starts_unconfirmed_with_default_language() {
        let dir = tempfile::tempdir().unwrap();
        let store = LanguageStore::load(dir.path());
        assert!(!store.is_confirmed());
        assert_eq!(store.selected(), None);
        assert_eq!(store.language().id, LanguageId::En);
    }

    #[test]
    fn test_confirm_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = LanguageStore::load(dir.path());
        store.set_tentative(LanguageId::Hi);
        store.confirm().unwrap();
        assert!(store.is_confirmed());

        let reloaded = LanguageStore::load(dir.path());
        assert_eq!(reloaded.selected(), Some(LanguageId::Hi));
        assert_eq!(reloaded.translations().build.step1, "बुनियादी जानकारी");
    }

    #[test]
    fn test_cancel_reverts_tentative_pick() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LanguageStore::load(dir.path());
        store.set_tentative(LanguageId::Od);
        store.cancel();
        store.confirm().unwrap();
        assert_eq!(
            store.selected(),
            None,
            "cancel must drop the staged pick for an unconfirmed user"
        );
    }

    #[test]
    fn test_malformed_state_file_degrades_to_unselected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STATE_FILE), "not json").unwrap();
        let store = LanguageStore::load(dir.path());
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_unknown_persisted_id_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STATE_FILE), r#"{"language":"fr"}"#).unwrap();
        let store = LanguageStore::load(dir.path());
        assert_eq!(store.selected(), None);
        assert_eq!(store.language().id, LanguageId::En);
    }

    #[test]
    fn test_cycle_wraps_around_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LanguageStore::load(dir.path());
        assert_eq!(store.cycle_language().id, LanguageId::Hi);
        assert_eq!(store.cycle_language().id, LanguageId::Od);
        assert_eq!(store.cycle_language().id, LanguageId::En, "wraps to start");
    }
}
