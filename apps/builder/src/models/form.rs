//! The canonical resume record filled in by the multi-step wizard.
//!
//! Every field defaults to empty. Downstream code treats an empty string and
//! an absent field identically, so partial JSON (e.g. a saved draft with only
//! the first step filled) deserializes cleanly via `#[serde(default)]`.

use serde::{Deserialize, Serialize};

/// User-entered resume data. Flat record with one nested list.
///
/// `skills` never contains two equal strings (post-trim), enforced at
/// insertion time by [`FormData::add_skill`], never at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub job_type: String,
    /// Years of experience as entered. Parsed leniently by the composer;
    /// non-numeric content is not an error.
    pub experience: String,
    pub employer: String,
    /// Insertion order is preserved for display.
    pub skills: Vec<String>,
    pub education_level: String,
    pub summary: String,
}

impl FormData {
    /// Adds a skill, trimming surrounding whitespace first.
    ///
    /// Empty input and duplicates (exact match post-trim) are rejected.
    /// Returns whether the skill was actually added.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Removes a skill by exact match. Returns whether anything was removed.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        self.skills.len() != before
    }
}
