//! Pure validation of section fields.
//!
//! [`evaluate`] inspects a field snapshot and returns the problems it finds,
//! in a fixed order. It has no side effects and never fails; an empty result
//! means the section is valid.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::SectionConfig;
use crate::section::SectionFields;

/// Separator joining problems into a single display string.
pub const PROBLEM_SEPARATOR: &str = ". ";

/// Characters the note may contain: ASCII letters, digits, and whitespace.
const ALLOWED_NOTE_PATTERN: &str = r"^[A-Za-z0-9\s]+$";

pub const INVALID_CHARACTERS_PROBLEM: &str =
    "Text contains invalid characters (only letters, numbers and spaces allowed)";
pub const CHECKBOX_PROBLEM: &str = "You must check the box";

fn allowed_note_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ALLOWED_NOTE_PATTERN).expect("allowed-note pattern is valid"))
}

/// Evaluate one section's fields against its rules.
///
/// Problems come back in fixed order: missing selection, empty note,
/// disallowed note characters, unticked box. Each rule is checked
/// independently, so several problems can co-occur.
pub fn evaluate(fields: &SectionFields, config: &SectionConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if fields.selection().is_none() {
        problems.push(format!("Please choose a {}", config.selection_noun));
    }

    if fields.note().trim().is_empty() {
        problems.push(config.note_wording.required_message().to_string());
    }

    // The character rule sees the raw, untrimmed note. Empty notes are
    // excluded here; whitespace-only notes pass because whitespace is in
    // the allowed set.
    if !fields.note().is_empty() && !allowed_note_regex().is_match(fields.note()) {
        problems.push(INVALID_CHARACTERS_PROBLEM.to_string());
    }

    if !fields.acknowledged() {
        problems.push(CHECKBOX_PROBLEM.to_string());
    }

    problems
}
