//! Field state, verdicts, and the lifecycle of one data-entry section.

use std::fmt;

use crate::catalog::CatalogItem;
use crate::config::SectionConfig;
use crate::validate;

/// The three input fields of a section.
///
/// Defaults to no selection, an empty note, and an unticked box - the state
/// a freshly created or reset section starts from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionFields {
    pub(crate) selection: Option<CatalogItem>,
    pub(crate) note: String,
    pub(crate) acknowledged: bool,
}

impl SectionFields {
    pub fn selection(&self) -> Option<&CatalogItem> {
        self.selection.as_ref()
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }
}

/// Validation outcome of a section.
///
/// Derived state: only [`SectionController::validate`] produces `Valid` or
/// `Invalid`, and only reset returns it to `Unevaluated`. Field edits leave
/// the verdict untouched, so it always reflects the last validation run,
/// not the live fields.
///
/// [`SectionController::validate`]: crate::controller::SectionController::validate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Verdict {
    /// Never validated, or reset since the last validation.
    #[default]
    Unevaluated,
    /// At least one rule failed; problems are in fixed rule order.
    Invalid { problems: Vec<String> },
    /// Every rule passed.
    Valid,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Verdict::Invalid { .. })
    }

    /// The display string for an invalid verdict: problems joined with
    /// `". "`, no trailing period added.
    pub fn message(&self) -> Option<String> {
        match self {
            Verdict::Invalid { problems } => Some(problems.join(validate::PROBLEM_SEPARATOR)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SelectionError {
    /// The requested title is not in this section's catalog.
    UnknownTitle(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnknownTitle(title) => {
                write!(f, "'{}' is not in this section's catalog", title)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// One independent section: injected configuration plus fields and verdict.
///
/// Two sections live side by side in a form; they share validation code and
/// nothing else. Selection changes go through [`Section::select`] so a
/// present selection always equals an item from this section's catalog.
#[derive(Debug, Clone)]
pub struct Section {
    id: String,
    config: SectionConfig,
    fields: SectionFields,
    verdict: Verdict,
}

impl Section {
    /// Create a section with default fields and an unevaluated verdict.
    pub fn new(id: impl Into<String>, config: SectionConfig) -> Self {
        Self {
            id: id.into(),
            config,
            fields: SectionFields::default(),
            verdict: Verdict::Unevaluated,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn fields(&self) -> &SectionFields {
        &self.fields
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Select a catalog option by title.
    ///
    /// Fails on a title the catalog does not contain, leaving the current
    /// selection in place. Duplicate titles resolve to the first match.
    pub fn select(&mut self, title: &str) -> Result<(), SelectionError> {
        match self.config.catalog.find(title) {
            Some(item) => {
                self.fields.selection = Some(item.clone());
                Ok(())
            }
            None => Err(SelectionError::UnknownTitle(title.to_string())),
        }
    }

    pub fn clear_selection(&mut self) {
        self.fields.selection = None;
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.fields.note = note.into();
    }

    pub fn set_acknowledged(&mut self, acknowledged: bool) {
        self.fields.acknowledged = acknowledged;
    }

    /// Record the outcome of a validation run. Called by the controller;
    /// nothing else writes the verdict.
    pub(crate) fn record_verdict(&mut self, problems: Vec<String>) {
        self.verdict = if problems.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Invalid { problems }
        };
    }

    /// Restore default fields and clear the verdict in one step.
    pub(crate) fn reset(&mut self) {
        self.fields = SectionFields::default();
        self.verdict = Verdict::Unevaluated;
    }
}
