//! Routes validate and reset actions to sections by id.

use anyhow::{Context, Result};
use std::fmt;

use crate::catalog::Catalog;
use crate::config::{FormConfig, SectionConfig};
use crate::section::{Section, Verdict};
use crate::validate;

#[derive(Debug)]
pub enum ControlError {
    UnknownSection(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::UnknownSection(id) => write!(f, "No section with id '{}'", id),
        }
    }
}

impl std::error::Error for ControlError {}

/// Owns the live sections and bridges user actions to the validator.
///
/// Sections stay in construction order. Each action targets exactly one
/// section; the others are never touched.
pub struct SectionController {
    sections: Vec<Section>,
}

impl SectionController {
    /// Build a controller over an ordered set of sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Build sections from a validated form definition.
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        config.validate()?;

        let mut sections = Vec::with_capacity(config.sections.len());
        for def in &config.sections {
            let catalog = Catalog::new(def.catalog.clone())
                .with_context(|| format!("section '{}'", def.id))?;
            let section_config =
                SectionConfig::new(catalog, def.selection_noun.clone(), def.note_wording);
            sections.push(Section::new(def.id.clone(), section_config));
        }

        Ok(Self::new(sections))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id() == id)
    }

    /// Mutable access for the caller that edits fields between validations.
    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.id() == id)
    }

    fn require_mut(&mut self, id: &str) -> Result<&mut Section, ControlError> {
        self.section_mut(id)
            .ok_or_else(|| ControlError::UnknownSection(id.to_string()))
    }

    /// Validate the identified section and store the verdict on it.
    ///
    /// An empty problem list becomes [`Verdict::Valid`], anything else
    /// [`Verdict::Invalid`]. Re-running with unchanged fields produces the
    /// same verdict again; nothing accumulates across calls.
    pub fn validate(&mut self, id: &str) -> Result<&Verdict, ControlError> {
        let section = self.require_mut(id)?;
        let problems = validate::evaluate(section.fields(), section.config());
        section.record_verdict(problems);
        Ok(section.verdict())
    }

    /// Reset the identified section to default fields and an unevaluated
    /// verdict. Available from any state; other sections are unaffected.
    pub fn reset(&mut self, id: &str) -> Result<(), ControlError> {
        self.require_mut(id)?.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use crate::config::NoteWording;
    use crate::section::SectionFields;

    fn demo_controller() -> SectionController {
        SectionController::from_config(&FormConfig::default_demo()).unwrap()
    }

    fn fill_valid(controller: &mut SectionController, id: &str, title: &str) {
        let section = controller.section_mut(id).unwrap();
        section.select(title).unwrap();
        section.set_note("Valid text 123");
        section.set_acknowledged(true);
    }

    #[test]
    fn test_validate_unknown_section_errors() {
        let mut controller = demo_controller();

        let err = controller.validate("s9").unwrap_err();
        assert!(matches!(err, ControlError::UnknownSection(_)));
        assert_eq!(err.to_string(), "No section with id 's9'");
        assert!(controller.reset("s9").is_err());
    }

    #[test]
    fn test_fresh_section_validates_invalid() {
        let mut controller = demo_controller();

        let verdict = controller.validate("s1").unwrap();
        assert_eq!(
            verdict.message().unwrap(),
            "Please choose a film. Text field is required. You must check the box"
        );
    }

    #[test]
    fn test_verdict_transitions_invalid_then_valid_then_invalid() {
        let mut controller = demo_controller();

        assert!(controller.validate("s1").unwrap().is_invalid());

        fill_valid(&mut controller, "s1", "The Godfather");
        assert!(controller.validate("s1").unwrap().is_valid());

        controller.section_mut("s1").unwrap().set_acknowledged(false);
        assert!(controller.validate("s1").unwrap().is_invalid());
    }

    #[test]
    fn test_repeated_validate_does_not_drift() {
        let mut controller = demo_controller();

        let first = controller.validate("s1").unwrap().clone();
        for _ in 0..5 {
            let again = controller.validate("s1").unwrap();
            assert_eq!(*again, first);
        }
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut controller = demo_controller();
        fill_valid(&mut controller, "s1", "The Godfather");
        assert!(controller.validate("s1").unwrap().is_valid());

        controller.reset("s1").unwrap();

        let section = controller.section("s1").unwrap();
        assert_eq!(*section.fields(), SectionFields::default());
        assert_eq!(*section.verdict(), Verdict::Unevaluated);
    }

    #[test]
    fn test_reset_then_validate_matches_fresh_section() {
        let mut controller = demo_controller();
        fill_valid(&mut controller, "s1", "The Godfather");
        controller.validate("s1").unwrap();
        controller.reset("s1").unwrap();

        let after_reset = controller.validate("s1").unwrap().clone();
        let fresh = demo_controller().validate("s1").unwrap().clone();
        assert_eq!(after_reset, fresh);
    }

    #[test]
    fn test_sections_are_independent() {
        let mut controller = demo_controller();

        fill_valid(&mut controller, "s2", "Summer");
        assert!(controller.validate("s2").unwrap().is_valid());

        // Validating and resetting s1 leaves s2's verdict and fields alone.
        assert!(controller.validate("s1").unwrap().is_invalid());
        controller.reset("s1").unwrap();

        let s2 = controller.section("s2").unwrap();
        assert!(s2.verdict().is_valid());
        assert_eq!(s2.fields().selection().unwrap().title, "Summer");
    }

    #[test]
    fn test_from_config_rejects_invalid_definitions() {
        let config = FormConfig { sections: vec![] };
        assert!(SectionController::from_config(&config).is_err());
    }

    #[test]
    fn test_manual_construction_mirrors_config() {
        let catalog = Catalog::new(vec![CatalogItem {
            title: "The Godfather".to_string(),
            year: 1972,
        }])
        .unwrap();
        let config = SectionConfig::new(catalog, "film", NoteWording::Text);
        let mut controller = SectionController::new(vec![Section::new("only", config)]);

        assert!(controller.validate("only").unwrap().is_invalid());
    }
}
