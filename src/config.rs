//! Per-section configuration and YAML form definitions.
//!
//! A section's catalog, selection noun, and empty-note wording are injected
//! at construction time rather than hardcoded per section, so both sections
//! run the exact same validation code.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, CatalogItem};

/// Which wording the empty-note problem uses. Configured per deployment,
/// never derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteWording {
    /// "Text field is required"
    #[default]
    Text,
    /// "Review field is required"
    Review,
}

impl NoteWording {
    pub fn required_message(self) -> &'static str {
        match self {
            NoteWording::Text => "Text field is required",
            NoteWording::Review => "Review field is required",
        }
    }
}

impl fmt::Display for NoteWording {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteWording::Text => write!(f, "text"),
            NoteWording::Review => write!(f, "review"),
        }
    }
}

/// Configuration injected into one section at construction time.
#[derive(Debug, Clone)]
pub struct SectionConfig {
    /// The options the section's selection may take.
    pub catalog: Catalog,
    /// Noun used in the missing-selection message, e.g. "film" or "Season".
    pub selection_noun: String,
    /// Wording of the empty-note message.
    pub note_wording: NoteWording,
}

impl SectionConfig {
    pub fn new(
        catalog: Catalog,
        selection_noun: impl Into<String>,
        note_wording: NoteWording,
    ) -> Self {
        Self {
            catalog,
            selection_noun: selection_noun.into(),
            note_wording,
        }
    }
}

/// One section entry in a form definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionDef {
    pub id: String,
    pub selection_noun: String,
    #[serde(default)]
    pub note_wording: NoteWording,
    pub catalog: Vec<CatalogItem>,
}

/// A whole form definition: the ordered list of sections.
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    pub sections: Vec<SectionDef>,
}

impl FormConfig {
    /// Load and validate a form definition from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form config {}", path.display()))?;
        let config: FormConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("Invalid form config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate a parsed form definition.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            anyhow::bail!("form config must define at least one section");
        }

        let mut seen: Vec<&str> = Vec::new();
        for def in &self.sections {
            if def.id.trim().is_empty() {
                anyhow::bail!("section id must not be empty");
            }
            if seen.contains(&def.id.as_str()) {
                anyhow::bail!("duplicate section id '{}'", def.id);
            }
            seen.push(def.id.as_str());

            if def.selection_noun.trim().is_empty() {
                anyhow::bail!("section '{}' has an empty selection_noun", def.id);
            }
            if def.catalog.is_empty() {
                anyhow::bail!("section '{}' has an empty catalog", def.id);
            }
        }

        Ok(())
    }

    /// The built-in two-section form: films for s1, seasons for s2.
    pub fn default_demo() -> Self {
        let films = vec![
            ("The Shawshank Redemption", 1994),
            ("The Godfather", 1972),
            ("The Dark Knight", 2008),
            ("12 Angry Men", 1957),
            ("Schindler's List", 1993),
        ];
        let seasons = vec![
            ("Winter", 2025),
            ("Spring", 2025),
            ("Summer", 2025),
            ("Autumn", 2025),
        ];

        let to_items = |entries: Vec<(&str, i32)>| {
            entries
                .into_iter()
                .map(|(title, year)| CatalogItem {
                    title: title.to_string(),
                    year,
                })
                .collect()
        };

        Self {
            sections: vec![
                SectionDef {
                    id: "s1".to_string(),
                    selection_noun: "film".to_string(),
                    note_wording: NoteWording::Text,
                    catalog: to_items(films),
                },
                SectionDef {
                    id: "s2".to_string(),
                    selection_noun: "Season".to_string(),
                    note_wording: NoteWording::Review,
                    catalog: to_items(seasons),
                },
            ],
        }
    }
}
