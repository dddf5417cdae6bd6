//! # Formgate - Two-Section Form Validation
//!
//! Formgate is the validation core behind a two-section data-entry form.
//! Each section collects a selection from a fixed catalog, a free-text note,
//! and a boolean acknowledgment, and produces a tri-state verdict on demand.
//!
//! ## Overview
//!
//! Sections are fully independent: each owns its catalog, its wording, its
//! field state, and its verdict. Validation is an explicit action - field
//! edits never change the verdict, and the verdict stays put until the next
//! validate or reset.
//!
//! ## Modules
//!
//! - [`catalog`] - Selectable options and catalog lookup
//! - [`config`] - Per-section configuration and YAML form definitions
//! - [`section`] - Field state, verdicts, and the section lifecycle
//! - [`validate`] - The pure rule engine producing ordered problem lists
//! - [`controller`] - Routes validate/reset actions to sections by id
//!
//! ## Example
//!
//! ```
//! use formgate::catalog::{Catalog, CatalogItem};
//! use formgate::config::{NoteWording, SectionConfig};
//! use formgate::controller::SectionController;
//! use formgate::section::Section;
//!
//! let catalog = Catalog::new(vec![CatalogItem {
//!     title: "The Godfather".to_string(),
//!     year: 1972,
//! }])
//! .unwrap();
//! let config = SectionConfig::new(catalog, "film", NoteWording::Text);
//! let mut controller = SectionController::new(vec![Section::new("s1", config)]);
//!
//! // Nothing filled in yet, so validation reports every problem at once.
//! let verdict = controller.validate("s1").unwrap();
//! assert_eq!(
//!     verdict.message().unwrap(),
//!     "Please choose a film. Text field is required. You must check the box"
//! );
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod section;
pub mod validate;
