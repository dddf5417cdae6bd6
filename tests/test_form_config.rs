//! Loading form definitions from YAML files.

use std::fs;
use std::path::PathBuf;

use formgate::config::FormConfig;
use formgate::controller::SectionController;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("form.yml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn test_load_builds_a_working_controller() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
sections:
  - id: books
    selection_noun: book
    note_wording: review
    catalog:
      - { title: "Dune", year: 1965 }
      - { title: "Neuromancer", year: 1984 }
"#,
    );

    let config = FormConfig::load(&path).unwrap();
    let mut controller = SectionController::from_config(&config).unwrap();

    let verdict = controller.validate("books").unwrap();
    assert_eq!(
        verdict.message().unwrap(),
        "Please choose a book. Review field is required. You must check the box"
    );

    let section = controller.section_mut("books").unwrap();
    section.select("Neuromancer").unwrap();
    section.set_note("console cowboys");
    section.set_acknowledged(true);
    assert!(controller.validate("books").unwrap().is_valid());
}

#[test]
fn test_load_rejects_duplicate_section_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
sections:
  - id: s1
    selection_noun: film
    catalog:
      - { title: "The Godfather", year: 1972 }
  - id: s1
    selection_noun: film
    catalog:
      - { title: "The Godfather", year: 1972 }
"#,
    );

    let err = FormConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("duplicate section id 's1'"));
}

#[test]
fn test_load_rejects_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
sections:
  - id: s1
    selection_noun: film
    catalog: []
"#,
    );

    let err = FormConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("empty catalog"));
}

#[test]
fn test_load_reports_malformed_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "sections: [not a section]");

    assert!(FormConfig::load(&path).is_err());
}

#[test]
fn test_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yml");

    let err = FormConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read form config"));
}
