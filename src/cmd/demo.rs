//! Interactive walkthrough of every configured section.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use formgate::section::Verdict;

pub fn cmd_demo(config_path: Option<&Path>) -> Result<()> {
    let mut controller = super::load_controller(config_path)?;

    let ids: Vec<String> = controller
        .sections()
        .iter()
        .map(|section| section.id().to_string())
        .collect();

    for id in &ids {
        let section = controller
            .section_mut(id)
            .with_context(|| format!("No section with id '{}'", id))?;

        println!("\n{}", format!("Section {}", id).bold());

        // Index 0 is the "no selection" option.
        let mut options = vec!["(none)".to_string()];
        options.extend(section.config().catalog.titles().map(str::to_string));

        let picked = dialoguer::Select::new()
            .with_prompt(format!("Choose a {}", section.config().selection_noun))
            .items(&options)
            .default(0)
            .interact()?;
        if picked == 0 {
            section.clear_selection();
        } else {
            section.select(&options[picked])?;
        }

        let note: String = dialoguer::Input::new()
            .with_prompt("Note")
            .allow_empty(true)
            .interact_text()?;
        section.set_note(note);

        let acknowledged = dialoguer::Confirm::new()
            .with_prompt("Check the box?")
            .default(false)
            .interact()?;
        section.set_acknowledged(acknowledged);

        let verdict = controller.validate(id)?.clone();
        match &verdict {
            Verdict::Valid => println!("{} Section {} is valid", "✓".green(), id),
            Verdict::Invalid { .. } => {
                println!("{} {}", "✗".red(), verdict.message().unwrap_or_default());
            }
            Verdict::Unevaluated => {}
        }
    }

    println!("\n{}", "Current values".bold());
    for section in controller.sections() {
        let fields = section.fields();
        println!(
            "  {}: checked={} selected={} note=\"{}\"",
            section.id(),
            fields.acknowledged(),
            fields
                .selection()
                .map(|item| item.title.as_str())
                .unwrap_or("none"),
            fields.note()
        );
    }

    Ok(())
}
