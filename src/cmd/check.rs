//! One-shot validation of a single section from CLI flags.

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use std::path::Path;

use formgate::section::Verdict;

pub fn cmd_check(
    section_id: &str,
    choose: Option<&str>,
    note: &str,
    ack: bool,
    config_path: Option<&Path>,
    json_output: bool,
) -> Result<()> {
    let mut controller = super::load_controller(config_path)?;

    let section = controller
        .section_mut(section_id)
        .with_context(|| format!("No section with id '{}'", section_id))?;

    if let Some(title) = choose {
        section.select(title)?;
    }
    section.set_note(note);
    section.set_acknowledged(ack);

    let verdict = controller.validate(section_id)?.clone();

    if json_output {
        let payload = match &verdict {
            Verdict::Valid => json!({
                "section": section_id,
                "verdict": "valid",
            }),
            Verdict::Invalid { problems } => json!({
                "section": section_id,
                "verdict": "invalid",
                "problems": problems,
                "message": verdict.message(),
            }),
            Verdict::Unevaluated => json!({
                "section": section_id,
                "verdict": "unevaluated",
            }),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        match &verdict {
            Verdict::Valid => println!("{} Section {} is valid", "✓".green(), section_id),
            Verdict::Invalid { problems } => {
                for problem in problems {
                    println!("{} {}", "✗".red(), problem);
                }
            }
            Verdict::Unevaluated => {}
        }
    }

    if verdict.is_invalid() {
        std::process::exit(1);
    }

    Ok(())
}
