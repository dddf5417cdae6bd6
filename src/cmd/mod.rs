//! Command handlers for the formgate CLI.

mod check;
mod demo;

pub use check::cmd_check;
pub use demo::cmd_demo;

use anyhow::Result;
use std::path::Path;

use formgate::config::FormConfig;
use formgate::controller::SectionController;

/// Build the controller from a config file, or the built-in demo form.
fn load_controller(config_path: Option<&Path>) -> Result<SectionController> {
    let config = match config_path {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default_demo(),
    };
    SectionController::from_config(&config)
}
