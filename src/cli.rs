//! CLI argument definitions for formgate.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formgate")]
#[command(version)]
#[command(about = "Two-section form validation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one section from command-line field values
    Check {
        /// Section id to validate
        #[arg(long, default_value = "s1")]
        section: String,
        /// Catalog title to select; omitted means no selection
        #[arg(long, value_name = "TITLE")]
        choose: Option<String>,
        /// Free-text note
        #[arg(long, default_value = "")]
        note: String,
        /// Tick the acknowledgment box
        #[arg(long)]
        ack: bool,
        /// Form definition file (YAML); built-in demo form when omitted
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk through every section interactively
    Demo {
        /// Form definition file (YAML); built-in demo form when omitted
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
