//! CLI entry point for formgate.

mod cli;
mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            section,
            choose,
            note,
            ack,
            config,
            json,
        } => cmd::cmd_check(&section, choose.as_deref(), &note, ack, config.as_deref(), json),
        Commands::Demo { config } => cmd::cmd_demo(config.as_deref()),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "formgate", &mut io::stdout());
            Ok(())
        }
    }
}
