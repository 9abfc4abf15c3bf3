//! CLI commands for cinder

use clap::Subcommand;
use color_eyre::eyre::Result;

pub mod check;
pub mod generate;
pub mod list;

/// All available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Generate typed modules from forge build artifacts
    Generate(generate::GenerateCommand),

    /// Validate configured artifacts without writing anything
    Check(check::CheckCommand),

    /// List configured artifacts with bytecode and ABI details
    List(list::ListCommand),
}

impl Command {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Command::Generate(cmd) => cmd.run(),
            Command::Check(cmd) => cmd.run(),
            Command::List(cmd) => cmd.run(),
        }
    }
}
