//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan source comments for TODO/BUG/FIXME markers
//! - `init`: Initialize a `.todoxrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Keyword to report (overrides config file)
    /// Can be specified multiple times: -k TODO -k HACK
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Validate marker lines against the configured format rules
    #[arg(long)]
    pub format: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report TODO/BUG/FIXME comments in JS/TS sources
    Check(CheckCommand),
    /// Initialize a new .todoxrc.json configuration file
    Init,
}
