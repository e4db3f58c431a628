//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Scan HTML files for unresolved translation placeholders
//! - `replay`: Run a journey file through the navigation tracker
//! - `report`: Validate every destination recorded in the result store
//! - `clear`: Reset the result store
//! - `init`: Create a default configuration file

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Replay(cmd)) => cmd.common.verbose,
            Some(Command::Report(cmd)) => cmd.common.verbose,
            Some(Command::Clear(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root; the config file is searched from here upwards
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Result store file (overrides config file)
    #[arg(long, env = "I18N_SWEEP_STORE")]
    pub store_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Files or directories to scan (default: the project root)
    pub paths: Vec<PathBuf>,

    /// Also write each page's result to the result store
    #[arg(long)]
    pub store: bool,

    /// Origin label recorded with stored results
    #[arg(long, default_value = "static scan")]
    pub label: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ReplayCommand {
    /// Journey file describing tests, steps and pages
    pub journey: PathBuf,

    /// Settle delay in milliseconds (overrides config file)
    #[arg(long)]
    pub settle_delay: Option<u64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ClearCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan HTML files for unresolved translation placeholders
    Scan(ScanCommand),
    /// Replay a journey file, scanning each distinct navigation once per test
    Replay(ReplayCommand),
    /// Validate all recorded destinations and fail if any has defects
    Report(ReportCommand),
    /// Remove all recorded results
    Clear(ClearCommand),
    /// Initialize a new .i18nsweeprc.json configuration file
    Init,
}
