use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{clear::clear, init::init, replay::replay, report::report, scan::scan},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and whether it failed
/// - `Err` if the command could not run (config, I/O, malformed journey)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Replay(cmd)) => replay(cmd),
        Some(Command::Report(cmd)) => report(cmd),
        Some(Command::Clear(cmd)) => clear(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
