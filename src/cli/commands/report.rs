use anyhow::Result;

use super::super::args::ReportCommand;
use super::{CommandResult, CommandSummary, context::CommandContext};
use crate::core::generate;

/// Validate every destination recorded in the store.
///
/// An empty store is a skip, not a failure.
pub fn report(cmd: ReportCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let outcome = generate(&ctx.store())?;
    let failed = !outcome.passed();

    Ok(CommandResult {
        summary: CommandSummary::Report(outcome),
        failed,
    })
}
