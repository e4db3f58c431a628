use anyhow::Result;

use super::super::args::ClearCommand;
use super::{ClearSummary, CommandResult, CommandSummary, context::CommandContext};
use crate::core::ResultStore;

/// Explicit reset of the result store between runs.
///
/// An unreadable store is still removed; only the record count is lost.
pub fn clear(cmd: ClearCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut store = ctx.store();

    let removed = match store.get_all() {
        Ok(records) => Some(records.len()),
        Err(e) => {
            tracing::debug!("Clearing unreadable store: {:#}", anyhow::Error::from(e));
            None
        }
    };
    store.clear()?;

    Ok(CommandResult {
        summary: CommandSummary::Clear(ClearSummary {
            store_path: ctx.store_path.clone(),
            removed,
        }),
        failed: false,
    })
}
