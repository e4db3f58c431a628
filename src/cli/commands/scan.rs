use std::fs;

use anyhow::{Context, Result};
use rayon::prelude::*;
use scraper::Html;

use super::super::args::ScanCommand;
use super::super::file_scanner::{relative_path, scan_files};
use super::{CommandResult, CommandSummary, PageScan, ScanSummary, context::CommandContext};
use crate::core::{ResultStore, Scanner};

/// Scan HTML files on disk, each file standing in for one destination.
pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let config = ctx.config.matching.compile()?;

    let file_scan = scan_files(
        &ctx.root_dir,
        &cmd.paths,
        &ctx.config.includes,
        &ctx.config.ignores,
    );
    if file_scan.skipped_count > 0 {
        tracing::warn!(
            "{} path(s) skipped due to access errors",
            file_scan.skipped_count
        );
    }

    let pages = file_scan
        .files
        .par_iter()
        .map(|file| -> Result<PageScan> {
            let markup = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let html = Html::parse_document(&markup);
            let defects = Scanner::new(&config).scan_document(&html);
            Ok(PageScan {
                destination: relative_path(&ctx.root_dir, file),
                defects,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let stored_in = if cmd.store {
        let mut store = ctx.store();
        for page in &pages {
            store.put(&page.destination, page.defects.clone(), &cmd.label)?;
        }
        Some(ctx.store_path.clone())
    } else {
        None
    };

    let summary = ScanSummary { pages, stored_in };
    let failed = summary.defect_count() > 0;

    Ok(CommandResult {
        summary: CommandSummary::Scan(summary),
        failed,
    })
}
