//! Report formatting and printing utilities.
//!
//! Prints command results to stdout in cargo style. Kept apart from the core
//! so the detection engine can be used as a library without terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    ClearSummary, CommandResult, CommandSummary, InitSummary, PageScan, ReplaySummary,
    ScanSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{
    Defect, DefectKind, ReportOutcome, RunReport,
    report::{render_defects, render_summary},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, writer),
        CommandSummary::Replay(summary) => print_replay(summary, writer),
        CommandSummary::Report(outcome) => print_report(outcome, writer),
        CommandSummary::Clear(summary) => print_clear(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_scan<W: Write>(summary: &ScanSummary, writer: &mut W) {
    for page in &summary.pages {
        for defect in &page.defects {
            print_defect(page, defect, writer);
        }
    }

    let total = summary.defect_count();
    if total > 0 {
        let _ = writeln!(
            writer,
            "{} {} untranslated placeholder(s) in {} of {} page(s)",
            FAILURE_MARK.red(),
            total,
            summary.pages_with_defects(),
            summary.pages.len()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} page(s) - no untranslated placeholders found",
                summary.pages.len()
            )
            .green()
        );
    }

    if let Some(path) = &summary.stored_in {
        let _ = writeln!(
            writer,
            "{} results to {}",
            "Recorded".green().bold(),
            path.display()
        );
    }
}

fn print_defect<W: Write>(page: &PageScan, defect: &Defect, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "error".bold().red(),
        defect.value,
        defect.label().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), page.destination);
    let _ = writeln!(
        writer,
        "   {} {} <{}> at {}",
        "=".blue(),
        "note:".bold(),
        defect.element_tag,
        defect.location_path
    );
    if defect.kind == DefectKind::Attribute
        && let Some(name) = &defect.attribute_name
    {
        let _ = writeln!(
            writer,
            "   {} {} mark the element with data-translation-ignore if `{}` is intentional",
            "=".blue(),
            "hint:".bold().cyan(),
            name
        );
    }
    let _ = writeln!(writer);
}

fn print_replay<W: Write>(summary: &ReplaySummary, writer: &mut W) {
    for test in &summary.tests {
        let scanned = if test.scanned.is_empty() {
            "no new destinations".to_string()
        } else {
            let list = test
                .scanned
                .iter()
                .map(|(destination, _)| destination.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("scanned {}", list)
        };

        match &test.failure {
            None => {
                let _ = writeln!(
                    writer,
                    "{} {} {}",
                    SUCCESS_MARK.green(),
                    test.label,
                    format!("({})", scanned).dimmed()
                );
            }
            Some(failure) => {
                let _ = writeln!(
                    writer,
                    "{} {} {}",
                    FAILURE_MARK.red(),
                    test.label.bold(),
                    format!("({})", scanned).dimmed()
                );
                let _ = writeln!(writer, "    {}", failure.red());
            }
        }
    }

    let failed = summary.failed_count();
    let total = summary.tests.len();
    let _ = writeln!(
        writer,
        "\nRan {} test(s): {} passed, {} failed",
        total,
        total - failed,
        failed
    );
    let _ = writeln!(
        writer,
        "Results recorded in {} (run `report` to validate)",
        summary.store_path.display()
    );
}

fn print_report<W: Write>(outcome: &ReportOutcome, writer: &mut W) {
    match outcome {
        ReportOutcome::Skipped { note } => {
            let _ = writeln!(writer, "{} {}", "note:".bold().cyan(), note);
        }
        ReportOutcome::Completed(report) => print_run_report(report, writer),
    }
}

fn print_run_report<W: Write>(report: &RunReport, writer: &mut W) {
    let _ = writeln!(writer, "{}\n", render_summary(&report.summary));

    let width = report
        .verdicts
        .iter()
        .map(|v| UnicodeWidthStr::width(v.destination_id.as_str()))
        .max()
        .unwrap_or(0);

    for verdict in &report.verdicts {
        let padding = width - UnicodeWidthStr::width(verdict.destination_id.as_str());
        if verdict.passed() {
            let _ = writeln!(
                writer,
                "{} {}{:padding$}  {}",
                SUCCESS_MARK.green(),
                verdict.destination_id,
                "",
                format!("(from \"{}\")", verdict.origin_test_label).dimmed(),
                padding = padding
            );
        } else {
            let _ = writeln!(
                writer,
                "{} {}{:padding$}  {}",
                FAILURE_MARK.red(),
                verdict.destination_id.bold(),
                "",
                format!("(from \"{}\")", verdict.origin_test_label).dimmed(),
                padding = padding
            );
            let _ = writeln!(writer, "{}", render_defects(&verdict.defects));
        }
    }

    let failed = report.failures().count();
    let total = report.verdicts.len();
    if failed > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} of {} destination(s) failed translation validation",
            FAILURE_MARK.red(),
            failed,
            total
        );
    } else {
        let _ = writeln!(
            writer,
            "\n{} {}",
            SUCCESS_MARK.green(),
            format!("All {} destination(s) passed translation validation", total).green()
        );
    }
}

fn print_clear<W: Write>(summary: &ClearSummary, writer: &mut W) {
    match summary.removed {
        Some(removed) => {
            let _ = writeln!(
                writer,
                "{} Cleared {} result(s) from {}",
                SUCCESS_MARK.green(),
                removed,
                summary.store_path.display()
            );
        }
        None => {
            let _ = writeln!(
                writer,
                "{} Cleared unreadable result store {}",
                SUCCESS_MARK.green(),
                summary.store_path.display()
            );
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} Created {}",
            SUCCESS_MARK.green(),
            CONFIG_FILE_NAME
        );
    }
}
