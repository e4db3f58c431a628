//! End-of-run validation over every stored destination record.
//!
//! The report is its own pass, separate from the functional tests that wrote
//! the records. It produces two checks: a summary of clean versus
//! defect-bearing destinations, and a validation check holding one verdict per
//! destination. Every failing destination is reported, not just the first.

use std::fmt::Write;

use super::error::Result;
use super::store::{DestinationRecord, ResultStore};
use crate::issues::{Defect, DefectKind};

pub const SKIPPED_NOTE: &str =
    "No translation scan results were recorded, skipping translation validation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub clean: usize,
    /// Destinations with defects: (destination, origin test label, defect count).
    pub with_defects: Vec<(String, String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationVerdict {
    pub destination_id: String,
    pub origin_test_label: String,
    /// Empty when the destination passed.
    pub defects: Vec<Defect>,
}

impl DestinationVerdict {
    pub fn passed(&self) -> bool {
        self.defects.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub summary: Summary,
    pub verdicts: Vec<DestinationVerdict>,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(DestinationVerdict::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &DestinationVerdict> {
        self.verdicts.iter().filter(|v| !v.passed())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Nothing was recorded, so there is nothing to validate.
    Skipped { note: String },
    Completed(RunReport),
}

impl ReportOutcome {
    pub fn passed(&self) -> bool {
        match self {
            ReportOutcome::Skipped { .. } => true,
            ReportOutcome::Completed(report) => report.passed(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

/// A named check as the host test runner would register it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    pub title: String,
    pub status: CheckStatus,
    pub output: String,
}

/// Build the report from records. Records are ordered by destination so the
/// output is stable regardless of store order.
pub fn build(mut records: Vec<DestinationRecord>) -> ReportOutcome {
    if records.is_empty() {
        return ReportOutcome::Skipped {
            note: SKIPPED_NOTE.to_string(),
        };
    }

    records.sort_by(|a, b| a.destination_id.cmp(&b.destination_id));

    let with_defects: Vec<(String, String, usize)> = records
        .iter()
        .filter(|r| r.has_defects())
        .map(|r| {
            (
                r.destination_id.clone(),
                r.origin_test_label.clone(),
                r.defects.len(),
            )
        })
        .collect();

    let summary = Summary {
        total: records.len(),
        clean: records.len() - with_defects.len(),
        with_defects,
    };

    let verdicts = records
        .into_iter()
        .map(|r| DestinationVerdict {
            destination_id: r.destination_id,
            origin_test_label: r.origin_test_label,
            defects: r.defects,
        })
        .collect();

    ReportOutcome::Completed(RunReport { summary, verdicts })
}

/// Read every record from the store and build the report.
pub fn generate(store: &dyn ResultStore) -> Result<ReportOutcome> {
    Ok(build(store.get_all()?))
}

/// The summary check and the per-destination validation check.
pub fn register_checks(store: &dyn ResultStore) -> Result<Vec<ValidationCheck>> {
    let outcome = generate(store)?;

    let checks = match outcome {
        ReportOutcome::Skipped { note } => vec![
            ValidationCheck {
                title: "translation summary".to_string(),
                status: CheckStatus::Skipped,
                output: note.clone(),
            },
            ValidationCheck {
                title: "translation validation".to_string(),
                status: CheckStatus::Skipped,
                output: note,
            },
        ],
        ReportOutcome::Completed(report) => {
            let failures: Vec<String> = report.failures().map(render_failure).collect();
            vec![
                ValidationCheck {
                    title: "translation summary".to_string(),
                    status: CheckStatus::Passed,
                    output: render_summary(&report.summary),
                },
                ValidationCheck {
                    title: "translation validation".to_string(),
                    status: if failures.is_empty() {
                        CheckStatus::Passed
                    } else {
                        CheckStatus::Failed
                    },
                    output: failures.join("\n\n"),
                },
            ]
        }
    };

    Ok(checks)
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = format!(
        "Translation summary: {} destination(s) scanned, {} clean, {} with defects",
        summary.total,
        summary.clean,
        summary.with_defects.len()
    );

    for (destination, label, count) in &summary.with_defects {
        let _ = write!(
            out,
            "\n  {} (from \"{}\"): {} defect(s)",
            destination, label, count
        );
    }

    out
}

/// Failure text for one destination, listing every defect.
pub fn render_failure(verdict: &DestinationVerdict) -> String {
    format!(
        "Untranslated placeholders on {} (from \"{}\"):\n{}",
        verdict.destination_id,
        verdict.origin_test_label,
        render_defects(&verdict.defects)
    )
}

/// Numbered, one-line-per-defect dump.
pub fn render_defects(defects: &[Defect]) -> String {
    defects
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let kind = match (&d.kind, &d.attribute_name) {
                (DefectKind::Attribute, Some(name)) => format!("attribute {}", name),
                (kind, _) => kind.to_string(),
            };
            format!(
                "  {}. [{}] <{}> \"{}\" at {}",
                i + 1,
                kind,
                d.element_tag,
                d.value,
                d.location_path
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
