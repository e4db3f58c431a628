use std::path::PathBuf;

use crate::core::{ReportOutcome, ScanResult};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Replay(ReplaySummary),
    Report(ReportOutcome),
    Clear(ClearSummary),
    Init(InitSummary),
}

/// One scanned HTML file.
#[derive(Debug)]
pub struct PageScan {
    /// Path relative to the project root, used as the destination id.
    pub destination: String,
    pub defects: ScanResult,
}

#[derive(Debug)]
pub struct ScanSummary {
    pub pages: Vec<PageScan>,
    /// Set when the results were also written to the store.
    pub stored_in: Option<PathBuf>,
}

impl ScanSummary {
    pub fn defect_count(&self) -> usize {
        self.pages.iter().map(|p| p.defects.len()).sum()
    }

    pub fn pages_with_defects(&self) -> usize {
        self.pages.iter().filter(|p| !p.defects.is_empty()).count()
    }
}

#[derive(Debug)]
pub struct TestOutcome {
    pub label: String,
    /// Destinations scanned by the tracker during this test, with defect counts.
    pub scanned: Vec<(String, usize)>,
    /// Message of the step that failed the test.
    pub failure: Option<String>,
}

#[derive(Debug)]
pub struct ReplaySummary {
    pub tests: Vec<TestOutcome>,
    pub store_path: PathBuf,
}

impl ReplaySummary {
    pub fn failed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.failure.is_some()).count()
    }
}

#[derive(Debug)]
pub struct ClearSummary {
    pub store_path: PathBuf,
    /// Number of records removed, `None` when the store could not be read.
    pub removed: Option<usize>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, the command reported failures and should exit with 1.
    pub failed: bool,
}
