//! Detection and aggregation engine.
//!
//! ## Module Structure
//!
//! - `matcher`: Placeholder patterns and the `is_defect` policy
//! - `locator`: Structural element paths for reporting
//! - `scanner`: Document traversal producing defects
//! - `tracker`: Per-test navigation deduplication state machine
//! - `store`: Run-wide destination records (memory and file backed)
//! - `report`: End-of-run summary and per-destination verdicts
//! - `session`: Host-facing setup, hooks and manual checks

pub mod error;
pub mod locator;
pub mod matcher;
pub mod report;
pub mod scanner;
pub mod session;
pub mod store;
pub mod tracker;

pub use error::{Error, Result};
pub use locator::locate;
pub use matcher::{LiteralPattern, MatchConfig, Matches, Pattern, RegexPattern, is_defect};
pub use report::{
    CheckStatus, DestinationVerdict, ReportOutcome, RunReport, Summary, ValidationCheck,
    generate, register_checks,
};
pub use scanner::{ScanResult, Scanner};
pub use session::{Browser, CheckOptions, Session};
pub use store::{DestinationRecord, FileStore, MemoryStore, ResultStore};
pub use tracker::{NavigationObserver, NavigationTracker, TrackerState};

pub use crate::issues::{Defect, DefectKind};
