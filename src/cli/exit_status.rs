use std::process::ExitCode;

/// Process exit status of `i18n-sweep`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No untranslated placeholders, every destination passed, or the
    /// report was skipped because nothing was recorded.
    Success,
    /// Placeholders found by `scan`, a destination failed `report`, or a
    /// manual check failed a `replay` test.
    Failure,
    /// The command could not run: bad config, unreadable journey or store.
    Error,
}

impl ExitStatus {
    /// Status of a command that ran to completion.
    pub fn from_failed(failed: bool) -> Self {
        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
