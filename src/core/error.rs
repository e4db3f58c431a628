use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid exclude selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Raised only by a manual check with `fail_on_error` set.
    /// Carries the count alone; the detail goes to the log.
    #[error("Found {count} untranslated placeholder(s)")]
    DefectsFound { count: usize },

    #[error("failed to access result store {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("result store {path} is corrupt")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
