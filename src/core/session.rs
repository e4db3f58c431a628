//! Host-facing entry points.
//!
//! A [`Session`] is what the host test runner installs once per run: it owns
//! the compiled policy, the settle delay, the navigation tracker and the
//! result store. The host drives it through three hooks (test start,
//! navigation signal, end-of-step checkpoint) and may call
//! [`Session::check_translations`] directly from a test step.

use std::time::Duration;

use scraper::Html;
use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::matcher::MatchConfig;
use super::scanner::{ScanResult, Scanner};
use super::store::ResultStore;
use super::tracker::{NavigationObserver, NavigationTracker};
use crate::config::{MatchOverrides, MatchSettings, PatternSpec};

/// The page under test, as seen by the scanner.
pub trait Browser {
    /// Markup of the active document, or `None` when nothing is loaded.
    fn document(&self) -> Option<String>;

    /// Cooperative pause used for the settle delay.
    fn wait(&mut self, delay: Duration);
}

/// Options for a manual check.
///
/// Unknown keys are rejected when deserializing, so a misspelled
/// `failOnError` cannot silently relax a check.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", from = "CheckOptionsFields")]
pub struct CheckOptions {
    #[serde(flatten)]
    pub overrides: MatchOverrides,
    /// Fail the step when anything is found.
    pub fail_on_error: bool,
    /// Log a dump of the defects found.
    pub log: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CheckOptionsFields {
    #[serde(default)]
    patterns: Option<Vec<PatternSpec>>,
    #[serde(default)]
    exclude_selectors: Option<Vec<String>>,
    #[serde(default)]
    allowed_keys: Option<Vec<String>>,
    #[serde(default)]
    check_attributes: Option<Vec<String>>,
    #[serde(default)]
    fail_on_error: bool,
    #[serde(default = "default_log")]
    log: bool,
}

impl From<CheckOptionsFields> for CheckOptions {
    fn from(fields: CheckOptionsFields) -> Self {
        Self {
            overrides: MatchOverrides {
                patterns: fields.patterns,
                exclude_selectors: fields.exclude_selectors,
                allowed_keys: fields.allowed_keys,
                check_attributes: fields.check_attributes,
            },
            fail_on_error: fields.fail_on_error,
            log: fields.log,
        }
    }
}

fn default_log() -> bool {
    true
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            overrides: MatchOverrides::default(),
            fail_on_error: false,
            log: default_log(),
        }
    }
}

pub struct Session<S: ResultStore> {
    settings: MatchSettings,
    config: MatchConfig,
    settle_delay: Duration,
    tracker: NavigationTracker,
    store: S,
    current_test: String,
    verbose: bool,
}

impl<S: ResultStore> Session<S> {
    /// Install the tracker and store wiring for the rest of the run.
    pub fn setup(settings: MatchSettings, settle_delay: Duration, store: S) -> Result<Self> {
        let config = settings.compile()?;
        Ok(Self {
            settings,
            config,
            settle_delay,
            tracker: NavigationTracker::new(),
            store,
            current_test: String::new(),
            verbose: false,
        })
    }

    /// Dump defects of automatic scans to the log.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn observer(&self) -> NavigationObserver {
        self.tracker.observer()
    }

    pub fn tracker(&self) -> &NavigationTracker {
        &self.tracker
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn current_test(&self) -> &str {
        &self.current_test
    }

    /// Start-of-test hook.
    pub fn begin_test(&mut self, label: &str) {
        tracing::debug!("Starting test \"{}\"", label);
        self.current_test = label.to_string();
        self.tracker.reset();
    }

    /// End-of-step checkpoint hook.
    ///
    /// Scans the current document when a navigation to a destination not yet
    /// seen in this test is pending, after waiting for the settle delay, and
    /// stores the result under that destination. Returns what was stored.
    pub fn end_test_step<B: Browser>(
        &mut self,
        browser: &mut B,
    ) -> Result<Option<(String, ScanResult)>> {
        let Some(destination) = self.tracker.checkpoint() else {
            return Ok(None);
        };

        browser.wait(self.settle_delay);

        let defects = scan_browser(browser, &self.config, self.verbose);
        tracing::debug!(
            "Scanned {} for \"{}\": {} defect(s)",
            destination,
            self.current_test,
            defects.len()
        );

        self.store
            .put(&destination, defects.clone(), &self.current_test)?;

        Ok(Some((destination, defects)))
    }

    /// Scan the current document right away with per-call overrides.
    ///
    /// The result is not written to the store. With `fail_on_error` set, any
    /// defect turns into [`Error::DefectsFound`].
    pub fn check_translations<B: Browser>(
        &self,
        browser: &B,
        options: &CheckOptions,
    ) -> Result<ScanResult> {
        let config = if options.overrides.is_empty() {
            self.config.clone()
        } else {
            self.settings.with_overrides(&options.overrides).compile()?
        };

        let defects = scan_browser(browser, &config, options.log);

        if options.fail_on_error && !defects.is_empty() {
            return Err(Error::DefectsFound {
                count: defects.len(),
            });
        }

        Ok(defects)
    }
}

fn scan_browser<B: Browser>(browser: &B, config: &MatchConfig, verbose: bool) -> ScanResult {
    let scanner = Scanner::new(config).verbose(verbose);
    match browser.document() {
        Some(markup) => scanner.scan_document(&Html::parse_document(&markup)),
        None => scanner.scan(None),
    }
}
