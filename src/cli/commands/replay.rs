//! Journey replay: a scripted stand-in for a browser test file.
//!
//! A journey maps destinations to static HTML pages and lists tests made of
//! steps. Each test is wrapped in the same hooks a real test runner would
//! call: `begin_test` before the body, the end-of-step checkpoint after it.
//! A failing manual check fails its own test and nothing else.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::super::args::ReplayCommand;
use super::context::{CommandContext, resolve};
use super::{CommandResult, CommandSummary, ReplaySummary, TestOutcome};
use crate::core::{Browser, CheckOptions, NavigationObserver, ResultStore, Session};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Journey {
    #[serde(default)]
    pub name: Option<String>,
    /// Destination id to HTML file, relative to the journey file.
    pub pages: BTreeMap<String, PathBuf>,
    pub tests: Vec<JourneyTest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JourneyTest {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// Navigate to a destination.
    Visit(String),
    /// Manual check of the current page.
    Check(CheckOptions),
    /// Extra end-of-step checkpoint in the middle of a test.
    Checkpoint,
}

impl Journey {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read journey file: {}", path.display()))?;
        let journey: Journey = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse journey file: {}", path.display()))?;
        journey.validate()?;
        Ok(journey)
    }

    fn validate(&self) -> Result<()> {
        for test in &self.tests {
            for step in &test.steps {
                if let Step::Visit(destination) = step
                    && !self.pages.contains_key(destination)
                {
                    bail!(
                        "Test \"{}\" visits \"{}\", which has no page in the journey",
                        test.name,
                        destination
                    );
                }
            }
        }
        Ok(())
    }

    fn label(&self, test: &JourneyTest) -> String {
        match &self.name {
            Some(name) => format!("{} > {}", name, test.name),
            None => test.name.clone(),
        }
    }
}

/// Browser over pre-loaded static pages.
pub struct StaticBrowser {
    pages: BTreeMap<String, String>,
    current: Option<String>,
    observer: NavigationObserver,
}

impl StaticBrowser {
    pub fn new(pages: BTreeMap<String, String>, observer: NavigationObserver) -> Self {
        Self {
            pages,
            current: None,
            observer,
        }
    }

    pub fn visit(&mut self, destination: &str) {
        self.current = Some(destination.to_string());
        self.observer.notify(destination);
    }

    /// Blank page between tests.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl Browser for StaticBrowser {
    fn document(&self) -> Option<String> {
        self.current
            .as_ref()
            .and_then(|d| self.pages.get(d))
            .cloned()
    }

    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

pub fn replay(cmd: ReplayCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let journey = Journey::load(&cmd.journey)?;

    let journey_dir = cmd
        .journey
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let mut pages = BTreeMap::new();
    for (destination, file) in &journey.pages {
        let path = resolve(&journey_dir, file);
        let markup = fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read page for {}: {}",
                destination,
                path.display()
            )
        })?;
        pages.insert(destination.clone(), markup);
    }

    let settle_delay = cmd
        .settle_delay
        .map(Duration::from_millis)
        .unwrap_or_else(|| ctx.config.settle_delay());

    let mut session = Session::setup(ctx.config.matching.clone(), settle_delay, ctx.store())?
        .verbose(ctx.verbose);
    let mut browser = StaticBrowser::new(pages, session.observer());

    let mut tests = Vec::new();
    for test in &journey.tests {
        tests.push(run_test(
            &mut session,
            &mut browser,
            &journey.label(test),
            &test.steps,
        )?);
    }

    let summary = ReplaySummary {
        tests,
        store_path: ctx.store_path.clone(),
    };
    let failed = summary.failed_count() > 0;

    Ok(CommandResult {
        summary: CommandSummary::Replay(summary),
        failed,
    })
}

/// Run one test. Store errors abort the replay; a failing check only fails
/// this test.
fn run_test<S: ResultStore>(
    session: &mut Session<S>,
    browser: &mut StaticBrowser,
    label: &str,
    steps: &[Step],
) -> Result<TestOutcome> {
    browser.reset();
    session.begin_test(label);

    let mut scanned = Vec::new();
    let mut failure = None;

    for step in steps {
        match step {
            Step::Visit(destination) => browser.visit(destination),
            Step::Check(options) => {
                if let Err(e) = session.check_translations(&*browser, options) {
                    failure = Some(e.to_string());
                    break;
                }
            }
            Step::Checkpoint => {
                if let Some((destination, defects)) = session.end_test_step(browser)? {
                    scanned.push((destination, defects.len()));
                }
            }
        }
    }

    if let Some((destination, defects)) = session.end_test_step(browser)? {
        scanned.push((destination, defects.len()));
    }

    Ok(TestOutcome {
        label: label.to_string(),
        scanned,
        failure,
    })
}
