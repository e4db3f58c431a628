use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use glob::Pattern as GlobPattern;
use serde::{Deserialize, Serialize};

use crate::core::{self, MatchConfig, Pattern};

pub const CONFIG_FILE_NAME: &str = ".i18nsweeprc.json";

pub const DEFAULT_PATTERNS: &[&str] = &[
    r"\{\{.*?\}\}",
    r"\[\[.*?\]\]",
    r"^i18n\.",
    r"^[A-Z_]+\.[A-Z_]+",
    r"\$t\(.*?\)",
];

pub const DEFAULT_EXCLUDE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "[data-translation-ignore]",
    ".translation-ignore",
];

pub const DEFAULT_CHECK_ATTRIBUTES: &[&str] = &["placeholder", "title", "alt", "aria-label"];

pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// A pattern as written in configuration: a bare string is a literal,
/// `{ "regex": "..." }` is a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PatternSpec {
    Literal(String),
    Regex { regex: String },
}

impl PatternSpec {
    pub fn compile(&self) -> core::Result<Pattern> {
        match self {
            PatternSpec::Literal(text) => Ok(Pattern::literal(text.as_str())),
            PatternSpec::Regex { regex } => Pattern::regex(regex),
        }
    }
}

/// Uncompiled scanning policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSettings {
    #[serde(default = "default_patterns")]
    pub patterns: Vec<PatternSpec>,
    #[serde(default = "default_exclude_selectors")]
    pub exclude_selectors: Vec<String>,
    #[serde(default)]
    pub allowed_keys: Vec<String>,
    #[serde(default = "default_check_attributes")]
    pub check_attributes: Vec<String>,
}

fn default_patterns() -> Vec<PatternSpec> {
    DEFAULT_PATTERNS
        .iter()
        .map(|p| PatternSpec::Regex {
            regex: p.to_string(),
        })
        .collect()
}

fn default_exclude_selectors() -> Vec<String> {
    DEFAULT_EXCLUDE_SELECTORS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_check_attributes() -> Vec<String> {
    DEFAULT_CHECK_ATTRIBUTES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            exclude_selectors: default_exclude_selectors(),
            allowed_keys: Vec::new(),
            check_attributes: default_check_attributes(),
        }
    }
}

impl MatchSettings {
    pub fn compile(&self) -> core::Result<MatchConfig> {
        let patterns = self
            .patterns
            .iter()
            .map(PatternSpec::compile)
            .collect::<core::Result<Vec<_>>>()?;

        MatchConfig::new(
            patterns,
            &self.exclude_selectors,
            self.allowed_keys.clone(),
            self.check_attributes.clone(),
        )
    }

    /// Settings with every field present in `overrides` replaced.
    pub fn with_overrides(&self, overrides: &MatchOverrides) -> MatchSettings {
        MatchSettings {
            patterns: overrides
                .patterns
                .clone()
                .unwrap_or_else(|| self.patterns.clone()),
            exclude_selectors: overrides
                .exclude_selectors
                .clone()
                .unwrap_or_else(|| self.exclude_selectors.clone()),
            allowed_keys: overrides
                .allowed_keys
                .clone()
                .unwrap_or_else(|| self.allowed_keys.clone()),
            check_attributes: overrides
                .check_attributes
                .clone()
                .unwrap_or_else(|| self.check_attributes.clone()),
        }
    }
}

/// Per-call replacements for individual settings fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<PatternSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_selectors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_attributes: Option<Vec<String>>,
}

impl MatchOverrides {
    pub fn is_empty(&self) -> bool {
        self.patterns.is_none()
            && self.exclude_selectors.is_none()
            && self.allowed_keys.is_none()
            && self.check_attributes.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(flatten)]
    pub matching: MatchSettings,
    #[serde(default = "default_settle_delay")]
    pub settle_delay: u64,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

fn default_settle_delay() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

fn default_includes() -> Vec<String> {
    ["**/*.html", "**/*.htm"].map(String::from).to_vec()
}

fn default_store_path() -> String {
    ".i18n-sweep/results.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchSettings::default(),
            settle_delay: default_settle_delay(),
            includes: default_includes(),
            ignores: Vec::new(),
            store_path: default_store_path(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, regexes or selectors.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            GlobPattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        for pattern in &self.ignores {
            GlobPattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        self.matching
            .compile()
            .context("Invalid matching configuration")?;

        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
