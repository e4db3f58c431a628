//! Placeholder matching policy.
//!
//! A candidate string is a defect when it is non-blank, contains none of the
//! allowed keys, and matches at least one pattern. The allow-list always wins.

use enum_dispatch::enum_dispatch;
use regex::Regex;
use scraper::Selector;

use super::error::{Error, Result};

/// Uniform matching capability shared by every pattern kind.
#[enum_dispatch]
pub trait Matches {
    fn matches(&self, candidate: &str) -> bool;
}

/// Matches by substring containment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralPattern(String);

impl LiteralPattern {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Matches for LiteralPattern {
    fn matches(&self, candidate: &str) -> bool {
        candidate.contains(self.0.as_str())
    }
}

/// Matches by regex search (not anchored unless the expression says so).
#[derive(Debug, Clone)]
pub struct RegexPattern(Regex);

impl RegexPattern {
    pub fn new(expression: &str) -> Result<Self> {
        Regex::new(expression)
            .map(Self)
            .map_err(|e| Error::InvalidPattern {
                pattern: expression.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Matches for RegexPattern {
    fn matches(&self, candidate: &str) -> bool {
        self.0.is_match(candidate)
    }
}

#[enum_dispatch(Matches)]
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(LiteralPattern),
    Regex(RegexPattern),
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(LiteralPattern::new(text))
    }

    pub fn regex(expression: &str) -> Result<Self> {
        RegexPattern::new(expression).map(Pattern::Regex)
    }

    /// Source text of the pattern, for diagnostics.
    pub fn source(&self) -> &str {
        match self {
            Pattern::Literal(p) => p.as_str(),
            Pattern::Regex(p) => p.as_str(),
        }
    }
}

/// Compiled scanning policy.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub patterns: Vec<Pattern>,
    pub exclude_selectors: Vec<Selector>,
    pub allowed_keys: Vec<String>,
    pub check_attributes: Vec<String>,
}

impl MatchConfig {
    pub fn new(
        patterns: Vec<Pattern>,
        exclude_selectors: &[String],
        allowed_keys: Vec<String>,
        check_attributes: Vec<String>,
    ) -> Result<Self> {
        let exclude_selectors = exclude_selectors
            .iter()
            .map(|s| compile_selector(s))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            exclude_selectors,
            allowed_keys,
            check_attributes,
        })
    }
}

pub fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Decide whether `value` looks like an unresolved translation placeholder.
pub fn is_defect(value: &str, config: &MatchConfig) -> bool {
    if value.trim().is_empty() {
        return false;
    }

    if config
        .allowed_keys
        .iter()
        .any(|key| value.contains(key.as_str()))
    {
        return false;
    }

    config.patterns.iter().any(|p| p.matches(value))
}
