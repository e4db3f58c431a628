//! i18n-sweep - find unresolved translation placeholders in rendered pages
//!
//! The library scans HTML documents for text and attribute values that look
//! like untranslated keys (`{{key}}`, `i18n.key`, `$t('key')`, ...), tracks
//! navigations during a browser test run so each destination is scanned once
//! per test, aggregates results across test files, and validates them in a
//! final report pass.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and matching settings
//! - `core`: Detection and aggregation engine
//! - `issues`: Defect types

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
