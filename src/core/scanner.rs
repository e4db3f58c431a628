//! Document traversal.
//!
//! The scanner walks a document depth-first in document order, starting at
//! `<body>`. For every element that is not excluded it checks the configured
//! attributes first and then descends into its children, so an element's
//! attribute defects always come before anything found inside it. Excluded
//! elements are skipped together with their whole subtree.

use scraper::{ElementRef, Html, Node};

use super::locator::locate;
use super::matcher::{MatchConfig, is_defect};
use super::report::render_defects;
use crate::issues::Defect;

/// Defects from one scan, in discovery order.
pub type ScanResult = Vec<Defect>;

pub struct Scanner<'c> {
    config: &'c MatchConfig,
    verbose: bool,
}

impl<'c> Scanner<'c> {
    pub fn new(config: &'c MatchConfig) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    /// Log a dump of every defect found after each scan.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scan a parsed document from its `<body>`.
    pub fn scan_document(&self, html: &Html) -> ScanResult {
        self.scan(body(html))
    }

    /// Scan from `root`. A missing root scans nothing.
    pub fn scan(&self, root: Option<ElementRef<'_>>) -> ScanResult {
        let mut defects = Vec::new();

        if let Some(root) = root {
            self.visit(root, &mut defects);
        }

        if self.verbose && !defects.is_empty() {
            tracing::info!(
                "Found {} untranslated placeholder(s):\n{}",
                defects.len(),
                render_defects(&defects)
            );
        }

        defects
    }

    fn visit(&self, element: ElementRef<'_>, defects: &mut ScanResult) {
        if self.is_excluded(element) {
            return;
        }

        let tag = element.value().name();

        for attr in &self.config.check_attributes {
            let Some(value) = element.value().attr(attr) else {
                continue;
            };
            let value = value.trim();
            if !value.is_empty() && is_defect(value, self.config) {
                defects.push(Defect::attribute(attr, value, tag, locate(element)));
            }
        }

        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    let value = text.trim();
                    if !value.is_empty() && is_defect(value, self.config) {
                        defects.push(Defect::text(value, tag, locate(element)));
                    }
                }
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        self.visit(child, defects);
                    }
                }
                _ => {}
            }
        }
    }

    /// True when the element or any of its ancestors matches an exclude selector.
    pub fn is_excluded(&self, element: ElementRef<'_>) -> bool {
        if self.config.exclude_selectors.is_empty() {
            return false;
        }

        let mut current = Some(element);
        while let Some(el) = current {
            if self.config.exclude_selectors.iter().any(|s| s.matches(&el)) {
                return true;
            }
            current = el.parent().and_then(ElementRef::wrap);
        }

        false
    }
}

/// The `<body>` element of a parsed document, if there is one.
pub fn body(html: &Html) -> Option<ElementRef<'_>> {
    html.root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "body")
}
