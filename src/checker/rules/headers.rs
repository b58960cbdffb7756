use std::fmt::Write;

use regex::Regex;

use crate::checker::{Rule, RuleResult};
use crate::document::{Document, format_pages};
use crate::error::RuleEvaluationWarning;

use super::{PAGE_HEADER, TEAM_HEADER};

/// Pages split by whether they carry a header pattern.
struct HeaderScan {
    missing: Vec<usize>,
    unreadable: Vec<usize>,
    total: usize,
}

impl HeaderScan {
    fn run(document: &Document, pattern: &Regex) -> Self {
        let mut missing = Vec::new();
        let mut unreadable = Vec::new();
        for page in document.pages() {
            match page.text() {
                Some(text) if pattern.is_match(text) => {}
                Some(_) => missing.push(page.index),
                None => unreadable.push(page.index),
            }
        }
        Self {
            missing,
            unreadable,
            total: document.page_count(),
        }
    }

    fn found(&self) -> usize {
        self.total - self.missing.len() - self.unreadable.len()
    }
}

/// Team number header (e.g. `Team # 2412345`) expected on every page.
///
/// Header placement varies by template, so a missing header is only ever a warning.
#[derive(Debug, Clone)]
pub struct TeamHeaderRule {
    pattern: Regex,
}

impl TeamHeaderRule {
    #[must_use]
    pub const fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Rule for TeamHeaderRule {
    fn name(&self) -> &'static str {
        TEAM_HEADER
    }

    fn evaluate(&self, document: &Document) -> Result<RuleResult, RuleEvaluationWarning> {
        let scan = HeaderScan::run(document, &self.pattern);

        if scan.missing.is_empty() {
            if !scan.unreadable.is_empty() {
                return Err(RuleEvaluationWarning::UnreadablePages {
                    pages: scan.unreadable,
                });
            }
            return Ok(RuleResult::pass(
                TEAM_HEADER,
                format!("Team number header found on all {} pages", scan.total),
            ));
        }

        let mut details = format!("Missing on pages: {}", format_pages(&scan.missing));
        if !scan.unreadable.is_empty() {
            let _ = write!(details, "; unreadable pages: {}", format_pages(&scan.unreadable));
        }

        let message = if scan.found() == 0 {
            "No team number header found (Team # XXXXXXX)".to_string()
        } else {
            format!(
                "Team number header found on {}/{} pages",
                scan.found(),
                scan.total
            )
        };

        Ok(RuleResult::warn(TEAM_HEADER, message)
            .with_details(details)
            .with_pages(scan.missing))
    }
}

/// "Page X of Y" headers on at least a configured share of pages.
#[derive(Debug, Clone)]
pub struct PageHeaderRule {
    pattern: Regex,
    min_coverage: f64,
}

impl PageHeaderRule {
    #[must_use]
    pub const fn new(pattern: Regex, min_coverage: f64) -> Self {
        Self {
            pattern,
            min_coverage,
        }
    }

    #[allow(clippy::cast_precision_loss)] // Page counts are far below f64 precision limits
    fn coverage(pages: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        pages as f64 / total as f64
    }
}

impl Rule for PageHeaderRule {
    fn name(&self) -> &'static str {
        PAGE_HEADER
    }

    fn evaluate(&self, document: &Document) -> Result<RuleResult, RuleEvaluationWarning> {
        let scan = HeaderScan::run(document, &self.pattern);
        let found = scan.found();

        if Self::coverage(found, scan.total) >= self.min_coverage {
            return Ok(RuleResult::pass(
                PAGE_HEADER,
                format!("Page headers present on {found}/{} pages", scan.total),
            ));
        }

        // Unreadable pages might carry the header; only warn about coverage if they could not help.
        let best_case = found + scan.unreadable.len();
        if !scan.unreadable.is_empty()
            && Self::coverage(best_case, scan.total) >= self.min_coverage
        {
            return Err(RuleEvaluationWarning::UnreadablePages {
                pages: scan.unreadable,
            });
        }

        let message = if found == 0 {
            "Page number headers not detected (Page X of Y)".to_string()
        } else {
            format!("Page headers found on {found}/{} pages", scan.total)
        };

        Ok(RuleResult::warn(PAGE_HEADER, message)
            .with_details("Consider adding 'Page X of Y' headers")
            .with_pages(scan.missing))
    }
}

#[cfg(test)]
#[path = "headers_tests.rs"]
mod tests;
