use std::collections::BTreeSet;

use crate::checker::{PatternSet, Rule, RuleResult, RuleStatus};
use crate::document::{Document, format_pages};
use crate::error::RuleEvaluationWarning;

use super::{FORBIDDEN_IDENTIFIERS, INSTITUTION_NAMES};

/// Scans every page for patterns that would identify the authors.
///
/// A match produces `on_match` (FAIL for forbidden identifiers, WARN for institution
/// names) and lists every page that matched.
#[derive(Debug, Clone)]
pub struct PatternScanRule {
    name: &'static str,
    label: &'static str,
    patterns: PatternSet,
    on_match: RuleStatus,
}

impl PatternScanRule {
    #[must_use]
    pub const fn forbidden_identifiers(patterns: PatternSet) -> Self {
        Self {
            name: FORBIDDEN_IDENTIFIERS,
            label: "forbidden identifiers",
            patterns,
            on_match: RuleStatus::Fail,
        }
    }

    #[must_use]
    pub const fn institution_names(patterns: PatternSet) -> Self {
        Self {
            name: INSTITUTION_NAMES,
            label: "school/institution names",
            patterns,
            on_match: RuleStatus::Warn,
        }
    }
}

impl Rule for PatternScanRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, document: &Document) -> Result<RuleResult, RuleEvaluationWarning> {
        if self.patterns.is_empty() {
            return Ok(RuleResult::pass(
                self.name,
                format!("No {} configured", self.label),
            ));
        }

        let mut pages = Vec::new();
        let mut unreadable = Vec::new();
        let mut matched: BTreeSet<&str> = BTreeSet::new();
        for page in document.pages() {
            let Some(text) = page.text() else {
                unreadable.push(page.index);
                continue;
            };
            let hits = self.patterns.matching(text);
            if !hits.is_empty() {
                pages.push(page.index);
                matched.extend(hits);
            }
        }

        if !pages.is_empty() {
            let message = format!(
                "Possible {} found on page(s) {}",
                self.label,
                format_pages(&pages)
            );
            let patterns = matched.into_iter().collect::<Vec<_>>().join(", ");
            let result = match self.on_match {
                RuleStatus::Fail => RuleResult::fail(self.name, message),
                _ => RuleResult::warn(self.name, message),
            };
            return Ok(result
                .with_details(format!("Patterns matched: {patterns}"))
                .with_pages(pages));
        }

        if !unreadable.is_empty() {
            return Err(RuleEvaluationWarning::UnreadablePages { pages: unreadable });
        }

        Ok(RuleResult::pass(
            self.name,
            format!("No {} detected", self.label),
        ))
    }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
