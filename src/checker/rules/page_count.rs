use crate::checker::{Rule, RuleResult};
use crate::document::Document;
use crate::error::RuleEvaluationWarning;

use super::PAGE_COUNT;

/// Fails when the document has more pages than allowed. The bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCountRule {
    max_pages: usize,
}

impl PageCountRule {
    #[must_use]
    pub const fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }
}

impl Rule for PageCountRule {
    fn name(&self) -> &'static str {
        PAGE_COUNT
    }

    fn evaluate(&self, document: &Document) -> Result<RuleResult, RuleEvaluationWarning> {
        let count = document.page_count();
        let max = self.max_pages;
        let message = format!("Page count: {count}/{max}");

        if count <= max {
            return Ok(RuleResult::pass(PAGE_COUNT, message)
                .with_details(format!("{} pages remaining", max - count)));
        }

        Ok(RuleResult::fail(PAGE_COUNT, message)
            .with_details(format!("Over limit by {} pages", count - max))
            .with_pages((max + 1..=count).collect()))
    }
}

#[cfg(test)]
#[path = "page_count_tests.rs"]
mod tests;
