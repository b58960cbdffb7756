use crate::checker::{PageSearch, PatternSet, Rule, RuleResult};
use crate::document::Document;
use crate::error::RuleEvaluationWarning;

use super::{KEYWORDS, REFERENCES, REQUIRED_SECTIONS};

/// A compiled required section.
#[derive(Debug, Clone)]
pub struct RequiredSection {
    pub name: String,
    pub patterns: PatternSet,
    pub within_pages: Option<usize>,
}

/// Every configured section must appear somewhere in its search range.
#[derive(Debug, Clone)]
pub struct RequiredSectionsRule {
    sections: Vec<RequiredSection>,
}

impl RequiredSectionsRule {
    #[must_use]
    pub const fn new(sections: Vec<RequiredSection>) -> Self {
        Self { sections }
    }
}

impl Rule for RequiredSectionsRule {
    fn name(&self) -> &'static str {
        REQUIRED_SECTIONS
    }

    fn evaluate(&self, document: &Document) -> Result<RuleResult, RuleEvaluationWarning> {
        if self.sections.is_empty() {
            return Ok(RuleResult::pass(
                REQUIRED_SECTIONS,
                "No required sections configured",
            ));
        }

        let mut missing = Vec::new();
        let mut unsearched = Vec::new();
        for section in &self.sections {
            let search = PageSearch::run(
                document.leading_pages(section.within_pages),
                &section.patterns,
            );
            if !search.is_found() {
                missing.push(section.name.as_str());
                unsearched.extend(search.unreadable);
            }
        }

        if missing.is_empty() {
            let names = self
                .sections
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Ok(RuleResult::pass(
                REQUIRED_SECTIONS,
                format!("Required sections present: {names}"),
            ));
        }

        // A missing section could be hiding on a page we could not read.
        if !unsearched.is_empty() {
            unsearched.sort_unstable();
            unsearched.dedup();
            return Err(RuleEvaluationWarning::UnreadablePages { pages: unsearched });
        }

        Ok(RuleResult::fail(
            REQUIRED_SECTIONS,
            format!("Missing required section(s): {}", missing.join(", ")),
        )
        .with_details("Add a clearly labeled heading for each missing section"))
    }
}

/// A recommended section. Its absence is a warning, never a failure.
#[derive(Debug, Clone)]
pub struct RecommendedSectionRule {
    name: &'static str,
    label: &'static str,
    hint: &'static str,
    patterns: PatternSet,
    within_pages: Option<usize>,
}

impl RecommendedSectionRule {
    #[must_use]
    pub const fn references(patterns: PatternSet) -> Self {
        Self {
            name: REFERENCES,
            label: "References section",
            hint: "Ensure you have a clearly labeled References section",
            patterns,
            within_pages: None,
        }
    }

    #[must_use]
    pub const fn keywords(patterns: PatternSet, within_pages: Option<usize>) -> Self {
        Self {
            name: KEYWORDS,
            label: "Keywords",
            hint: "Consider adding keywords after your summary",
            patterns,
            within_pages,
        }
    }
}

impl Rule for RecommendedSectionRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, document: &Document) -> Result<RuleResult, RuleEvaluationWarning> {
        let search = PageSearch::run(document.leading_pages(self.within_pages), &self.patterns);

        if search.is_found() {
            return Ok(RuleResult::pass(self.name, format!("{} detected", self.label))
                .with_pages(search.found));
        }

        if !search.unreadable.is_empty() {
            return Err(RuleEvaluationWarning::UnreadablePages {
                pages: search.unreadable,
            });
        }

        Ok(
            RuleResult::warn(self.name, format!("No {} detected", self.label))
                .with_details(self.hint),
        )
    }
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;
