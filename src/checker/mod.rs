mod patterns;
mod result;
pub mod rules;

pub use patterns::{PageSearch, PatternSet, compile_pattern};
pub use result::{Report, RuleResult, RuleStatus, StatusCounts};

use crate::config::Config;
use crate::document::Document;
use crate::error::{Result, RuleEvaluationWarning};

use rules::{
    PageCountRule, PageHeaderRule, PatternScanRule, RecommendedSectionRule, RequiredSection,
    RequiredSectionsRule, TeamHeaderRule,
};

/// A single named compliance check.
pub trait Rule {
    /// Stable identifier shown in reports.
    fn name(&self) -> &'static str;

    /// Evaluate the rule against a document.
    ///
    /// # Errors
    /// Returns a warning when the rule could not reach a verdict, e.g. because the
    /// pages that decide it have no decodable text. The checker reports it as WARN.
    fn evaluate(
        &self,
        document: &Document,
    ) -> std::result::Result<RuleResult, RuleEvaluationWarning>;
}

/// Runs an ordered set of rules over a document.
pub struct FormatChecker {
    rules: Vec<Box<dyn Rule>>,
}

impl FormatChecker {
    /// Compile the rule set described by `config`, in display order.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if any configured pattern fails to compile.
    pub fn new(config: &Config) -> Result<Self> {
        let mut rules: Vec<Box<dyn Rule>> = vec![Box::new(PageCountRule::new(config.pages.max))];

        if config.team_header.enabled {
            rules.push(Box::new(TeamHeaderRule::new(compile_pattern(
                &config.team_header.pattern,
            )?)));
        }

        if config.page_header.enabled {
            rules.push(Box::new(PageHeaderRule::new(
                compile_pattern(&config.page_header.pattern)?,
                config.page_header.min_coverage,
            )));
        }

        rules.push(Box::new(PatternScanRule::forbidden_identifiers(
            PatternSet::compile(&config.forbidden.patterns)?,
        )));

        if config.institutions.enabled {
            rules.push(Box::new(PatternScanRule::institution_names(
                PatternSet::compile(&config.institutions.patterns)?,
            )));
        }

        if config.sections.enabled {
            let sections = config
                .sections
                .required
                .iter()
                .map(|spec| {
                    Ok(RequiredSection {
                        name: spec.name.clone(),
                        patterns: PatternSet::compile(&spec.patterns)?,
                        within_pages: spec.within_pages,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rules.push(Box::new(RequiredSectionsRule::new(sections)));
        }

        if config.references.enabled {
            rules.push(Box::new(RecommendedSectionRule::references(
                PatternSet::compile(&config.references.patterns)?,
            )));
        }

        if config.keywords.enabled {
            rules.push(Box::new(RecommendedSectionRule::keywords(
                PatternSet::compile(&[&config.keywords.pattern])?,
                config.keywords.within_pages,
            )));
        }

        Ok(Self { rules })
    }

    /// Build a checker from an explicit rule list.
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate every rule, in order. Always yields exactly one result per rule.
    #[must_use]
    pub fn check(&self, document: &Document) -> Report {
        let results = self
            .rules
            .iter()
            .map(|rule| evaluate_rule(rule.as_ref(), document))
            .collect();
        Report::new(document.name(), document.page_count(), results)
    }
}

fn evaluate_rule(rule: &dyn Rule, document: &Document) -> RuleResult {
    rule.evaluate(document).unwrap_or_else(|warning| {
        let pages = match &warning {
            RuleEvaluationWarning::UnreadablePages { pages } => pages.clone(),
        };
        RuleResult::warn(rule.name(), format!("Could not fully evaluate: {warning}"))
            .with_pages(pages)
    })
}

/// Check `document` against `config` in one step.
///
/// # Errors
/// Returns `InvalidPattern` if the configuration contains an invalid pattern.
pub fn check(document: &Document, config: &Config) -> Result<Report> {
    Ok(FormatChecker::new(config)?.check(document))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
