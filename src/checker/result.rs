use serde::Serialize;

/// Outcome of a single rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Pass,
    Warn,
    Fail,
}

impl RuleStatus {
    /// Bracketed tag used in text output.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pass => "[PASS]",
            Self::Warn => "[WARN]",
            Self::Fail => "[FAIL]",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

/// Result of evaluating one rule against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub rule: String,
    pub status: RuleStatus,
    pub message: String,
    /// Extra context shown in verbose output.
    pub details: Option<String>,
    /// 1-based pages the result refers to, ascending.
    pub pages: Vec<usize>,
}

impl RuleResult {
    fn new(rule: &str, status: RuleStatus, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            status,
            message: message.into(),
            details: None,
            pages: Vec::new(),
        }
    }

    #[must_use]
    pub fn pass(rule: &str, message: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::Pass, message)
    }

    #[must_use]
    pub fn warn(rule: &str, message: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::Warn, message)
    }

    #[must_use]
    pub fn fail(rule: &str, message: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::Fail, message)
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_pages(mut self, pages: Vec<usize>) -> Self {
        self.pages = pages;
        self
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, RuleStatus::Pass)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.status, RuleStatus::Warn)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, RuleStatus::Fail)
    }
}

/// Per-status totals of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

/// The complete, ordered set of rule results from one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    document: String,
    page_count: usize,
    results: Vec<RuleResult>,
}

impl Report {
    #[must_use]
    pub const fn new(document: String, page_count: usize, results: Vec<RuleResult>) -> Self {
        Self {
            document,
            page_count,
            results,
        }
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    #[must_use]
    pub fn result(&self, rule: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule == rule)
    }

    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        self.results
            .iter()
            .fold(StatusCounts::default(), |mut counts, r| {
                match r.status {
                    RuleStatus::Pass => counts.passed += 1,
                    RuleStatus::Warn => counts.warnings += 1,
                    RuleStatus::Fail => counts.failed += 1,
                }
                counts
            })
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(RuleResult::is_failed)
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.results.iter().any(RuleResult::is_warning)
    }

    /// Overall verdict: FAIL iff any rule failed. Warnings never fail a report.
    #[must_use]
    pub fn overall(&self) -> RuleStatus {
        if self.has_failures() {
            RuleStatus::Fail
        } else {
            RuleStatus::Pass
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
