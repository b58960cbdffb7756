use serde::Serialize;

use crate::checker::{Report, RuleResult, RuleStatus};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    document: &'a str,
    pages: usize,
    status: RuleStatus,
    summary: Summary,
    results: Vec<JsonResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_rules: usize,
    passed: usize,
    warnings: usize,
    failed: usize,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    rule: &'a str,
    status: RuleStatus,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
    #[serde(skip_serializing_if = "no_pages")]
    pages: &'a [usize],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let counts = report.counts();
        let output = JsonOutput {
            document: report.document(),
            pages: report.page_count(),
            status: report.overall(),
            summary: Summary {
                total_rules: report.results().len(),
                passed: counts.passed,
                warnings: counts.warnings,
                failed: counts.failed,
            },
            results: report.results().iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes a reference to the field
fn no_pages(pages: &&[usize]) -> bool {
    pages.is_empty()
}

fn convert_result(result: &RuleResult) -> JsonResult<'_> {
    JsonResult {
        rule: &result.rule,
        status: result.status,
        message: &result.message,
        details: result.details.as_deref(),
        pages: &result.pages,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
