use std::fmt::Write;

use crate::checker::{Report, RuleResult, RuleStatus};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi};

const RULE_WIDTH: usize = 60;

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_color(status: RuleStatus) -> &'static str {
        match status {
            RuleStatus::Pass => ansi::GREEN,
            RuleStatus::Warn => ansi::YELLOW,
            RuleStatus::Fail => ansi::RED,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_header(report: &Report, output: &mut String) {
        let rule = "=".repeat(RULE_WIDTH);
        let _ = writeln!(output, "{rule}");
        let _ = writeln!(output, "PAPER FORMAT CHECK REPORT");
        let _ = writeln!(output, "{rule}");
        let _ = writeln!(output, "File: {}", report.document());
        let _ = writeln!(output, "Pages: {}", report.page_count());
        let _ = writeln!(output, "{rule}");
    }

    fn format_result(&self, result: &RuleResult, output: &mut String) {
        let tag = self.colorize(result.status.tag(), Self::status_color(result.status));
        let _ = writeln!(output, "{tag} {}: {}", result.rule, result.message);

        if self.verbose == 0 {
            return;
        }
        if let Some(details) = &result.details {
            let _ = writeln!(output, "       -> {details}");
        }
    }

    fn format_summary(&self, report: &Report) -> String {
        let counts = report.counts();
        let overall = report.overall();
        let overall_str = self.colorize(overall.as_str(), Self::status_color(overall));
        let passed = self.colorize(&counts.passed.to_string(), ansi::GREEN);
        let warnings = self.colorize(&counts.warnings.to_string(), ansi::YELLOW);
        let failed = self.colorize(&counts.failed.to_string(), ansi::RED);

        format!(
            "Result: {overall_str} ({} rules checked: {passed} passed, {warnings} warnings, {failed} failed)",
            report.results().len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        Self::format_header(report, &mut output);
        for result in report.results() {
            self.format_result(result, &mut output);
        }
        output.push('\n');

        let _ = writeln!(output, "{}", self.format_summary(report));

        if self.verbose >= 1 && report.has_warnings() && !report.has_failures() {
            let hint = self.colorize(
                "Warnings do not fail the check; review them before submission.",
                ansi::CYAN,
            );
            let _ = writeln!(output, "{hint}");
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
