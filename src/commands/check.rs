use std::path::Path;

use crate::checker::{FormatChecker, Report};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::document::{self, Document};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_RULE_FAILED, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(e.error_type(), &e.to_string());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a full check: load config, load document, evaluate rules, write the report.
///
/// # Errors
/// Returns an error if the configuration is invalid, the document is unreadable,
/// or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides, then re-validate the result
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;
    let checker = FormatChecker::new(&config)?;

    // 3. Load the document (fatal on failure)
    let document = document::load(&args.file)?;
    if cli.verbose >= 2 {
        report_load_diagnostics(&document, cli.color.into());
    }

    // 4. Evaluate rules
    let report = checker.check(&document);

    // 5. Format and write output
    let color_mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let output = format_report(args.format, &report, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    Ok(exit_code_for(&report, args.strict))
}

/// Loads configuration from an explicit path, by discovery, or defaults with `--no-config`.
///
/// # Errors
/// Returns an error if the configuration cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = match config_path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    Ok(result.config)
}

pub fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(max_pages) = args.max_pages {
        config.pages.max = max_pages;
    }

    if args.no_default_forbidden {
        config.forbidden.patterns.clear();
    }

    config.forbidden.patterns.extend(args.forbid.iter().cloned());
}

#[must_use]
pub fn exit_code_for(report: &Report, strict: bool) -> i32 {
    if report.has_failures() || (strict && report.has_warnings()) {
        EXIT_RULE_FAILED
    } else {
        EXIT_SUCCESS
    }
}

fn report_load_diagnostics(document: &Document, color: ColorMode) {
    let errors = ErrorOutput::new(color);
    eprintln!(
        "Loaded {} page(s) from {}",
        document.page_count(),
        document.path().display()
    );
    for page in document.pages() {
        match page.text() {
            None => errors.print_warning(
                &format!("page {} has no decodable text", page.index),
                Some("rules that need this page will report WARN"),
            ),
            Some(text) if text.trim().is_empty() => errors.print_warning(
                &format!("page {} has no extractable text (image-only?)", page.index),
                None,
            ),
            Some(_) => {}
        }
    }
}

/// Renders the report in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_report(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        std::fs::write(path, content)?;
        if !quiet {
            println!("Report saved to: {}", path.display());
        }
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
