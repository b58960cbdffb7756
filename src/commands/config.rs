use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::{ErrorOutput, OutputFormat};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(cli.color.into());
    match &args.action {
        ConfigAction::Validate { config } => match run_config_validate_impl(config) {
            Ok(()) => {
                println!("Configuration is valid: {}", config.display());
                EXIT_SUCCESS
            }
            Err(e) => {
                errors.print_error(e.error_type(), &e.to_string());
                EXIT_CONFIG_ERROR
            }
        },
        ConfigAction::Show { config, format } => {
            match run_config_show_impl(config.as_deref(), *format, cli.no_config) {
                Ok(output) => {
                    print!("{output}");
                    EXIT_SUCCESS
                }
                Err(e) => {
                    errors.print_error(e.error_type(), &e.to_string());
                    EXIT_CONFIG_ERROR
                }
            }
        }
    }
}

/// Validates a configuration file: existence, TOML syntax and semantics.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = if no_config {
        LoadResult {
            config: Config::default(),
            source: None,
        }
    } else {
        let loader = FileConfigLoader::new();
        match config_path {
            Some(path) => loader.load_from_path(path)?,
            None => loader.load()?,
        }
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub fn format_config_text(loaded: &LoadResult) -> String {
    let config = &loaded.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    let source = loaded
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    let _ = writeln!(output, "# source: {source}\n");

    let _ = writeln!(output, "[pages]\n  max = {}", config.pages.max);

    output.push_str("\n[team_header]\n");
    let _ = writeln!(output, "  enabled = {}", config.team_header.enabled);
    let _ = writeln!(output, "  pattern = '{}'", config.team_header.pattern);

    output.push_str("\n[page_header]\n");
    let _ = writeln!(output, "  enabled = {}", config.page_header.enabled);
    let _ = writeln!(output, "  pattern = '{}'", config.page_header.pattern);
    let _ = writeln!(output, "  min_coverage = {}", config.page_header.min_coverage);

    output.push_str("\n[forbidden]\n");
    write_patterns(&mut output, &config.forbidden.patterns);

    output.push_str("\n[institutions]\n");
    let _ = writeln!(output, "  enabled = {}", config.institutions.enabled);
    write_patterns(&mut output, &config.institutions.patterns);

    output.push_str("\n[sections]\n");
    let _ = writeln!(output, "  enabled = {}", config.sections.enabled);
    for section in &config.sections.required {
        output.push_str("\n[[sections.required]]\n");
        let _ = writeln!(output, "  name = \"{}\"", section.name);
        write_patterns(&mut output, &section.patterns);
        if let Some(n) = section.within_pages {
            let _ = writeln!(output, "  within_pages = {n}");
        }
    }

    output.push_str("\n[references]\n");
    let _ = writeln!(output, "  enabled = {}", config.references.enabled);
    write_patterns(&mut output, &config.references.patterns);

    output.push_str("\n[keywords]\n");
    let _ = writeln!(output, "  enabled = {}", config.keywords.enabled);
    let _ = writeln!(output, "  pattern = '{}'", config.keywords.pattern);
    if let Some(n) = config.keywords.within_pages {
        let _ = writeln!(output, "  within_pages = {n}");
    }

    output
}

fn write_patterns(output: &mut String, patterns: &[String]) {
    if patterns.is_empty() {
        output.push_str("  patterns = []\n");
        return;
    }
    output.push_str("  patterns = [\n");
    for pattern in patterns {
        let _ = writeln!(output, "    '{pattern}',");
    }
    output.push_str("  ]\n");
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
