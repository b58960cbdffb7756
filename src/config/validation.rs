//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after parsing:
//! range checks, regex compilation and per-section constraints.

use crate::checker::compile_pattern;
use crate::config::Config;
use crate::{PaperGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `pages.max` is zero, `page_header.min_coverage` is out of range,
/// any pattern is not a valid regex, or a required section is misconfigured.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_ranges(config)?;
    validate_sections(config)?;
    validate_patterns(config)?;
    Ok(())
}

fn validate_ranges(config: &Config) -> Result<()> {
    if config.pages.max == 0 {
        return Err(PaperGuardError::Config(
            "pages.max must be greater than 0".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&config.page_header.min_coverage) {
        return Err(PaperGuardError::Config(format!(
            "page_header.min_coverage must be between 0.0 and 1.0, got {}",
            config.page_header.min_coverage
        )));
    }

    if config.keywords.within_pages == Some(0) {
        return Err(PaperGuardError::Config(
            "keywords.within_pages must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_sections(config: &Config) -> Result<()> {
    for (i, section) in config.sections.required.iter().enumerate() {
        if section.name.trim().is_empty() {
            return Err(PaperGuardError::Config(format!(
                "sections.required[{i}].name cannot be empty"
            )));
        }
        if section.patterns.is_empty() {
            return Err(PaperGuardError::Config(format!(
                "sections.required[{i}] ({}): must specify at least one pattern",
                section.name
            )));
        }
        if section.within_pages == Some(0) {
            return Err(PaperGuardError::Config(format!(
                "sections.required[{i}].within_pages must be greater than 0"
            )));
        }
    }
    Ok(())
}

fn validate_patterns(config: &Config) -> Result<()> {
    let singles = [
        &config.team_header.pattern,
        &config.page_header.pattern,
        &config.keywords.pattern,
    ];
    let lists = config
        .forbidden
        .patterns
        .iter()
        .chain(&config.institutions.patterns)
        .chain(&config.references.patterns)
        .chain(config.sections.required.iter().flat_map(|s| &s.patterns));

    for pattern in singles.into_iter().chain(lists) {
        compile_pattern(pattern)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
