use std::fs;

use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PaperGuardError, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(e.error_type(), &e.to_string());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PaperGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# paper-guard configuration file
# All patterns are regular expressions matched case-insensitively.

[pages]
# Maximum number of pages, inclusive (default: 25)
max = 25

[team_header]
# Team number expected in the header of every page. Missing headers only warn.
enabled = true
pattern = 'Team\s*#?\s*\d{7}'

[page_header]
# "Page X of Y" headers; warn when fewer than min_coverage of pages carry one
enabled = true
pattern = 'Page\s+\d+\s+of\s+\d+'
min_coverage = 0.8

[forbidden]
# Any match fails the check. Add member names here, e.g. 'John\s+Smith'.
patterns = [
    'submitted\s+by',
    'authors?:',
    'prepared\s+by',
    'team\s+members?:',
    'written\s+by',
]

[institutions]
# Institution names only warn, since these words also occur in citations.
enabled = true
patterns = [
    'university',
    'college',
    'institute',
    'school\s+of',
    'department\s+of',
    'faculty\s+of',
    '\bMIT\b',
    'UCLA',
    'Stanford',
    'Harvard',
    'Berkeley',
    'Tsinghua',
    'Peking\s+University',
    '\bPKU\b',
]

[sections]
enabled = true

[[sections.required]]
name = "Summary"
patterns = ['\bSummary\b', '\bAbstract\b', '\bExecutive\s+Summary\b']
# within_pages = 2

[references]
# Missing references only warn
enabled = true
patterns = ['\bReferences\b', '\bBibliography\b', '\bWorks\s+Cited\b']

[keywords]
enabled = true
pattern = '\bKeywords?\s*:'
within_pages = 2
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
