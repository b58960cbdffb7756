use regex::{Regex, RegexBuilder};

use crate::document::Page;
use crate::error::{PaperGuardError, Result};

/// Compile a configured pattern. All rule patterns match case-insensitively.
///
/// # Errors
/// Returns `InvalidPattern` if the pattern is not a valid regex.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| PaperGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// An ordered list of compiled patterns that keeps the original sources for reporting.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// # Errors
    /// Returns `InvalidPattern` for the first pattern that fails to compile.
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|s| compile_pattern(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Sources of the patterns that match `text`, in configured order.
    #[must_use]
    pub fn matching(&self, text: &str) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|p| p.is_match(text))
            .map(Regex::as_str)
            .collect()
    }
}

/// Outcome of searching a run of pages for a pattern set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSearch {
    /// Readable pages containing at least one match.
    pub found: Vec<usize>,
    /// Pages whose text could not be searched.
    pub unreadable: Vec<usize>,
}

impl PageSearch {
    #[must_use]
    pub fn run(pages: &[Page], patterns: &PatternSet) -> Self {
        let mut search = Self::default();
        for page in pages {
            match page.text() {
                Some(text) if patterns.is_match(text) => search.found.push(page.index),
                Some(_) => {}
                None => search.unreadable.push(page.index),
            }
        }
        search
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.found.is_empty()
    }
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
