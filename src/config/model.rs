use serde::{Deserialize, Serialize};

/// Default page ceiling for a submission.
pub const DEFAULT_MAX_PAGES: usize = 25;

/// Root configuration for a check run.
///
/// Every section has defaults, so an empty TOML file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub pages: PagesConfig,
    pub team_header: TeamHeaderConfig,
    pub page_header: PageHeaderConfig,
    pub forbidden: ForbiddenConfig,
    pub institutions: InstitutionsConfig,
    pub sections: SectionsConfig,
    pub references: ReferencesConfig,
    pub keywords: KeywordsConfig,
}

/// Page-count ceiling [pages].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagesConfig {
    /// Maximum number of pages (inclusive).
    #[serde(default = "default_max_pages")]
    pub max: usize,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_PAGES,
        }
    }
}

/// Team-number header expected on every page [`team_header`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamHeaderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Regex matched case-insensitively against each page.
    #[serde(default = "default_team_pattern")]
    pub pattern: String,
}

impl Default for TeamHeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: default_team_pattern(),
        }
    }
}

/// "Page X of Y" header coverage [`page_header`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageHeaderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_page_header_pattern")]
    pub pattern: String,

    /// Minimum fraction of pages (0.0-1.0) that must carry the header.
    #[serde(default = "default_min_coverage")]
    pub min_coverage: f64,
}

impl Default for PageHeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: default_page_header_pattern(),
            min_coverage: default_min_coverage(),
        }
    }
}

/// Patterns that must not appear anywhere in the paper [forbidden].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForbiddenConfig {
    #[serde(default = "default_forbidden_patterns")]
    pub patterns: Vec<String>,
}

impl Default for ForbiddenConfig {
    fn default() -> Self {
        Self {
            patterns: default_forbidden_patterns(),
        }
    }
}

/// Institution names that only raise a warning [institutions].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstitutionsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_institution_patterns")]
    pub patterns: Vec<String>,
}

impl Default for InstitutionsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            patterns: default_institution_patterns(),
        }
    }
}

/// A section that must be present, matched by any of its patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: String,

    pub patterns: Vec<String>,

    /// Only search the first N pages. Searches the whole document when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub within_pages: Option<usize>,
}

/// Required sections [sections] with [[sections.required]] entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_required_sections")]
    pub required: Vec<SectionSpec>,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            required: default_required_sections(),
        }
    }
}

/// Recommended references section [references].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferencesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_reference_patterns")]
    pub patterns: Vec<String>,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            patterns: default_reference_patterns(),
        }
    }
}

/// Recommended keywords line near the summary [keywords].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_keywords_pattern")]
    pub pattern: String,

    /// Only search the first N pages.
    #[serde(
        default = "default_keywords_within_pages",
        skip_serializing_if = "Option::is_none"
    )]
    pub within_pages: Option<usize>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: default_keywords_pattern(),
            within_pages: default_keywords_within_pages(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_team_pattern() -> String {
    r"Team\s*#?\s*\d{7}".to_string()
}

fn default_page_header_pattern() -> String {
    r"Page\s+\d+\s+of\s+\d+".to_string()
}

const fn default_min_coverage() -> f64 {
    0.8
}

fn default_forbidden_patterns() -> Vec<String> {
    [
        r"submitted\s+by",
        r"authors?:",
        r"prepared\s+by",
        r"team\s+members?:",
        r"written\s+by",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_institution_patterns() -> Vec<String> {
    [
        r"university",
        r"college",
        r"institute",
        r"school\s+of",
        r"department\s+of",
        r"faculty\s+of",
        r"\bMIT\b",
        r"UCLA",
        r"Stanford",
        r"Harvard",
        r"Berkeley",
        r"Tsinghua",
        r"Peking\s+University",
        r"\bPKU\b",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_required_sections() -> Vec<SectionSpec> {
    vec![SectionSpec {
        name: "Summary".to_string(),
        patterns: vec![
            r"\bSummary\b".to_string(),
            r"\bAbstract\b".to_string(),
            r"\bExecutive\s+Summary\b".to_string(),
        ],
        within_pages: None,
    }]
}

fn default_reference_patterns() -> Vec<String> {
    vec![
        r"\bReferences\b".to_string(),
        r"\bBibliography\b".to_string(),
        r"\bWorks\s+Cited\b".to_string(),
    ]
}

fn default_keywords_pattern() -> String {
    r"\bKeywords?\s*:".to_string()
}

#[allow(clippy::unnecessary_wraps)] // serde default for an Option field
const fn default_keywords_within_pages() -> Option<usize> {
    Some(2)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
