use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaperGuardError {
    /// The input could not be turned into a paginated document. Fatal for a check run.
    #[error("Unreadable document {}: {reason}", path.display())]
    UnreadableDocument { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PaperGuardError {
    /// Short category name used as the error heading on stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnreadableDocument { .. } => "Document",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnreadableDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaperGuardError>;

/// A rule could not reach a verdict for part of the document.
///
/// Never propagated out of a check run: the checker downgrades it to a WARN result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleEvaluationWarning {
    #[error("could not read text on page(s) {}", crate::document::format_pages(pages))]
    UnreadablePages { pages: Vec<usize> },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
