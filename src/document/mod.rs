mod pdf;

pub use pdf::{DocumentLoader, PdfLoader, load};

use std::path::{Path, PathBuf};

/// Text extracted from a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageText {
    /// Decoded text. May be empty for image-only pages.
    Text(String),
    /// The page exists but its content could not be decoded.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based position in the page tree.
    pub index: usize,
    pub content: PageText,
}

impl Page {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            PageText::Text(text) => Some(text.as_str()),
            PageText::Unreadable(_) => None,
        }
    }

    #[must_use]
    pub const fn is_readable(&self) -> bool {
        matches!(self.content, PageText::Text(_))
    }
}

/// An extracted, paginated input file.
///
/// Page indices are always contiguous starting at 1; constructors assign them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    pages: Vec<Page>,
}

impl Document {
    /// Build a document from per-page extraction results, in page order.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, contents: Vec<PageText>) -> Self {
        let pages = contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| Page {
                index: i + 1,
                content,
            })
            .collect();
        Self {
            path: path.into(),
            pages,
        }
    }

    /// Build a fully readable document from plain page strings.
    #[must_use]
    pub fn from_texts<S: AsRef<str>>(path: impl Into<PathBuf>, texts: &[S]) -> Self {
        let contents = texts
            .iter()
            .map(|t| PageText::Text(t.as_ref().to_string()))
            .collect();
        Self::new(path, contents)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        )
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages in the page tree, including image-only and unreadable pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn unreadable_pages(&self) -> Vec<usize> {
        self.pages
            .iter()
            .filter(|p| !p.is_readable())
            .map(|p| p.index)
            .collect()
    }

    /// The first `limit` pages, or all of them when `limit` is `None`.
    #[must_use]
    pub fn leading_pages(&self, limit: Option<usize>) -> &[Page] {
        let end = limit.map_or(self.pages.len(), |n| n.min(self.pages.len()));
        &self.pages[..end]
    }
}

/// Render page numbers as `1, 2, 5`.
#[must_use]
pub fn format_pages(pages: &[usize]) -> String {
    pages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
