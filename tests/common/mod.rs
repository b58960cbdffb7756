#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

mod pdf;

pub use pdf::{lines_content, pdf_with_contents, pdf_with_pages};

/// Creates an `assert_cmd` Command for the paper-guard binary.
#[macro_export]
macro_rules! paper_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("paper-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a local `.paper-guard.toml`.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".paper-guard.toml", content.as_bytes())
    }

    /// Creates a PDF with one line of text per page.
    pub fn create_pdf(&self, relative_path: &str, pages: &[&str]) -> PathBuf {
        self.create_file(relative_path, &pdf_with_pages(pages))
    }

    /// Creates a PDF from raw content streams, one per page.
    pub fn create_pdf_from_contents(&self, relative_path: &str, contents: &[Vec<u8>]) -> PathBuf {
        self.create_file(relative_path, &pdf_with_contents(contents))
    }

    /// Creates a PDF that passes every default rule.
    pub fn create_compliant_pdf(&self, relative_path: &str, page_count: usize) -> PathBuf {
        let texts = compliant_pages(page_count);
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        self.create_pdf(relative_path, &refs)
    }
}

/// Page texts with a team header, page header and every expected section.
pub fn compliant_pages(page_count: usize) -> Vec<String> {
    (1..=page_count)
        .map(|i| {
            let body = match i {
                1 => "Summary Keywords: traffic",
                _ if i == page_count => "References",
                _ => "Model and results",
            };
            format!("Team # 2412345 Page {i} of {page_count} {body}")
        })
        .collect()
}
