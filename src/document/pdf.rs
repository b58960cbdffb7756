use std::collections::BTreeMap;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Encoding, Object, ObjectId};

use crate::error::{PaperGuardError, Result};

use super::{Document, PageText};

/// `TJ` adjustments below this (thousandths of an em) read as a word gap.
const WORD_GAP: f32 = -100.0;

/// Trait for turning a file into a [`Document`] (for testability).
pub trait DocumentLoader {
    /// Load and paginate the document at `path`.
    ///
    /// # Errors
    /// Returns `UnreadableDocument` if the file is missing, is not a PDF,
    /// cannot be parsed, or has no pages.
    fn load(&self, path: &Path) -> Result<Document>;
}

/// Loads PDFs with `lopdf`, extracting text page by page.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfLoader;

impl PdfLoader {
    /// Parse an in-memory PDF. `path` is only used for naming and error messages.
    ///
    /// # Errors
    /// Returns `UnreadableDocument` if the bytes are not a parseable PDF with at least one page.
    pub fn load_bytes(path: &Path, bytes: &[u8]) -> Result<Document> {
        let pdf = lopdf::Document::load_mem(bytes)
            .map_err(|e| PaperGuardError::unreadable(path, format!("failed to parse PDF: {e}")))?;
        Self::extract(path, &pdf)
    }

    fn extract(path: &Path, pdf: &lopdf::Document) -> Result<Document> {
        // BTreeMap keyed by page number, so iteration is already in page order.
        let pages = pdf.get_pages();
        if pages.is_empty() {
            return Err(PaperGuardError::unreadable(path, "document has no pages"));
        }

        let contents = pages
            .values()
            .map(|&page_id| match page_text(pdf, page_id) {
                Ok(text) => PageText::Text(text),
                Err(reason) => PageText::Unreadable(reason),
            })
            .collect();

        Ok(Document::new(path, contents))
    }
}

impl DocumentLoader for PdfLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        if !path.exists() {
            return Err(PaperGuardError::unreadable(path, "file not found"));
        }

        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(PaperGuardError::unreadable(path, "file is not a PDF"));
        }

        let bytes =
            std::fs::read(path).map_err(|e| PaperGuardError::unreadable(path, e.to_string()))?;
        Self::load_bytes(path, &bytes)
    }
}

/// Load a PDF from disk with the default loader.
///
/// # Errors
/// See [`DocumentLoader::load`].
pub fn load(path: &Path) -> Result<Document> {
    PdfLoader.load(path)
}

/// Decode the text of one page, or the reason it cannot be decoded.
///
/// Any string shown in a font without a usable encoding makes the whole page
/// unreadable, so rules never pass on text that was silently dropped.
fn page_text(pdf: &lopdf::Document, page_id: ObjectId) -> std::result::Result<String, String> {
    let encodings: BTreeMap<Vec<u8>, Option<Encoding<'_>>> = pdf
        .get_page_fonts(page_id)
        .map_err(|e| format!("cannot read page resources: {e}"))?
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding(pdf).ok()))
        .collect();

    let bytes = pdf
        .get_page_content(page_id)
        .map_err(|e| format!("cannot read content stream: {e}"))?;
    let content =
        Content::decode(&bytes).map_err(|e| format!("cannot decode content stream: {e}"))?;

    let mut collector = TextCollector::new(&encodings);
    for op in &content.operations {
        collector.apply(op)?;
    }
    Ok(collector.finish())
}

/// Accumulates shown strings, turning text positioning into line and word breaks.
struct TextCollector<'e, 'a> {
    encodings: &'e BTreeMap<Vec<u8>, Option<Encoding<'a>>>,
    font: Option<Vec<u8>>,
    text: String,
}

impl<'e, 'a> TextCollector<'e, 'a> {
    const fn new(encodings: &'e BTreeMap<Vec<u8>, Option<Encoding<'a>>>) -> Self {
        Self {
            encodings,
            font: None,
            text: String::new(),
        }
    }

    fn apply(&mut self, op: &Operation) -> std::result::Result<(), String> {
        match op.operator.as_str() {
            "BT" | "ET" | "T*" | "Tm" => self.break_line(),
            "Td" | "TD" => {
                let ty = op.operands.get(1).and_then(|o| o.as_float().ok());
                if ty.is_some_and(|ty| ty.abs() > f32::EPSILON) {
                    self.break_line();
                } else {
                    self.break_word();
                }
            }
            "Tf" => {
                self.font = op
                    .operands
                    .first()
                    .and_then(|o| o.as_name().ok())
                    .map(<[u8]>::to_vec);
            }
            "Tj" => self.show(op.operands.first())?,
            // T* then Tj
            "'" => {
                self.break_line();
                self.show(op.operands.first())?;
            }
            // aw ac (string) "
            "\"" => {
                self.break_line();
                self.show(op.operands.get(2))?;
            }
            "TJ" => {
                if let Some(Object::Array(items)) = op.operands.first() {
                    for item in items {
                        if matches!(item, Object::String(..)) {
                            self.show(Some(item))?;
                        } else if item.as_float().is_ok_and(|gap| gap < WORD_GAP) {
                            self.break_word();
                        }
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn show(&mut self, operand: Option<&Object>) -> std::result::Result<(), String> {
        let Some(Object::String(bytes, _)) = operand else {
            return Ok(());
        };
        if bytes.is_empty() {
            return Ok(());
        }

        let font = self
            .font
            .as_deref()
            .ok_or_else(|| "text shown before a font was selected".to_string())?;
        let name = String::from_utf8_lossy(font);
        let encoding = match self.encodings.get(font) {
            Some(Some(encoding)) => encoding,
            Some(None) => return Err(format!("font /{name} has no usable encoding")),
            None => return Err(format!("font /{name} is not defined")),
        };

        let decoded = lopdf::Document::decode_text(encoding, bytes)
            .map_err(|e| format!("cannot decode text in font /{name}: {e}"))?;
        self.text.push_str(&decoded);
        Ok(())
    }

    fn break_line(&mut self) {
        let kept = self.text.trim_end_matches(' ').len();
        self.text.truncate(kept);
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    fn break_word(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
    }

    fn finish(mut self) -> String {
        self.break_line();
        self.text
    }
}

#[cfg(test)]
#[path = "pdf_tests.rs"]
mod tests;
