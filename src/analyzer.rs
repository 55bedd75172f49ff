use crate::validator::PdfValidator;
use crate::{pdf_utils, RenameError, Result};
use lopdf::Document;
use std::path::Path;

// ── CoverPageAnalyzer ─────────────────────────────────────────────────────────

/// Loaded bulletin PDF, with access to its cover (first) page.
///
/// # Creating an analyzer
///
/// ```no_run
/// use banxico_renamer::CoverPageAnalyzer;
///
/// // From a file path
/// let a = CoverPageAnalyzer::from_path("202411_{A112FDD6-F25B-79C5-292F-20CC98B97308}.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("bulletin.pdf").unwrap();
/// let a = CoverPageAnalyzer::from_bytes(&bytes).unwrap();
///
/// println!("{} pages", a.page_count());
/// println!("{}", a.first_page_text().unwrap());
/// ```
pub struct CoverPageAnalyzer {
    document: Document,
}

impl CoverPageAnalyzer {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a PDF from the file system.
    ///
    /// Fails when lopdf cannot parse the file or when the parsed document has
    /// no catalog or no pages.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::checked(Document::load(path)?)
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::checked(Document::load_mem(data)?)
    }

    fn checked(document: Document) -> Result<Self> {
        PdfValidator::new(&document).validate_readable()?;
        Ok(Self { document })
    }

    // ── Cover page ────────────────────────────────────────────────────────────

    /// Extractable text of the first page.
    ///
    /// A page without a text layer (a scanned image) yields an empty or
    /// whitespace-only string, not an error. Text that cannot be decoded at
    /// all, e.g. because the document is encrypted, is reported as
    /// [`RenameError::UnreadablePdf`].
    pub fn first_page_text(&self) -> Result<String> {
        let first = PdfValidator::new(&self.document).first_page_number()?;
        self.document
            .extract_text(&[first])
            .map_err(|e| RenameError::UnreadablePdf(format!("cannot decode first-page text: {e}")))
    }

    /// First-page text on a single line, cut to at most `max_chars` characters.
    pub fn first_page_preview(&self, max_chars: usize) -> Result<String> {
        let text = pdf_utils::normalize_whitespace(&self.first_page_text()?);
        Ok(text.chars().take(max_chars).collect())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// `/Title` from the document information dictionary, when set.
    pub fn title(&self) -> Option<String> {
        pdf_utils::info_entry(&self.document, b"Title")
    }
}
