use crate::{RenameError, Result};
use lopdf::Document;

// ── PdfValidator ──────────────────────────────────────────────────────────────
//
// This is an internal type.  Callers use CoverPageAnalyzer, which delegates here.

pub(crate) struct PdfValidator<'a> {
    document: &'a Document,
}

impl<'a> PdfValidator<'a> {
    pub(crate) fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Returns `Ok(())` when the parsed document has everything needed to read
    /// a cover page: a catalog, at least one page, and a trailer.
    ///
    /// lopdf happily loads a document whose page tree is empty, so this is
    /// where a zero-page bulletin turns into [`RenameError::UnreadablePdf`].
    pub(crate) fn validate_readable(&self) -> Result<()> {
        self.document
            .catalog()
            .map_err(|e| RenameError::UnreadablePdf(format!("missing or invalid catalog: {e}")))?;

        if self.document.get_pages().is_empty() {
            return Err(RenameError::UnreadablePdf("document has no pages".into()));
        }

        if self.document.trailer.is_empty() {
            return Err(RenameError::UnreadablePdf("missing trailer dictionary".into()));
        }

        Ok(())
    }

    /// Page number of the first page in the page tree.
    pub(crate) fn first_page_number(&self) -> Result<u32> {
        self.document
            .get_pages()
            .keys()
            .next()
            .copied()
            .ok_or_else(|| RenameError::UnreadablePdf("document has no pages".into()))
    }
}
