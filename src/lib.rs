//! # banxico-renamer
//!
//! Renames Banco de México library bulletins ("Boletín de la Biblioteca") from
//! their opaque download names into date-prefixed, human-readable filenames.
//!
//! ## What this crate does
//!
//! 1. **Classify** — decides from the filename alone whether a file is already
//!    renamed, carries an opaque GUID name, or is something else entirely.
//! 2. **Extract** — reads the first page's text layer and finds the Spanish
//!    month name and year the bulletin was published in.
//! 3. **Generate** — builds the canonical name, e.g.
//!    `2024-11_Boletin_Biblioteca_Banxico_Noviembre_2024.pdf`.
//! 4. **Rename** — applies the new name inside the same directory, never
//!    overwriting an existing file, and reports what happened per file.
//!
//! Runs are idempotent: a renamed file starts with `YYYY-MM` and is skipped on
//! every later run.
//!
//! ## Quick example
//!
//! ```no_run
//! use banxico_renamer::{RenameOrchestrator, RenamerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenamerConfig { dry_run: true, ..Default::default() };
//! let summary = RenameOrchestrator::new(config)?.run("reports and files/banxico_library_updates")?;
//!
//! for outcome in summary.outcomes() {
//!     println!("{outcome}");
//! }
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod analyzer;
mod classifier;
mod extractor;
mod generator;
mod months;
mod orchestrator;
mod pdf_utils;
mod summary;
mod validator;

pub use analyzer::CoverPageAnalyzer;
pub use classifier::{classify, FilenameVerdict};
pub use extractor::{DateExtractor, DateLookup, ExtractedDate};
pub use generator::{canonical_filename, FilenameGenerator};
pub use months::{MonthTable, MONTHS};
pub use orchestrator::{RenameOrchestrator, SourceFile};
pub use summary::{FileOutcome, Outcome, RunSummary, SkipReason};

/// Directory the download job writes library bulletins into.
pub const DEFAULT_LIBRARY_DIR: &str = "reports and files/banxico_library_updates";

/// Document-type label placed between the date prefix and the month name.
pub const DEFAULT_LABEL: &str = "Boletin_Biblioteca_Banxico";

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`RenameOrchestrator`] and [`DateExtractor`].
#[derive(Debug, Clone)]
pub struct RenamerConfig {
    /// When `true`, files are classified and their dates extracted, but no
    /// rename is performed. Outcomes are reported as "would rename".
    pub dry_run: bool,

    /// Earliest year accepted from a cover page. Anything older is reported as
    /// an implausible date.
    pub min_year: i32,

    /// How many years past [`reference_year`](Self::reference_year) a cover
    /// page may claim before it is treated as garbled.
    pub max_years_ahead: i32,

    /// Year the plausibility window is anchored to. `None` means the current
    /// local calendar year.
    pub reference_year: Option<i32>,

    /// Document-type label used by the [`FilenameGenerator`].
    pub label: String,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            min_year: 2000,
            max_years_ahead: 2,
            reference_year: None,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
///
/// Only [`RenameError::DirectoryNotFound`] and directory-level I/O failures
/// abort a run; everything else is recorded per file in the [`RunSummary`].
#[derive(Error, Debug)]
pub enum RenameError {
    /// A filesystem I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be opened or parsed as a PDF, has no pages, or its
    /// text cannot be decoded (e.g. encrypted without permission).
    #[error("unreadable PDF: {0}")]
    UnreadablePdf(String),

    /// No month-name + year text on the first page.
    #[error("date not found in document")]
    DateNotFound,

    /// A date-shaped match outside the accepted year window.
    #[error("implausible date on cover page: {month} {year}")]
    ImplausibleDate { year: i32, month: String },

    /// The computed destination name is already taken in the directory.
    #[error("destination already exists: {0}")]
    DestinationCollision(String),

    /// The filesystem refused the rename; the source file is untouched.
    #[error("rename to {to} failed: {source}")]
    RenameFailed {
        to: String,
        #[source]
        source: std::io::Error,
    },

    /// The target directory does not exist or is not a directory.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A document label that would not produce a filesystem-safe name.
    #[error("invalid document label: {0:?}")]
    InvalidLabel(String),

    /// The underlying lopdf parser returned an error.
    #[error("PDF parse error: {0}")]
    Parse(#[from] lopdf::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, RenameError>;
