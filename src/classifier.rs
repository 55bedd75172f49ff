use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// `YYYY-MM` at the very start of the name. Prefix-only so that any file
    /// renamed earlier, even under an older template, is never reprocessed.
    static ref RE_CANONICAL_PREFIX: Regex = Regex::new(r"^\d{4}-\d{2}").unwrap();

    /// `YYYYMM_` token the download job prepends to opaque names.
    static ref RE_DOWNLOAD_PREFIX: Regex = Regex::new(r"^\d{6}_").unwrap();

    static ref RE_PDF_EXTENSION: Regex = Regex::new(r"(?i)\.pdf$").unwrap();

    /// GUID-shaped core, bare or wrapped in a balanced pair of braces.
    static ref RE_OPAQUE_ID: Regex =
        Regex::new(r"^(?:\{[0-9A-Fa-f-]+\}|[0-9A-Fa-f-]+)$").unwrap();
}

// ── FilenameVerdict ──────────────────────────────────────────────────────────

/// What the classifier decided about a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilenameVerdict {
    /// Starts with `YYYY-MM`; left alone.
    AlreadyCanonical,
    /// An opaque identifier name that should be renamed from the cover page.
    NeedsRename,
    /// Neither of the above; never touched.
    Unrecognized,
}

impl fmt::Display for FilenameVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilenameVerdict::AlreadyCanonical => "already canonical",
            FilenameVerdict::NeedsRename => "needs rename",
            FilenameVerdict::Unrecognized => "unrecognized",
        })
    }
}

// ── classify ─────────────────────────────────────────────────────────────────

/// Classify a bare filename (no directory part).
///
/// ```
/// use banxico_renamer::{classify, FilenameVerdict};
///
/// assert_eq!(
///     classify("202411_{A112FDD6-F25B-79C5-292F-20CC98B97308}.pdf"),
///     FilenameVerdict::NeedsRename,
/// );
/// assert_eq!(
///     classify("2024-08_Boletin_Biblioteca_Banxico_Agosto_2024.pdf"),
///     FilenameVerdict::AlreadyCanonical,
/// );
/// assert_eq!(classify("minutes.pdf"), FilenameVerdict::Unrecognized);
/// ```
pub fn classify(filename: &str) -> FilenameVerdict {
    if RE_CANONICAL_PREFIX.is_match(filename) {
        return FilenameVerdict::AlreadyCanonical;
    }

    let core = RE_DOWNLOAD_PREFIX.replace(filename, "");
    let core = RE_PDF_EXTENSION.replace(&core, "");

    // Hex-only words such as "cafe" or "decade" are not identifiers.
    let has_decimal_digit = core.chars().any(|c| c.is_ascii_digit());
    if has_decimal_digit && RE_OPAQUE_ID.is_match(&core) {
        FilenameVerdict::NeedsRename
    } else {
        FilenameVerdict::Unrecognized
    }
}
