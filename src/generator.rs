use crate::{ExtractedDate, RenameError, Result, DEFAULT_LABEL};

/// Builds canonical bulletin filenames:
/// `YYYY-MM_<label>_<MonthName>_YYYY.pdf`.
#[derive(Debug, Clone)]
pub struct FilenameGenerator {
    label: String,
}

impl Default for FilenameGenerator {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl FilenameGenerator {
    /// Use a different document-type label.
    ///
    /// The label must be non-empty ASCII letters, digits, `_` or `-`, so every
    /// generated name stays filesystem-safe.
    pub fn with_label(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let safe = !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !safe {
            return Err(RenameError::InvalidLabel(label));
        }
        Ok(Self { label })
    }

    /// Canonical filename for `date`. Total: every `ExtractedDate` has a
    /// valid month and a four-digit year.
    pub fn generate(&self, date: ExtractedDate) -> String {
        format!(
            "{:04}-{:02}_{}_{}_{:04}.pdf",
            date.year(),
            date.month(),
            self.label,
            date.month_name(),
            date.year()
        )
    }
}

/// [`FilenameGenerator::generate`] with the default label.
///
/// ```
/// use banxico_renamer::{canonical_filename, ExtractedDate};
///
/// let date = ExtractedDate::new(2024, 11).unwrap();
/// assert_eq!(
///     canonical_filename(date),
///     "2024-11_Boletin_Biblioteca_Banxico_Noviembre_2024.pdf"
/// );
/// ```
pub fn canonical_filename(date: ExtractedDate) -> String {
    FilenameGenerator::default().generate(date)
}
