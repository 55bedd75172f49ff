use crate::months::MONTHS;
use crate::{CoverPageAnalyzer, RenameError, RenamerConfig, Result};
use chrono::Datelike;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::fmt;
use std::path::Path;

lazy_static! {
    /// Spanish month name followed by a four-digit year, e.g. `NOVIEMBRE 2024`.
    /// The gap may be empty: lopdf joins text runs that were positioned with
    /// `Td` inside one text object without inserting a space.
    static ref RE_COVER_DATE: Regex = Regex::new(&format!(
        r"(?i)\b({})\s*(\d{{4}})\b",
        MONTHS.alternation()
    ))
    .unwrap();
}

// ── ExtractedDate ────────────────────────────────────────────────────────────

/// Publication month of a bulletin, as read from its cover page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtractedDate {
    year: i32,
    month: u32,
    month_name: &'static str,
}

impl ExtractedDate {
    /// Returns `None` unless `month` is 1–12 and `year` has four digits.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1000..=9999).contains(&year) {
            return None;
        }
        let month_name = MONTHS.name_of(month)?;
        Some(Self {
            year,
            month,
            month_name,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Capitalised Spanish month name, e.g. `"Noviembre"`.
    pub fn month_name(&self) -> &'static str {
        self.month_name
    }
}

impl fmt::Display for ExtractedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// ── DateLookup ───────────────────────────────────────────────────────────────

/// Result of scanning a cover page. Not finding a date is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLookup {
    Found(ExtractedDate),
    /// No month-name + year text on the page.
    NotFound,
    /// A month-name + year match whose year falls outside the accepted window.
    Implausible { year: i32, month: u32 },
}

// ── DateExtractor ────────────────────────────────────────────────────────────

/// Finds the publication month on a bulletin's cover page.
///
/// Only the first match on the page is considered; a cover states its own
/// month once, near the top.
///
/// ```
/// use banxico_renamer::{DateExtractor, DateLookup, ExtractedDate};
///
/// let extractor = DateExtractor::new(2000, 2030);
/// assert_eq!(
///     extractor.extract_from_text("Boletín de la Biblioteca\nNOVIEMBRE 2024"),
///     DateLookup::Found(ExtractedDate::new(2024, 11).unwrap()),
/// );
/// assert_eq!(extractor.extract_from_text("sin fecha"), DateLookup::NotFound);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DateExtractor {
    min_year: i32,
    max_year: i32,
}

impl DateExtractor {
    /// Accept years in `min_year..=max_year`.
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    /// Window from `config.min_year` to `max_years_ahead` past the reference
    /// year (the current year unless the config pins one).
    pub fn from_config(config: &RenamerConfig) -> Self {
        let reference = config
            .reference_year
            .unwrap_or_else(|| chrono::Local::now().year());
        Self::new(config.min_year, reference + config.max_years_ahead)
    }

    /// Load `path` and search its first page.
    ///
    /// Every load or decode failure is reported as
    /// [`RenameError::UnreadablePdf`].
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<DateLookup> {
        let path = path.as_ref();
        let analyzer = CoverPageAnalyzer::from_path(path).map_err(into_unreadable)?;
        let text = analyzer.first_page_text()?;

        if text.trim().is_empty() {
            debug!("{}: first page has no text layer", path.display());
            return Ok(DateLookup::NotFound);
        }

        Ok(self.extract_from_text(&text))
    }

    /// Search already-extracted page text.
    pub fn extract_from_text(&self, text: &str) -> DateLookup {
        let Some(caps) = RE_COVER_DATE.captures(text) else {
            return DateLookup::NotFound;
        };

        let Some(month) = MONTHS.number_of(&caps[1]) else {
            return DateLookup::NotFound;
        };
        let Ok(year) = caps[2].parse::<i32>() else {
            return DateLookup::NotFound;
        };

        if year < self.min_year || year > self.max_year {
            debug!("rejecting '{}': outside {}..={}", &caps[0], self.min_year, self.max_year);
            return DateLookup::Implausible { year, month };
        }

        match ExtractedDate::new(year, month) {
            Some(date) => DateLookup::Found(date),
            None => DateLookup::Implausible { year, month },
        }
    }

    /// Every month-name + year occurrence on the page in reading order, with
    /// the matched text. Used by the inspect mode to show what was ignored.
    pub fn candidates(&self, text: &str) -> Vec<String> {
        RE_COVER_DATE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

fn into_unreadable(err: RenameError) -> RenameError {
    match err {
        RenameError::UnreadablePdf(_) => err,
        other => RenameError::UnreadablePdf(other.to_string()),
    }
}
