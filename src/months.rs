//! Spanish month vocabulary shared by the date extractor and the filename
//! generator. Both sides read the same table, so parsing and naming can never
//! disagree on spelling or numbering.

/// Immutable month-name table, indexed by month number minus one.
#[derive(Debug)]
pub struct MonthTable {
    names: [&'static str; 12],
}

/// The twelve Spanish month names as they appear in generated filenames.
pub static MONTHS: MonthTable = MonthTable {
    names: [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ],
};

impl MonthTable {
    /// Month number (1–12) for a month name, ignoring case.
    pub fn number_of(&self, name: &str) -> Option<u32> {
        self.names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| i as u32 + 1)
    }

    /// Capitalised name for a month number, `None` outside 1–12.
    pub fn name_of(&self, month: u32) -> Option<&'static str> {
        month
            .checked_sub(1)
            .and_then(|i| self.names.get(i as usize))
            .copied()
    }

    /// `(number, name)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &'static str)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (i as u32 + 1, *n))
    }

    /// Lowercase `enero|febrero|…` alternation for building regexes.
    pub(crate) fn alternation(&self) -> String {
        self.names
            .iter()
            .map(|n| n.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("|")
    }
}
