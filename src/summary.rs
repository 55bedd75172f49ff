use crate::{FilenameVerdict, RenameError};
use std::fmt;
use std::path::PathBuf;

// ── Outcome ──────────────────────────────────────────────────────────────────

/// Why a file was left alone without being counted as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyRenamed,
    PatternNotRecognized,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::AlreadyRenamed => "already renamed",
            SkipReason::PatternNotRecognized => "pattern not recognized",
        })
    }
}

/// What happened to one file during a run.
#[derive(Debug)]
pub enum Outcome {
    Renamed { to: String },
    /// Dry run: the rename that would have been applied.
    WouldRename { to: String },
    Skipped(SkipReason),
    /// A per-file failure; the file keeps its name and content.
    Errored(RenameError),
}

// ── FileOutcome ──────────────────────────────────────────────────────────────

/// One line of the run report.
#[derive(Debug)]
pub struct FileOutcome {
    /// Path the file had when the run found it.
    pub path: PathBuf,
    pub file_name: String,
    pub verdict: FilenameVerdict,
    pub outcome: Outcome,
}

impl FileOutcome {
    /// New filename, for renamed and would-rename outcomes.
    pub fn new_name(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Renamed { to } | Outcome::WouldRename { to } => Some(to),
            _ => None,
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Renamed { to } => write!(f, "✅ Renamed: {} → {}", self.file_name, to),
            Outcome::WouldRename { to } => {
                write!(f, "🔮 DRY RUN: would rename {} → {}", self.file_name, to)
            }
            Outcome::Skipped(reason) => write!(f, "⏭️  Skipping {} - {}", self.file_name, reason),
            Outcome::Errored(err) => write!(f, "❌ {}: {}", self.file_name, err),
        }
    }
}

// ── RunSummary ───────────────────────────────────────────────────────────────

/// Counts and per-file outcomes of one orchestrator run, in processing order.
#[derive(Debug, Default)]
pub struct RunSummary {
    renamed: usize,
    skipped: usize,
    errored: usize,
    dry_run: bool,
    outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub(crate) fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        match &outcome.outcome {
            Outcome::Renamed { .. } | Outcome::WouldRename { .. } => self.renamed += 1,
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::Errored(_) => self.errored += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Files renamed, or that would have been renamed in a dry run.
    pub fn renamed(&self) -> usize {
        self.renamed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn errored(&self) -> usize {
        self.errored
    }

    /// Number of PDFs the run looked at.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renamed_label = if self.dry_run { "Would rename" } else { "Renamed" };
        write!(
            f,
            "📊 SUMMARY - {} files, {}: {}, Skipped: {}, Errors: {}",
            self.total(),
            renamed_label,
            self.renamed,
            self.skipped,
            self.errored
        )
    }
}
