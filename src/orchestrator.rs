use crate::{
    classify, DateExtractor, DateLookup, FileOutcome, FilenameGenerator, FilenameVerdict, Outcome,
    RenameError, RenamerConfig, Result, RunSummary, SkipReason, MONTHS,
};
use chrono::{DateTime, Local};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

// ── SourceFile ───────────────────────────────────────────────────────────────

/// A PDF found in the target directory at the start of a run.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Size in bytes; only reported in logs.
    pub size: u64,
    /// When the directory listing saw the file; logged at debug level.
    pub discovered_at: DateTime<Local>,
}

// ── RenameOrchestrator ───────────────────────────────────────────────────────

/// Walks a bulletin directory and renames every opaque-named PDF after the
/// date printed on its cover.
///
/// Files are processed one at a time in lexical filename order. Per-file
/// problems end up in the [`RunSummary`]; only a missing directory (or a
/// directory that cannot be listed) aborts the run.
pub struct RenameOrchestrator {
    config: RenamerConfig,
    extractor: DateExtractor,
    generator: FilenameGenerator,
}

impl RenameOrchestrator {
    /// Fails with [`RenameError::InvalidLabel`] if `config.label` would not
    /// produce filesystem-safe names.
    pub fn new(config: RenamerConfig) -> Result<Self> {
        let generator = FilenameGenerator::with_label(config.label.clone())?;
        let extractor = DateExtractor::from_config(&config);
        Ok(Self {
            config,
            extractor,
            generator,
        })
    }

    pub fn config(&self) -> &RenamerConfig {
        &self.config
    }

    /// PDFs directly inside `dir`, sorted by filename. Other entries are
    /// ignored.
    pub fn discover<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<SourceFile>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(RenameError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            let is_pdf = path
                .extension()
                .map(|e| e.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);
            if !is_pdf {
                continue;
            }

            let metadata = match fs::metadata(&path) {
                Ok(m) if m.is_file() => m,
                _ => continue,
            };

            let Ok(file_name) = entry.file_name().into_string() else {
                debug!("ignoring non UTF-8 filename {}", path.display());
                continue;
            };

            files.push(SourceFile {
                path,
                file_name,
                size: metadata.len(),
                discovered_at: Local::now(),
            });
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }

    /// Process every PDF in `dir` and return the run report.
    pub fn run<P: AsRef<Path>>(&self, dir: P) -> Result<RunSummary> {
        let dir = dir.as_ref();
        let files = self.discover(dir)?;

        info!("Found {} PDF files to process in {}", files.len(), dir.display());
        if self.config.dry_run {
            info!("🔮 DRY RUN MODE - no files will be renamed");
        }

        let mut summary = RunSummary::new(self.config.dry_run);
        // Destination names taken during this run; in a dry run nothing is
        // renamed, so the directory alone cannot reveal these collisions.
        let mut claimed = HashSet::new();

        for file in files {
            let outcome = self.process(dir, file, &mut claimed);
            log_outcome(&outcome);
            summary.record(outcome);
        }

        info!("{summary}");
        Ok(summary)
    }

    fn process(&self, dir: &Path, file: SourceFile, claimed: &mut HashSet<String>) -> FileOutcome {
        let verdict = classify(&file.file_name);

        let outcome = match verdict {
            FilenameVerdict::AlreadyCanonical => Outcome::Skipped(SkipReason::AlreadyRenamed),
            FilenameVerdict::Unrecognized => Outcome::Skipped(SkipReason::PatternNotRecognized),
            FilenameVerdict::NeedsRename => {
                info!("🔍 Processing: {} ({} bytes)", file.file_name, file.size);
                debug!(
                    "{}: discovered at {}",
                    file.file_name,
                    file.discovered_at.format("%Y-%m-%d %H:%M:%S")
                );
                self.rename_one(dir, &file, claimed)
            }
        };

        FileOutcome {
            path: file.path,
            file_name: file.file_name,
            verdict,
            outcome,
        }
    }

    fn rename_one(&self, dir: &Path, file: &SourceFile, claimed: &mut HashSet<String>) -> Outcome {
        let date = match self.extractor.extract(&file.path) {
            Ok(DateLookup::Found(date)) => date,
            Ok(DateLookup::NotFound) => return Outcome::Errored(RenameError::DateNotFound),
            Ok(DateLookup::Implausible { year, month }) => {
                return Outcome::Errored(RenameError::ImplausibleDate {
                    year,
                    month: MONTHS.name_of(month).unwrap_or("?").to_string(),
                })
            }
            Err(e) => return Outcome::Errored(e),
        };
        debug!("{}: cover date {date}", file.file_name);

        let new_name = self.generator.generate(date);
        let dest = dir.join(&new_name);

        // symlink_metadata so that a dangling link also counts as taken.
        if claimed.contains(&new_name) || fs::symlink_metadata(&dest).is_ok() {
            return Outcome::Errored(RenameError::DestinationCollision(new_name));
        }

        if self.config.dry_run {
            claimed.insert(new_name.clone());
            return Outcome::WouldRename { to: new_name };
        }

        match fs::rename(&file.path, &dest) {
            Ok(()) => {
                claimed.insert(new_name.clone());
                Outcome::Renamed { to: new_name }
            }
            Err(source) => Outcome::Errored(RenameError::RenameFailed {
                to: new_name,
                source,
            }),
        }
    }
}

fn log_outcome(outcome: &FileOutcome) {
    match &outcome.outcome {
        Outcome::Errored(RenameError::ImplausibleDate { .. }) => {
            warn!("{outcome} (garbled date text)")
        }
        Outcome::Errored(RenameError::DestinationCollision(_)) => warn!("{outcome}"),
        Outcome::Errored(_) => error!("{outcome}"),
        _ => info!("{outcome}"),
    }
}
