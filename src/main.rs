//! CLI that renames downloaded Banxico library bulletins after the month and
//! year printed on their cover page.

use banxico_renamer::{
    classify, CoverPageAnalyzer, DateExtractor, DateLookup, RenameOrchestrator, RenamerConfig,
    Result, RunSummary, DEFAULT_LIBRARY_DIR,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

const PREVIEW_CHARS: usize = 300;

#[derive(Parser, Debug)]
#[command(
    name = "banxico-renamer",
    version,
    about = "Rename Banxico library bulletin PDFs using the date on their cover page"
)]
struct Cli {
    /// Directory holding the downloaded bulletins
    #[arg(env = "BANXICO_LIBRARY_DIR", default_value = DEFAULT_LIBRARY_DIR)]
    directory: PathBuf,

    /// Show what would be renamed without touching any file
    #[arg(long)]
    dry_run: bool,

    /// Print each PDF's cover-page text and detected date instead of renaming
    #[arg(long, conflicts_with = "dry_run")]
    inspect: bool,

    /// Earliest publication year accepted from a cover page
    #[arg(long, default_value_t = 2000)]
    min_year: i32,

    /// How many years past the current one a cover page may claim
    #[arg(long, default_value_t = 2)]
    max_years_ahead: i32,

    /// Log every step, including per-file debug detail
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RenamerConfig {
        dry_run: cli.dry_run,
        min_year: cli.min_year,
        max_years_ahead: cli.max_years_ahead,
        ..Default::default()
    };

    let result = if cli.inspect {
        run_inspect(&cli.directory, config)
    } else {
        run_rename(&cli.directory, config)
    };

    if let Err(e) = result {
        eprintln!("\n❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();
}

fn run_rename(directory: &Path, config: RenamerConfig) -> Result<()> {
    println!("📚 Banxico Library PDF Renamer");
    println!("{}", "=".repeat(50));
    println!("Target directory: {}", directory.display());
    if config.dry_run {
        println!("🔮 DRY RUN MODE - No files will be renamed");
    }
    println!();

    let summary = RenameOrchestrator::new(config)?.run(directory)?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("{}", "─".repeat(50));
    println!("{summary}");
    for outcome in summary.outcomes().iter().filter(|o| o.new_name().is_some()) {
        println!("   {outcome}");
    }
}

/// Cover-page diagnostics: what the extractor sees and what it would pick.
fn run_inspect(directory: &Path, config: RenamerConfig) -> Result<()> {
    let orchestrator = RenameOrchestrator::new(config)?;
    let extractor = DateExtractor::from_config(orchestrator.config());
    let files = orchestrator.discover(directory)?;

    println!("🔍 Inspecting {} PDF file(s) in {}", files.len(), directory.display());

    for file in files {
        println!("\n{}", "=".repeat(60));
        println!("📄 {}", file.file_name);
        println!("   Verdict : {}", classify(&file.file_name));
        println!("   Size    : {} bytes", file.size);

        let analyzer = match CoverPageAnalyzer::from_path(&file.path) {
            Ok(a) => a,
            Err(e) => {
                println!("   ❌ {e}");
                continue;
            }
        };

        println!("   Pages   : {}", analyzer.page_count());
        if let Some(title) = analyzer.title() {
            println!("   Title   : {title}");
        }

        let text = match analyzer.first_page_text() {
            Ok(t) => t,
            Err(e) => {
                println!("   ❌ {e}");
                continue;
            }
        };

        if let Ok(preview) = analyzer.first_page_preview(PREVIEW_CHARS) {
            println!("   Cover   : {preview}");
        }

        let candidates = extractor.candidates(&text);
        if !candidates.is_empty() {
            println!("   Matches : {}", candidates.join(" | "));
        }

        match extractor.extract_from_text(&text) {
            DateLookup::Found(date) => println!("   📅 Date : {date} ({})", date.month_name()),
            DateLookup::NotFound => println!("   ⚠️  No date found"),
            DateLookup::Implausible { year, month } => {
                println!("   ⚠️  Implausible date: month {month}, year {year}")
            }
        }
    }

    Ok(())
}
