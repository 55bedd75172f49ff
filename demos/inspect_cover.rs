//! Prints what the renamer would call a single bulletin PDF.
//!
//! Usage:
//!   cargo run --example inspect_cover -- "202411_{A112FDD6-F25B-79C5-292F-20CC98B97308}.pdf"

use banxico_renamer::{
    canonical_filename, classify, DateExtractor, DateLookup, RenamerConfig,
};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <bulletin.pdf>", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!("File    : {file_name}");
    println!("Verdict : {}", classify(&file_name));

    let extractor = DateExtractor::from_config(&RenamerConfig::default());
    match extractor.extract(path) {
        Ok(DateLookup::Found(date)) => {
            println!("Date    : {date}");
            println!("New name: {}", canonical_filename(date));
        }
        Ok(DateLookup::NotFound) => println!("No month/year found on the cover page"),
        Ok(DateLookup::Implausible { year, month }) => {
            println!("Cover date looks garbled: month {month}, year {year}")
        }
        Err(e) => {
            eprintln!("Cannot read PDF: {e}");
            process::exit(1);
        }
    }
}
