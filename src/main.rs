#![forbid(unsafe_code)]
//! # Zipf Analysis CLI
//!
//! Command-line interface for the `zipf_analysis` crate. It acquires a text
//! from a local file or a URL, runs the word rank/frequency, N-gram, and
//! collocation analyzers, prints the results, and writes report files.
//!
//! ## Example
//! ```bash
//! cargo run --release -- "Moby Dick" --author "Herman Melville" \
//!     --file data/moby_dick.txt --ngram-start 2 --ngram-end 4
//! ```
//!
//! See `--help` for all available options.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;
use zipf_analysis::{
    ExportFormat, Result, Text, ZipfWriter, analyze, print_collocations_result,
    print_ngrams_result,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Name of the text, used in report headers and output file names
    name: String,

    /// Author of the text
    #[arg(long, default_value = "Unknown")]
    author: String,

    /// Local file to read the text from (exactly one of --file/--url)
    #[arg(long)]
    file: Option<PathBuf>,

    /// URL to fetch the text from (exactly one of --file/--url)
    #[arg(long)]
    url: Option<String>,

    /// Smallest N-gram size, inclusive
    #[arg(long, default_value_t = 2)]
    ngram_start: usize,

    /// Largest N-gram size, exclusive (e.g. 4 reports bigrams and trigrams)
    #[arg(long, default_value_t = 4)]
    ngram_end: usize,

    /// Directory for result files
    #[arg(long, default_value = "data/output")]
    output_dir: PathBuf,

    /// Output format for exported result files
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,

    /// Print to console only, write no result files
    #[arg(long, default_value_t = false)]
    no_export: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = Text::new(
        &cli.name,
        Some(cli.author.as_str()),
        cli.file.clone(),
        cli.url.clone(),
    )?;
    let report = analyze(&text, cli.ngram_start, cli.ngram_end)?;

    print_ngrams_result(&report);
    print_collocations_result(&report);

    if !cli.no_export {
        let writer = ZipfWriter::new(&cli.output_dir);
        writer.write_all(&report, cli.export_format)?;
    }
    Ok(())
}
