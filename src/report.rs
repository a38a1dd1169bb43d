use std::fs;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use log::info;
use serde::Serialize;

use crate::collocation::distinct_successor_count;
use crate::error::Result;
use crate::frequency::ZipfDistribution;

/// Combined output of one analysis run over a single text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub text_name: String,
    pub text_author: String,
    /// Requested n-gram range, upper bound exclusive: `ngrams[i]` is the
    /// table for size `n_start + i`.
    pub n_start: usize,
    pub n_end: usize,
    pub distribution: ZipfDistribution,
    pub ngrams: Vec<Vec<(String, u64)>>,
    pub collocations: Vec<(String, Vec<String>)>,
}

impl AnalysisReport {
    /// Text name with spaces replaced by underscores, the stem of all
    /// result file names.
    pub fn file_label(&self) -> String {
        self.text_name.replace(' ', "_")
    }
}

/// File format for exported result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Plain-text reports plus the rank/frequency TSV.
    Txt,
    /// Plain-text reports plus a JSON dump of the full report.
    Json,
}

/// N-gram sections shared by console and file output: one `{n}-GRAMs`
/// header per table, then `{gram}: {count}` lines for counts above 1.
/// Labels are the actual n values from the requested range.
fn ngram_sections(report: &AnalysisReport) -> String {
    let mut out = String::new();
    for (offset, table) in report.ngrams.iter().enumerate() {
        let n = report.n_start + offset;
        out.push_str(&format!("\n{n}-GRAMs\n---------\n"));
        for (gram, count) in table {
            if *count > 1 {
                out.push_str(&format!("{gram}: {count}\n"));
            }
        }
    }
    out
}

fn collocation_lines(report: &AnalysisReport) -> String {
    let mut out = String::new();
    for (word, successors) in &report.collocations {
        out.push_str(&format!(
            "{word} occurs in {} collocations\n",
            distinct_successor_count(successors)
        ));
    }
    out
}

/// Prints the n-gram analysis to the console.
pub fn print_ngrams_result(report: &AnalysisReport) {
    println!("\n\n- - - - - N-GRAMS ANALYSIS - - - - -");
    print!("{}", ngram_sections(report));
}

/// Prints the collocations analysis to the console, one
/// `{word} occurs in {n} collocations` line per distinct word, where `n`
/// counts distinct successors.
pub fn print_collocations_result(report: &AnalysisReport) {
    println!("\n\n- - - - - COLLOCATIONS ANALYSIS - - - - -\n");
    print!("{}", collocation_lines(report));
}

/// Writes analysis result files into a fixed output directory.
///
/// The directory is created if absent. Each file is fully composed in
/// memory and written in one go, overwriting any previous run's output, so
/// a failed run never leaves a half-written file behind.
pub struct ZipfWriter {
    output_dir: PathBuf,
}

impl ZipfWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `{label}_n_grams_result.txt`.
    pub fn write_n_grams_result(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let mut to_file = format!(
            "N-grams analysis for \"{}\" by {}\n",
            report.text_name, report.text_author
        );
        to_file.push_str(&header_timestamp());
        to_file.push_str(&ngram_sections(report));
        to_file.push_str("\n\n");

        self.write(&format!("{}_n_grams_result.txt", report.file_label()), to_file.as_bytes())
    }

    /// Writes `{label}_collocations_result.txt`.
    pub fn write_collocations_result(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let mut to_file = format!(
            "Collocations analysis for \"{}\" by {}\n",
            report.text_name, report.text_author
        );
        to_file.push_str(&header_timestamp());
        to_file.push('\n');
        to_file.push_str(&collocation_lines(report));
        to_file.push_str("\n\n");

        self.write(
            &format!("{}_collocations_result.txt", report.file_label()),
            to_file.as_bytes(),
        )
    }

    /// Writes `{label}_rank_frequency.tsv`: one `{rank}\t{frequency}` row
    /// per rank, headerless, ready for plotting.
    pub fn write_rank_frequency_result(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(Vec::new());
        for (rank, frequency) in report
            .distribution
            .ranks
            .iter()
            .zip(&report.distribution.frequencies)
        {
            wtr.write_record([rank.to_string(), frequency.to_string()])?;
        }
        let data = wtr
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()))?;

        self.write(&format!("{}_rank_frequency.tsv", report.file_label()), &data)
    }

    /// Writes `{label}_analysis.json`, the full report as JSON.
    pub fn write_json_result(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let data = serde_json::to_string_pretty(report)?;
        self.write(&format!("{}_analysis.json", report.file_label()), data.as_bytes())
    }

    /// Writes all result files for the requested format, returning the
    /// paths written.
    pub fn write_all(&self, report: &AnalysisReport, format: ExportFormat) -> Result<Vec<PathBuf>> {
        let mut written = vec![
            self.write_n_grams_result(report)?,
            self.write_collocations_result(report)?,
            self.write_rank_frequency_result(report)?,
        ];
        if format == ExportFormat::Json {
            written.push(self.write_json_result(report)?);
        }
        for path in &written {
            info!("wrote {}", path.display());
        }
        Ok(written)
    }

    fn write(&self, file_name: &str, data: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        fs::write(&path, data)?;
        Ok(path)
    }
}

fn header_timestamp() -> String {
    let local: DateTime<Local> = Local::now();
    format!("Generated {}\n", local.format("%Y-%m-%d %H:%M:%S"))
}
