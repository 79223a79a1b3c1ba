//! Per-file descriptive statistics: record count, total/min/max/mean length and N50.

pub mod collector;
pub mod n50;

use serde::Serialize;

pub use collector::{collect_lengths, Collected, LengthCollector, LengthTotals, Measured};
pub use n50::n50;

/// Record format of a file, decided by its first record.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFormat {
    #[serde(rename = "FASTA")]
    Fasta,
    #[serde(rename = "FASTQ")]
    Fastq,
    /// No records were read, so there was nothing to decide from.
    #[serde(rename = "-")]
    Unknown,
}

impl SeqFormat {
    pub fn label(self) -> &'static str {
        match self {
            SeqFormat::Fasta => "FASTA",
            SeqFormat::Fastq => "FASTQ",
            SeqFormat::Unknown => "-",
        }
    }
}

/// Statistics for one input file. Every numeric field is 0 for a file without records.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FileStats {
    #[serde(rename = "file")]
    pub source_name: String,
    pub format: SeqFormat,
    #[serde(rename = "type")]
    pub sequence_type: String,
    #[serde(rename = "num_seqs")]
    pub num_records: u64,
    #[serde(rename = "sum_len")]
    pub total_length: u64,
    #[serde(rename = "min_len")]
    pub min_length: u64,
    #[serde(rename = "avg_len")]
    pub mean_length: f64,
    #[serde(rename = "max_len")]
    pub max_length: u64,
    #[serde(rename = "n50_len")]
    pub n50_length: u64,
}

impl FileStats {
    /// Combine collector totals and an N50 value into the final row.
    pub fn assemble(
        source_name: impl Into<String>,
        sequence_type: impl Into<String>,
        totals: &LengthTotals,
        n50_length: u64,
    ) -> Self {
        let mean_length = if totals.count > 0 {
            round1(totals.sum as f64 / totals.count as f64)
        } else {
            0.0
        };
        FileStats {
            source_name: source_name.into(),
            format: totals.format,
            sequence_type: sequence_type.into(),
            num_records: totals.count,
            total_length: totals.sum,
            min_length: totals.min,
            mean_length,
            max_length: totals.max,
            n50_length,
        }
    }
}

/// Compute N50 from the collected lengths (consuming them) and build the row.
pub fn summarize(
    source_name: impl Into<String>,
    sequence_type: impl Into<String>,
    collected: Collected,
) -> FileStats {
    let Collected { totals, lengths } = collected;
    let n50_length = n50(lengths, totals.sum);
    FileStats::assemble(source_name, sequence_type, &totals, n50_length)
}

/// Round half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rows for every input, in the order the inputs were given.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<FileStats>,
}

impl Report {
    pub fn new(entries: Vec<FileStats>) -> Self {
        Report { entries }
    }

    pub fn entries(&self) -> &[FileStats] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a FileStats;
    type IntoIter = std::slice::Iter<'a, FileStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
