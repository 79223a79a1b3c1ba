//! Rendering of a [`Report`] as an aligned table, TSV or JSON.

use std::io::{self, Write};

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Padding, Style};
use tabled::{Table, Tabled};

use crate::stats::{FileStats, Report};

pub const HEADER: [&str; 9] = [
    "file", "format", "type", "num_seqs", "sum_len", "min_len", "avg_len", "max_len", "n50_len",
];

/// Columns from this index on are numeric and right-aligned.
const FIRST_NUMERIC: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Column-aligned, thousands-grouped numbers.
    Table,
    /// Tab-separated, raw numbers.
    Tsv,
    Json,
}

pub fn render<W: Write>(report: &Report, format: ReportFormat, out: &mut W) -> io::Result<()> {
    match format {
        ReportFormat::Table => write_table(report, out),
        ReportFormat::Tsv => write_tsv(report, out),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "file")]
    file: String,
    #[tabled(rename = "format")]
    format: &'static str,
    #[tabled(rename = "type")]
    seq_type: String,
    #[tabled(rename = "num_seqs")]
    num_seqs: String,
    #[tabled(rename = "sum_len")]
    sum_len: String,
    #[tabled(rename = "min_len")]
    min_len: String,
    #[tabled(rename = "avg_len")]
    avg_len: String,
    #[tabled(rename = "max_len")]
    max_len: String,
    #[tabled(rename = "n50_len")]
    n50_len: String,
}

impl From<&FileStats> for TableRow {
    fn from(stats: &FileStats) -> Self {
        TableRow {
            file: stats.source_name.clone(),
            format: stats.format.label(),
            seq_type: stats.sequence_type.clone(),
            num_seqs: group_thousands(stats.num_records),
            sum_len: group_thousands(stats.total_length),
            min_len: group_thousands(stats.min_length),
            avg_len: group_thousands_f1(stats.mean_length),
            max_len: group_thousands(stats.max_length),
            n50_len: group_thousands(stats.n50_length),
        }
    }
}

/// Borderless table, columns two spaces apart, numbers right-aligned.
pub fn write_table<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    let rows: Vec<TableRow> = report.entries().iter().map(TableRow::from).collect();

    let mut table = Table::new(&rows);
    table
        .with(Style::empty())
        .with(Padding::new(0, 2, 0, 0))
        .modify(Columns::new(FIRST_NUMERIC..), Alignment::right());

    for line in table.to_string().lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

pub fn write_tsv<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HEADER.join("\t"))?;
    for s in report {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.1}\t{}\t{}",
            s.source_name,
            s.format.label(),
            s.sequence_type,
            s.num_records,
            s.total_length,
            s.min_length,
            s.mean_length,
            s.max_length,
            s.n50_length
        )?;
    }
    Ok(())
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Like [`group_thousands`] with one decimal: `1234.5` -> `1,234.5`
pub fn group_thousands_f1(x: f64) -> String {
    let text = format!("{:.1}", x);
    match text.split_once('.') {
        Some((int, frac)) => match int.parse::<u64>() {
            Ok(n) => format!("{}.{}", group_thousands(n), frac),
            Err(_) => text,
        },
        None => text,
    }
}
