use super::SeqFormat;
use crate::io::reader::SeqRecord;

/// Anything the collector can measure: a length and whether quality data came with it.
pub trait Measured {
    fn seq_len(&self) -> u64;
    fn has_quality(&self) -> bool;
}

impl Measured for SeqRecord {
    fn seq_len(&self) -> u64 {
        self.seq().len() as u64
    }

    fn has_quality(&self) -> bool {
        self.quality().is_some()
    }
}

/// Running totals for one file. `min` is already normalised to 0 for empty files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthTotals {
    pub count: u64,
    pub sum: u64,
    pub min: u64,
    pub max: u64,
    pub format: SeqFormat,
}

/// Collector output: the totals plus every length seen, in arrival order.
#[derive(Debug, Clone)]
pub struct Collected {
    pub totals: LengthTotals,
    pub lengths: Vec<u64>,
}

/// Accumulates per-record lengths for a single file.
#[derive(Debug)]
pub struct LengthCollector {
    count: u64,
    sum: u64,
    min: u64,
    max: u64,
    lengths: Vec<u64>,
    format: Option<SeqFormat>,
}

impl Default for LengthCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl LengthCollector {
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: u64::MAX,
            max: 0,
            lengths: Vec::new(),
            format: None,
        }
    }

    pub fn push(&mut self, len: u64, has_quality: bool) {
        if self.format.is_none() {
            self.format = Some(if has_quality {
                SeqFormat::Fastq
            } else {
                SeqFormat::Fasta
            });
        }
        self.count += 1;
        self.sum += len;
        self.min = self.min.min(len);
        self.max = self.max.max(len);
        self.lengths.push(len);
    }

    pub fn finish(self) -> Collected {
        let min = if self.count == 0 { 0 } else { self.min };
        Collected {
            totals: LengthTotals {
                count: self.count,
                sum: self.sum,
                min,
                max: self.max,
                format: self.format.unwrap_or(SeqFormat::Unknown),
            },
            lengths: self.lengths,
        }
    }
}

/// Drain a record stream into a fresh collector.
/// The first error stops the scan and the partial totals are dropped.
pub fn collect_lengths<I, R, E>(records: I) -> Result<Collected, E>
where
    I: IntoIterator<Item = Result<R, E>>,
    R: Measured,
{
    let mut collector = LengthCollector::new();
    for record in records {
        let record = record?;
        collector.push(record.seq_len(), record.has_quality());
    }
    Ok(collector.finish())
}
