// src/io/reader.rs
use std::io::{self, BufRead};

use bio::alphabets::Alphabet;
use bio::io::fasta;

use crate::error::{Result, StatError};
use crate::io::alphabet::SeqType;
use crate::io::fastq::{FastqRecord, FastqStreamParser};
use crate::io::input::open_input;

/// Default number of leading bytes of the first sequence used to guess its type.
pub const DEFAULT_GUESS_LEN: usize = 10_000;

/// Knobs the reader needs; the CLI fills them in, nothing is read from globals.
#[derive(Clone, Copy, Debug)]
pub struct ReaderOptions {
    /// Fixed sequence type; `None` guesses it from the first record.
    pub seq_type: Option<SeqType>,
    pub guess_len: usize,
    /// Reject records whose letters fall outside the sequence type's alphabet.
    pub validate: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            seq_type: None,
            guess_len: DEFAULT_GUESS_LEN,
            validate: false,
        }
    }
}

/// One parsed record, FASTA or FASTQ.
#[derive(Debug, Clone)]
pub enum SeqRecord {
    Fasta(fasta::Record),
    Fastq(FastqRecord),
}

impl SeqRecord {
    pub fn id(&self) -> &str {
        match self {
            SeqRecord::Fasta(r) => r.id(),
            SeqRecord::Fastq(r) => &r.id,
        }
    }

    pub fn seq(&self) -> &[u8] {
        match self {
            SeqRecord::Fasta(r) => r.seq(),
            SeqRecord::Fastq(r) => &r.seq,
        }
    }

    /// Quality string; present for every FASTQ record, even a zero-length one.
    pub fn quality(&self) -> Option<&[u8]> {
        match self {
            SeqRecord::Fasta(_) => None,
            SeqRecord::Fastq(r) => Some(&r.qual),
        }
    }
}

enum Records {
    Fasta(fasta::Records<Box<dyn BufRead>>),
    Fastq(FastqStreamParser<Box<dyn BufRead>>),
    Empty,
}

/// Lazy record stream over one input. `None` marks the end of the stream;
/// malformed input and I/O faults come through as `Some(Err(_))`.
pub struct SequenceReader {
    path: String,
    records: Records,
    options: ReaderOptions,
    seq_type: Option<SeqType>,
    validator: Option<Alphabet>,
    failed: bool,
}

impl SequenceReader {
    /// Open `path` (`-` for stdin), decompressing gzip and sniffing FASTA/FASTQ.
    pub fn open(path: &str, options: ReaderOptions) -> Result<Self> {
        let input = open_input(path)?;
        Self::from_reader(path, input, options)
    }

    pub fn from_reader(name: &str, mut input: Box<dyn BufRead>, options: ReaderOptions) -> Result<Self> {
        let first = first_symbol(&mut input).map_err(|source| StatError::Read {
            path: name.to_string(),
            source,
        })?;
        let records = match first {
            None => Records::Empty,
            Some(b'>') => Records::Fasta(fasta::Reader::from_bufread(input).records()),
            Some(b'@') => Records::Fastq(FastqStreamParser::new(name, input)),
            Some(other) => {
                return Err(StatError::UnknownFormat {
                    path: name.to_string(),
                    found: other as char,
                })
            }
        };
        Ok(Self {
            path: name.to_string(),
            records,
            options,
            seq_type: options.seq_type,
            validator: None,
            failed: false,
        })
    }

    /// Sequence type of the stream: the fixed one, the one guessed from the
    /// first record, or `Unlimit` when nothing could be guessed.
    pub fn seq_type(&self) -> SeqType {
        self.seq_type.unwrap_or(SeqType::Unlimit)
    }

    fn next_raw(&mut self) -> Option<Result<SeqRecord>> {
        let path = &self.path;
        match &mut self.records {
            Records::Empty => None,
            Records::Fasta(records) => records.next().map(|r| {
                r.map(SeqRecord::Fasta).map_err(|source| StatError::Read {
                    path: path.clone(),
                    source,
                })
            }),
            Records::Fastq(records) => records.next().map(|r| r.map(SeqRecord::Fastq)),
        }
    }

    fn check(&mut self, record: &SeqRecord) -> Result<()> {
        if self.seq_type.is_none() {
            let guessed = SeqType::guess(record.seq(), self.options.guess_len);
            tracing::debug!("{}: guessed sequence type {}", self.path, guessed.label());
            self.seq_type = Some(guessed);
        }
        if !self.options.validate {
            return Ok(());
        }
        if self.validator.is_none() {
            self.validator = self.seq_type().alphabet();
        }
        match &self.validator {
            Some(alphabet) if !alphabet.is_word(record.seq()) => Err(StatError::InvalidSequence {
                path: self.path.clone(),
                id: record.id().to_string(),
                alphabet: self.seq_type().label().to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl Iterator for SequenceReader {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = match self.next_raw()? {
            Ok(record) => self.check(&record).map(|_| record),
            Err(e) => Err(e),
        };
        self.failed = item.is_err();
        Some(item)
    }
}

/// Skip leading whitespace and peek at the first meaningful byte without consuming it.
fn first_symbol(input: &mut dyn BufRead) -> io::Result<Option<u8>> {
    loop {
        let (skip, found) = {
            let buf = input.fill_buf()?;
            if buf.is_empty() {
                return Ok(None);
            }
            match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                Some(pos) => (pos, Some(buf[pos])),
                None => (buf.len(), None),
            }
        };
        input.consume(skip);
        if found.is_some() {
            return Ok(found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &'static str, options: ReaderOptions) -> Result<SequenceReader> {
        SequenceReader::from_reader("test", Box::new(Cursor::new(text.as_bytes())), options)
    }

    #[test]
    fn test_fasta_records() {
        let mut r = reader(">a\nACGT\nAC\n>b\n\n>c\nA\n", ReaderOptions::default()).unwrap();
        let lens: Vec<usize> = r.by_ref().map(|rec| rec.unwrap().seq().len()).collect();
        assert_eq!(lens, vec![6, 0, 1]);
        assert_eq!(r.seq_type(), SeqType::Dna);
    }

    #[test]
    fn test_fastq_records_carry_quality() {
        let mut r = reader("@r1\nACGU\n+\nIIII\n@r2\nAC\n+\nII\n", ReaderOptions::default()).unwrap();
        let first = r.next().unwrap().unwrap();
        assert_eq!(first.quality(), Some(&b"IIII"[..]));
        assert_eq!(first.seq().len(), 4);
        assert_eq!(r.next().unwrap().unwrap().seq().len(), 2);
        assert!(r.next().is_none());
        assert_eq!(r.seq_type(), SeqType::Rna);
    }

    #[test]
    fn test_leading_blank_lines_and_empty_input() {
        let mut r = reader("\n\n  >a\nAC\n", ReaderOptions::default()).unwrap();
        assert_eq!(r.next().unwrap().unwrap().seq().len(), 2);

        let mut empty = reader("", ReaderOptions::default()).unwrap();
        assert!(empty.next().is_none());
        assert_eq!(empty.seq_type(), SeqType::Unlimit);
    }

    #[test]
    fn test_unknown_format() {
        let err = reader("ACGT\n", ReaderOptions::default()).err().unwrap();
        assert!(matches!(err, StatError::UnknownFormat { found: 'A', .. }));
    }

    #[test]
    fn test_fixed_type_and_validation() {
        let options = ReaderOptions {
            seq_type: Some(SeqType::Dna),
            validate: true,
            ..ReaderOptions::default()
        };
        let mut r = reader(">a\nACGT\n>b\nMKLV\n>c\nA\n", options).unwrap();
        assert!(r.next().unwrap().is_ok());
        let err = r.next().unwrap().err().unwrap();
        assert!(matches!(err, StatError::InvalidSequence { ref id, .. } if id == "b"));
        // stream stops after the first failure
        assert!(r.next().is_none());
    }

    #[test]
    fn test_truncated_fastq_is_an_error() {
        let mut r = reader("@r1\nACGT\n+\n", ReaderOptions::default()).unwrap();
        let item = r.next().unwrap();
        assert!(matches!(item, Err(StatError::Malformed { .. })));
    }

    #[test]
    fn test_zero_length_fastq_record() {
        let r = reader("@r1\nACGT\n+\nIIII\n@r2\n\n+\n\n", ReaderOptions::default()).unwrap();
        let records: Vec<SeqRecord> = r.map(|rec| rec.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id(), "r2");
        assert!(records[1].seq().is_empty());
        assert_eq!(records[1].quality(), Some(&b""[..]));
    }
}
