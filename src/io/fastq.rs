// src/io/fastq.rs
use std::io::BufRead;

use crate::error::{Result, StatError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

/// Four-line FASTQ parser. Empty sequence and quality lines are valid and
/// give a zero-length record.
pub struct FastqStreamParser<R: BufRead> {
    path: String,
    reader: R,
    line: Vec<u8>,
    line_no: u64,
}

impl<R: BufRead> FastqStreamParser<R> {
    pub fn new(path: &str, reader: R) -> Self {
        FastqStreamParser {
            path: path.to_string(),
            reader,
            line: Vec::new(),
            line_no: 0,
        }
    }

    /// Read one line into `self.line` without its line terminator.
    /// Returns `false` at end of input.
    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.line)
            .map_err(|source| StatError::Read {
                path: self.path.clone(),
                source,
            })?;
        if n == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        while matches!(self.line.last(), Some(b'\n' | b'\r')) {
            self.line.pop();
        }
        Ok(true)
    }

    fn malformed(&self, message: String) -> StatError {
        StatError::Malformed {
            path: self.path.clone(),
            message,
        }
    }

    fn required_line(&mut self, what: &str) -> Result<Vec<u8>> {
        if !self.read_line()? {
            return Err(self.malformed(format!(
                "Incomplete record: missing {} after line {}",
                what, self.line_no
            )));
        }
        Ok(std::mem::take(&mut self.line))
    }

    fn parse_record(&mut self) -> Result<Option<FastqRecord>> {
        // blank lines between records are tolerated
        loop {
            if !self.read_line()? {
                return Ok(None);
            }
            if !self.line.iter().all(u8::is_ascii_whitespace) {
                break;
            }
        }
        let header = match self.line.strip_prefix(b"@") {
            Some(rest) => rest,
            None => {
                return Err(self.malformed(format!(
                    "Expected '@' at the start of line {}",
                    self.line_no
                )))
            }
        };
        let id = String::from_utf8_lossy(header)
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();

        let seq = self.required_line("sequence")?;
        let separator = self.required_line("'+' separator")?;
        if !separator.starts_with(b"+") {
            return Err(self.malformed(format!("Expected '+' at line {}", self.line_no)));
        }
        let qual = self.required_line("quality")?;
        if qual.len() != seq.len() {
            return Err(self.malformed(format!(
                "Record {}: sequence length {} differs from quality length {}",
                id,
                seq.len(),
                qual.len()
            )));
        }
        Ok(Some(FastqRecord { id, seq, qual }))
    }
}

impl<R: BufRead> Iterator for FastqStreamParser<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_record().transpose()
    }
}
