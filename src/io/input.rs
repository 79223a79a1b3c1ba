// src/io/input.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use flate2::bufread::MultiGzDecoder;

use crate::error::{Result, StatError};

/// File identifier that stands for standard input.
pub const STDIN: &str = "-";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Resolve positional arguments into the ordered list of inputs.
/// No arguments means a single read from standard input.
pub fn file_list(args: &[String]) -> Vec<String> {
    if args.is_empty() {
        vec![STDIN.to_string()]
    } else {
        args.to_vec()
    }
}

/// Open a sequence file (or stdin for `-`) for buffered reading.
/// Gzipped content is detected by its magic bytes, not by the file extension.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if path == STDIN {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(path).map_err(|source| StatError::Open {
            path: path.to_string(),
            source,
        })?;
        Box::new(BufReader::new(file))
    };
    maybe_decompress(reader).map_err(|source| StatError::Read {
        path: path.to_string(),
        source,
    })
}

fn maybe_decompress(mut reader: Box<dyn BufRead>) -> io::Result<Box<dyn BufRead>> {
    let head = reader.fill_buf()?;
    if head.len() >= GZIP_MAGIC.len() && head[..2] == GZIP_MAGIC {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(reader)
    }
}
