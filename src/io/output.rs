// src/io/output.rs
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{Result, StatError};
use crate::io::input::STDIN;

/// Where the rendered report goes: stdout for `-`, gzip for `*.gz`, else a plain file.
pub enum OutputSink {
    Stdout(BufWriter<Stdout>),
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl OutputSink {
    pub fn create(path: &str) -> Result<Self> {
        if path == STDIN {
            return Ok(OutputSink::Stdout(BufWriter::new(io::stdout())));
        }
        let file = File::create(path).map_err(|source| StatError::Output {
            path: path.to_string(),
            source,
        })?;
        if path.ends_with(".gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(OutputSink::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(OutputSink::Plain(BufWriter::new(file)))
        }
    }

    /// Flush buffers and write the gzip trailer.
    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(mut writer) => writer.flush(),
            OutputSink::Plain(mut writer) => writer.flush(),
            OutputSink::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(writer) => writer.write(buf),
            OutputSink::Plain(writer) => writer.write(buf),
            OutputSink::Compressed(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(writer) => writer.flush(),
            OutputSink::Plain(writer) => writer.flush(),
            OutputSink::Compressed(writer) => writer.flush(),
        }
    }
}
