use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use crate::error::Result;
use crate::io::output::OutputSink;
use crate::io::reader::{ReaderOptions, SequenceReader};
use crate::report::{render, ReportFormat};
use crate::stats::{collect_lengths, summarize, FileStats, Report};

/// Everything one `stat` run needs, passed in explicitly.
#[derive(Clone, Debug)]
pub struct StatConfig {
    pub files: Vec<String>,
    pub out_file: String,
    pub threads: usize,
    pub reader: ReaderOptions,
    pub format: ReportFormat,
}

/// Read one input to exhaustion and summarise it.
pub fn stat_file(path: &str, options: ReaderOptions) -> Result<FileStats> {
    let start = Instant::now();
    let mut reader = SequenceReader::open(path, options)?;
    let collected = collect_lengths(reader.by_ref())?;
    let stats = summarize(path, reader.seq_type().label(), collected);
    debug!(
        "{}: {} records, {} residues in {:.2?}",
        path,
        stats.num_records,
        stats.total_length,
        start.elapsed()
    );
    Ok(stats)
}

/// Summarise every input. With more than one thread the files are spread over a
/// dedicated pool; the report keeps the input order either way.
pub fn build_report(files: &[String], options: ReaderOptions, threads: usize) -> Result<Report> {
    let entries = if threads > 1 && files.len() > 1 {
        let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
        pool.install(|| {
            files
                .par_iter()
                .map(|path| stat_file(path, options))
                .collect::<Result<Vec<_>>>()
        })?
    } else {
        files
            .iter()
            .map(|path| stat_file(path, options))
            .collect::<Result<Vec<_>>>()?
    };
    Ok(Report::new(entries))
}

/// Open the output, build the report and write it once.
/// The output is opened first so an unwritable destination fails before any input is read.
pub fn run_stat(config: &StatConfig) -> Result<Report> {
    let start = Instant::now();
    let mut sink = OutputSink::create(&config.out_file)?;

    info!(
        "Computing statistics for {} file(s) with {} thread(s)",
        config.files.len(),
        config.threads
    );
    let report = build_report(&config.files, config.reader, config.threads)?;

    render(&report, config.format, &mut sink)?;
    sink.finish()?;
    info!("Statistics completed in {:.2}s", start.elapsed().as_secs_f32());
    Ok(report)
}
