//! Summary statistics (count, total/min/max/mean length, N50) for FASTA/FASTQ files.

pub mod error;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use error::{Result, StatError};
