//! Input/output plumbing around the statistics core: opening (possibly
//! gzipped) inputs, parsing FASTA with `bio` and FASTQ with a line parser,
//! guessing the sequence type, and the output sink the report is written to.

pub mod alphabet;
pub mod fastq;
pub mod input;
pub mod output;
pub mod reader;
