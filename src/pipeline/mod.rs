//! Pipeline module - drives the per-file statistics and report output

pub mod stat;

pub use stat::{build_report, run_stat, stat_file, StatConfig};
