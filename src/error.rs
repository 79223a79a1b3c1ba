use std::io;
use thiserror::Error;

/// Errors raised while reading inputs, computing statistics or writing the report.
///
/// Every variant is fatal for the whole run: the pipeline stops at the first
/// one and no partial report is written.
#[derive(Error, Debug)]
pub enum StatError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed record in {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("{path}: unrecognized sequence format (expected '>' or '@', found {found:?})")]
    UnknownFormat { path: String, found: char },

    #[error("{path}: record '{id}' contains letters outside the {alphabet} alphabet")]
    InvalidSequence {
        path: String,
        id: String,
        alphabet: String,
    },

    #[error("failed to open output {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, StatError>;
