use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open file {path}: {source}\nPossible reasons: not a BAM file; you don't have read permissions")]
    Open { path: PathBuf, source: rust_htslib::errors::Error },

    #[error("Failed to parse record information from {path} (HTS file corrupted?): {source}")]
    Decode { path: PathBuf, source: rust_htslib::errors::Error },

    #[error("Failed to initialize thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to write results to the output file: {0}")]
    Output(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
