use std::cmp::{max, min};
use std::path::{Path, PathBuf};

/// Input file together with its position on the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Workload {
    pub index: usize,
    pub path: PathBuf,
}

impl Workload {
    pub fn from_paths(paths: &[impl AsRef<Path>]) -> Vec<Workload> {
        paths.iter().enumerate().map(|(index, path)| Workload { index, path: path.as_ref().to_owned() }).collect()
    }
}

/// Split of the total threads budget between file workers and per-file decoding threads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThreadsBudget {
    pub workers: usize,
    pub decoders: usize,
}

impl ThreadsBudget {
    pub fn new(threads: usize, files: usize) -> Self {
        let workers = max(min(threads, files), 1);
        let decoders = max(threads / max(files, 1), 1);
        Self { workers, decoders }
    }
}
