use std::path::{Path, PathBuf};

use rust_htslib::bam::{self, Read, Record};

use crate::core::errors::{Error, Result};
use crate::core::read::AlignedRead;

/// Source of aligned reads for a single input file.
pub trait Decoder: Sync {
    type Read: AlignedRead;
    type Stream: Iterator<Item = Result<Self::Read>>;

    fn open(&self, path: &Path, threads: usize) -> Result<Self::Stream>;
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-" || path.as_os_str() == "stdin"
}

#[derive(Copy, Clone, Default)]
pub struct HTSDecoder;

impl Decoder for HTSDecoder {
    type Read = Record;
    type Stream = HTSRecords;

    fn open(&self, path: &Path, threads: usize) -> Result<Self::Stream> {
        let onerr = |source| Error::Open { path: path.to_owned(), source };

        let reader = if is_stdin(path) { bam::Reader::from_stdin() } else { bam::Reader::from_path(path) };
        let mut reader = reader.map_err(onerr)?;
        reader.set_threads(threads.max(1)).map_err(onerr)?;

        Ok(HTSRecords { reader, path: path.to_owned() })
    }
}

/// Lazy stream of records decoded from one BAM file.
pub struct HTSRecords {
    reader: bam::Reader,
    path: PathBuf,
}

impl Iterator for HTSRecords {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Record::new();
        match self.reader.read(&mut record)? {
            Ok(()) => Some(Ok(record)),
            Err(source) => Some(Err(Error::Decode { path: self.path.clone(), source })),
        }
    }
}
