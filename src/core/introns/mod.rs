use bio_types::genome::{AbstractInterval, Interval};
use bio_types::strand::ReqStrand;
use itertools::Itertools;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub use extract::introns;

mod extract;

/// Reference region skipped by a spliced alignment (CIGAR `N` operation).
#[derive(Clone, Debug, PartialEq)]
pub struct Intron {
    pub interval: Interval,
    pub strand: ReqStrand,
    // The read is the second segment of its template
    pub mate: bool,
    pub name: String,
    // One slot per input file in grouped mode, empty otherwise
    pub counts: Vec<u32>,
}

impl Intron {
    pub fn new(interval: Interval, strand: ReqStrand, mate: bool, name: String) -> Self {
        Self { interval, strand, mate, name, counts: Vec::new() }
    }

    pub fn contig(&self) -> &str {
        self.interval.contig()
    }

    pub fn start(&self) -> u64 {
        self.interval.range().start
    }

    pub fn end(&self) -> u64 {
        self.interval.range().end
    }

    pub fn strand_symbol(&self) -> &str {
        match self.strand {
            ReqStrand::Forward => "+",
            ReqStrand::Reverse => "-",
        }
    }

    pub fn key(&self) -> IntronKey {
        IntronKey {
            contig: self.contig().to_owned(),
            start: self.start(),
            end: self.end(),
            forward: self.strand == ReqStrand::Forward,
        }
    }

    fn joined_counts(&self) -> String {
        if self.counts.is_empty() {
            "0".to_owned()
        } else {
            self.counts.iter().join(",")
        }
    }
}

/// Position + strand identity of an intron, used to group identical introns across reads and files.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct IntronKey {
    pub contig: String,
    pub start: u64,
    pub end: u64,
    pub forward: bool,
}

impl Serialize for Intron {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Intron", 6)?;
        state.serialize_field("contig", self.contig())?;
        state.serialize_field("start", &self.start())?;
        state.serialize_field("end", &self.end())?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("counts", &self.joined_counts())?;
        state.serialize_field("strand", self.strand_symbol())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::io::table;

    use super::*;

    fn intron(strand: ReqStrand, counts: Vec<u32>) -> Intron {
        let mut intron = Intron::new(Interval::new("chr1".into(), 110..310), strand, false, "read1".into());
        intron.counts = counts;
        intron
    }

    fn render(intron: &Intron) -> String {
        let mut writer = table::writer(Vec::new());
        writer.serialize(intron).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn key() {
        let forward = intron(ReqStrand::Forward, vec![]);
        let reverse = intron(ReqStrand::Reverse, vec![]);
        assert_eq!(
            forward.key(),
            IntronKey { contig: "chr1".into(), start: 110, end: 310, forward: true }
        );
        assert_ne!(forward.key(), reverse.key());

        let mut renamed = forward.clone();
        renamed.name = "read2".into();
        renamed.mate = true;
        assert_eq!(forward.key(), renamed.key());
    }

    #[test]
    fn serialize() {
        assert_eq!(render(&intron(ReqStrand::Forward, vec![])), "chr1\t110\t310\tread1\t0\t+\n");
        assert_eq!(render(&intron(ReqStrand::Reverse, vec![3])), "chr1\t110\t310\tread1\t3\t-\n");
        assert_eq!(render(&intron(ReqStrand::Forward, vec![1, 0, 3])), "chr1\t110\t310\tread1\t1,0,3\t+\n");
    }
}
