use bio_types::genome;
use bio_types::strand::ReqStrand;
#[cfg(test)]
use mockall::{mock, predicate::*};
use rust_htslib::bam::record::CigarStringView;
use rust_htslib::bam::Record;

pub trait AlignedRead {
    fn name(&self) -> &[u8];
    fn strand(&self) -> &ReqStrand;

    fn is_first(&self) -> bool;
    fn is_second(&self) -> bool;

    fn cigar(&self) -> CigarStringView;
    fn mapq(&self) -> u8;
    fn pos(&self) -> i64;
    fn contig(&self) -> &str;
    fn flags(&self) -> u16;
}

#[cfg(test)]
mock! {
    pub Read {}
    impl AlignedRead for Read {
        fn name(&self) -> &[u8];
        fn strand(&self) -> &ReqStrand;

        fn is_first(&self) -> bool;
        fn is_second(&self) -> bool;

        fn cigar(&self) -> CigarStringView;
        fn mapq(&self) -> u8;
        fn pos(&self) -> i64;
        fn contig(&self) -> &str;
        fn flags(&self) -> u16;
    }
}

impl AlignedRead for Record {
    #[inline]
    fn name(&self) -> &[u8] {
        self.qname()
    }

    #[inline]
    fn strand(&self) -> &ReqStrand {
        if self.is_reverse() {
            &ReqStrand::Reverse
        } else {
            &ReqStrand::Forward
        }
    }

    #[inline]
    fn is_first(&self) -> bool {
        self.is_first_in_template()
    }

    #[inline]
    fn is_second(&self) -> bool {
        self.is_last_in_template()
    }

    #[inline]
    fn cigar(&self) -> CigarStringView {
        self.cigar()
    }

    #[inline]
    fn mapq(&self) -> u8 {
        self.mapq()
    }

    #[inline]
    fn pos(&self) -> i64 {
        self.pos()
    }

    // Requires the header to be attached, which bam::Reader::read does for every record
    #[inline]
    fn contig(&self) -> &str {
        genome::AbstractInterval::contig(self)
    }

    #[inline]
    fn flags(&self) -> u16 {
        self.flags()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rust_htslib::bam::header::HeaderRecord;
    use rust_htslib::bam::record::{Cigar, CigarString};
    use rust_htslib::bam::{Header, HeaderView};

    use super::*;

    #[test]
    fn record() {
        let mut header = Header::new();
        for (contig, length) in [("chr1", 500), ("chr7", 1000)] {
            let mut sq = HeaderRecord::new(b"SQ");
            sq.push_tag(b"SN", &contig).push_tag(b"LN", &length);
            header.push_record(&sq);
        }

        let mut record = Record::new();
        let cigar = CigarString(vec![Cigar::Match(5), Cigar::RefSkip(10), Cigar::Match(5)]);
        record.set(b"read1", Some(&cigar), b"AAAAAAAAAA", &[30; 10]);
        record.set_tid(1);
        record.set_pos(42);
        record.set_mapq(17);
        record.set_flags(0x1 | 0x10 | 0x80);
        record.set_header(Rc::new(HeaderView::from_header(&header)));

        assert_eq!(AlignedRead::name(&record), b"read1");
        assert_eq!(AlignedRead::contig(&record), "chr7");
        assert_eq!(*AlignedRead::strand(&record), ReqStrand::Reverse);
        assert!(!AlignedRead::is_first(&record));
        assert!(AlignedRead::is_second(&record));
        assert_eq!(AlignedRead::pos(&record), 42);
        assert_eq!(AlignedRead::mapq(&record), 17);
        assert_eq!(AlignedRead::flags(&record), 0x91);
        assert_eq!(AlignedRead::cigar(&record).end_pos(), 62);
    }
}

#[cfg(test)]
pub mod fixtures {
    use rust_htslib::bam::record::{Cigar, CigarString};

    use super::*;

    pub const PAIRED: u16 = 0x1;
    pub const REVERSE: u16 = 0x10;
    pub const FIRST: u16 = 0x40;
    pub const SECOND: u16 = 0x80;
    pub const SECONDARY: u16 = 0x100;

    /// Plain in-memory read, flags drive strand and mate information like in a BAM record.
    #[derive(Clone, Debug)]
    pub struct TestRead {
        pub name: Vec<u8>,
        pub contig: String,
        pub pos: i64,
        pub cigar: Vec<Cigar>,
        pub flags: u16,
        pub mapq: u8,
    }

    impl TestRead {
        pub fn new(name: &str, contig: &str, pos: i64, cigar: Vec<Cigar>, flags: u16) -> Self {
            Self { name: name.as_bytes().to_vec(), contig: contig.to_owned(), pos, cigar, flags, mapq: 60 }
        }
    }

    impl AlignedRead for TestRead {
        fn name(&self) -> &[u8] {
            &self.name
        }

        fn strand(&self) -> &ReqStrand {
            if self.flags & REVERSE != 0 {
                &ReqStrand::Reverse
            } else {
                &ReqStrand::Forward
            }
        }

        fn is_first(&self) -> bool {
            self.flags & FIRST != 0
        }

        fn is_second(&self) -> bool {
            self.flags & SECOND != 0
        }

        fn cigar(&self) -> CigarStringView {
            CigarString(self.cigar.clone()).into_view(self.pos)
        }

        fn mapq(&self) -> u8 {
            self.mapq
        }

        fn pos(&self) -> i64 {
            self.pos
        }

        fn contig(&self) -> &str {
            &self.contig
        }

        fn flags(&self) -> u16 {
            self.flags
        }
    }

    #[allow(non_snake_case)]
    pub mod shortcats {
        use rust_htslib::bam::record::Cigar;
        use rust_htslib::bam::record::Cigar::*;

        pub fn M(x: u32) -> Cigar {
            Match(x)
        }
        pub fn X(x: u32) -> Cigar {
            Diff(x)
        }
        pub fn E(x: u32) -> Cigar {
            Equal(x)
        }
        pub fn D(x: u32) -> Cigar {
            Del(x)
        }
        pub fn N(x: u32) -> Cigar {
            RefSkip(x)
        }
        pub fn H(x: u32) -> Cigar {
            HardClip(x)
        }
        pub fn P(x: u32) -> Cigar {
            Pad(x)
        }
        pub fn S(x: u32) -> Cigar {
            SoftClip(x)
        }
        pub fn I(x: u32) -> Cigar {
            Ins(x)
        }
    }
}
