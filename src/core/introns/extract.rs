use bio_types::genome::Interval;
use rust_htslib::bam::record::Cigar;

use crate::core::read::AlignedRead;
use crate::core::stranding::StrandDeducer;

use super::Intron;

/// Introns implied by the read alignment, in the left-to-right reference order.
pub fn introns<R: AlignedRead>(read: &R, strander: &impl StrandDeducer<R>) -> Vec<Intron> {
    // Unplaced reads have no reference coordinates
    if read.pos() < 0 {
        return vec![];
    }

    let mut skipped = Vec::new();
    let mut cursor = read.pos() as u64;
    for block in read.cigar().iter() {
        match block {
            Cigar::Match(ops) | Cigar::Del(ops) | Cigar::Equal(ops) | Cigar::Diff(ops) => {
                cursor += *ops as u64;
            }
            Cigar::RefSkip(ops) => {
                let end = cursor + *ops as u64;
                skipped.push(cursor..end);
                cursor = end;
            }
            Cigar::Ins(_) | Cigar::SoftClip(_) | Cigar::HardClip(_) | Cigar::Pad(_) => {}
        }
    }

    if skipped.is_empty() {
        return vec![];
    }

    // Shared by all introns of the read
    let strand = strander.deduce(read);
    let (contig, mate) = (read.contig(), read.is_second());
    let name = String::from_utf8_lossy(read.name()).into_owned();

    skipped
        .into_iter()
        .map(|range| Intron::new(Interval::new(contig.to_owned(), range), strand, mate, name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use bio_types::genome::AbstractInterval;
    use bio_types::strand::ReqStrand;
    use rust_htslib::bam::record::Cigar;

    use crate::core::read::fixtures::shortcats::*;
    use crate::core::read::fixtures::*;
    use crate::core::stranding::Protocol;

    use super::*;

    fn ranges(introns: &[Intron]) -> Vec<(u64, u64)> {
        introns.iter().map(|x| (x.start(), x.end())).collect()
    }

    #[test]
    fn no_skips() {
        for cigar in [vec![], vec![M(50)], vec![S(5), M(20), I(2), D(3), M(20), H(10)], vec![E(10), X(1), P(2), E(10)]]
        {
            let read = TestRead::new("read", "chr1", 100, cigar, 0);
            for protocol in [Protocol::None, Protocol::Stranded, Protocol::Reverse] {
                assert!(introns(&read, &protocol).is_empty());
            }
        }
    }

    #[test]
    fn single_skip() {
        let read = TestRead::new("read1", "chr1", 100, vec![M(10), N(200), M(20)], 0);
        let result = introns(&read, &Protocol::None);
        assert_eq!(
            result,
            vec![Intron::new(Interval::new("chr1".into(), 110..310), ReqStrand::Forward, false, "read1".into())]
        );
        assert_eq!(result[0].contig(), "chr1");
        assert!(result[0].counts.is_empty());
    }

    #[test]
    fn second_in_pair_stranded() {
        let read = TestRead::new("read1", "chr1", 100, vec![M(10), N(200), M(20)], PAIRED | SECOND);
        let result = introns(&read, &Protocol::Stranded);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].strand, ReqStrand::Reverse);
        assert!(result[0].mate);
        assert_eq!(ranges(&result), vec![(110, 310)]);

        // Same read, other protocols
        assert_eq!(introns(&read, &Protocol::None)[0].strand, ReqStrand::Forward);
        assert_eq!(introns(&read, &Protocol::Reverse)[0].strand, ReqStrand::Forward);
    }

    #[test]
    fn first_in_pair_reverse() {
        let read = TestRead::new("read1", "chr2", 0, vec![M(5), N(10), M(5)], PAIRED | FIRST | REVERSE);
        let result = introns(&read, &Protocol::Reverse);
        assert_eq!(result[0].strand, ReqStrand::Forward);
        assert!(!result[0].mate);
        assert_eq!(result[0].interval.contig(), "chr2");
        assert_eq!(ranges(&result), vec![(5, 15)]);
    }

    #[test]
    fn reference_consuming_operations() {
        // Only M, D, N, = and X move the reference cursor
        let cigar = vec![H(3), S(7), M(10), I(4), D(2), N(100), E(5), X(1), P(3), N(50), M(8), S(2)];
        let read = TestRead::new("read1", "chrX", 1000, cigar, REVERSE);
        let result = introns(&read, &Protocol::None);
        assert_eq!(ranges(&result), vec![(1012, 1112), (1118, 1168)]);
        assert!(result.iter().all(|x| x.strand == ReqStrand::Reverse));
    }

    #[test]
    fn multiple_skips() {
        let lengths = [200u32, 1, 35, 10_000];
        let mut cigar: Vec<Cigar> = vec![M(25)];
        for len in lengths {
            cigar.push(N(len));
            cigar.push(M(25));
        }
        let read = TestRead::new("read1", "chr1", 7, cigar, 0);
        let result = introns(&read, &Protocol::None);

        assert_eq!(result.len(), lengths.len());
        for (intron, len) in result.iter().zip(lengths) {
            assert_eq!(intron.end() - intron.start(), len as u64);
            assert_eq!(intron.name, "read1");
        }
        for pair in result.windows(2) {
            assert!(pair[0].end() < pair[1].start());
        }
        assert_eq!(result[0].start(), 32);
    }

    #[test]
    fn unplaced() {
        let read = TestRead::new("read1", "chr1", -1, vec![M(10), N(10), M(10)], 0);
        assert!(introns(&read, &Protocol::None).is_empty());
    }
}
