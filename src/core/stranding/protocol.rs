use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bio_types::strand::ReqStrand;

use crate::core::read::AlignedRead;

use super::StrandDeducer;

/// Library preparation protocol, i.e. how the read strand maps to the transcript strand.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Protocol {
    // Not stranded: transcript strand = read strand
    None,
    // read1 strand = transcript strand, read2 strand = reverse transcript strand
    Stranded,
    // read1 strand = reverse transcript strand, read2 strand = transcript strand
    Reverse,
}

impl Protocol {
    pub fn symbol(&self) -> &str {
        match self {
            Protocol::None => "none",
            Protocol::Stranded => "stranded",
            Protocol::Reverse => "reverse",
        }
    }

    fn flip(strand: ReqStrand) -> ReqStrand {
        if strand == ReqStrand::Forward {
            ReqStrand::Reverse
        } else {
            ReqStrand::Forward
        }
    }

    #[inline]
    pub fn resolve(&self, strand: ReqStrand, is_first: bool, is_second: bool) -> ReqStrand {
        match self {
            Protocol::None => strand,
            Protocol::Stranded if is_second => Protocol::flip(strand),
            Protocol::Reverse if is_first => Protocol::flip(strand),
            Protocol::Stranded | Protocol::Reverse => strand,
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Protocol::None),
            "stranded" => Ok(Protocol::Stranded),
            "reverse" => Ok(Protocol::Reverse),
            _ => Err(format!("\"{}\": is not a valid stranded type", s)),
        }
    }
}

impl<R: AlignedRead> StrandDeducer<R> for Protocol {
    #[inline]
    fn deduce(&self, record: &R) -> ReqStrand {
        self.resolve(*record.strand(), record.is_first(), record.is_second())
    }
}
