use bio_types::strand::ReqStrand;

pub use protocol::Protocol;

use crate::core::read::AlignedRead;

mod protocol;

pub trait StrandDeducer<R: AlignedRead> {
    fn deduce(&self, record: &R) -> ReqStrand;
}
