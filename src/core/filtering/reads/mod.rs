#[cfg(test)]
use mockall::{automock, predicate::*};

pub use by_flags::ReadsFilterByFlags;
pub use by_quality::ReadsFilterByQuality;
pub use sequential::SequentialReadsFilter;

use crate::core::read::AlignedRead;

mod by_flags;
mod by_quality;
mod sequential;

/// SAM flag of secondary alignments.
pub const SECONDARY_FLAG: u16 = 0x100;

#[cfg_attr(test, automock)]
pub trait ReadsFilter<R: AlignedRead> {
    fn is_read_ok(&self, record: &R) -> bool;
}
