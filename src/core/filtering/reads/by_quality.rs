use derive_getters::Getters;
use derive_more::Constructor;

use super::{AlignedRead, ReadsFilter};

#[derive(Constructor, Getters, Copy, Clone, Debug)]
pub struct ReadsFilterByQuality {
    mapq: u8,
    skip_mapq_255: bool, // 255 = mapping quality is not available
}

impl<R: AlignedRead> ReadsFilter<R> for ReadsFilterByQuality {
    #[inline]
    fn is_read_ok(&self, record: &R) -> bool {
        record.mapq() >= self.mapq && !(self.skip_mapq_255 && record.mapq() == 255)
    }
}
