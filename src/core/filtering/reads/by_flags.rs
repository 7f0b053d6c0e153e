use derive_getters::Getters;
use derive_more::Constructor;

use super::{AlignedRead, ReadsFilter};

#[derive(Constructor, Getters, Copy, Clone, Debug)]
pub struct ReadsFilterByFlags {
    include: u16,
    exclude: u16,
}

impl<R: AlignedRead> ReadsFilter<R> for ReadsFilterByFlags {
    #[inline]
    fn is_read_ok(&self, record: &R) -> bool {
        ((record.flags() & self.include) == self.include) && ((record.flags() & self.exclude) == 0)
    }
}
