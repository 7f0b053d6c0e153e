use std::marker::PhantomData;

use super::{AlignedRead, ReadsFilter};

#[derive(Copy, Clone)]
pub struct SequentialReadsFilter<R: AlignedRead, First: ReadsFilter<R>, Second: ReadsFilter<R>> {
    first: First,
    second: Second,
    phantom: PhantomData<fn() -> R>,
}

impl<R: AlignedRead, First: ReadsFilter<R>, Second: ReadsFilter<R>> SequentialReadsFilter<R, First, Second> {
    pub fn new(first: First, second: Second) -> Self {
        SequentialReadsFilter { first, second, phantom: Default::default() }
    }

    pub fn first(&self) -> &First {
        &self.first
    }

    pub fn second(&self) -> &Second {
        &self.second
    }
}

impl<R, First, Second> ReadsFilter<R> for SequentialReadsFilter<R, First, Second>
where
    R: AlignedRead,
    First: ReadsFilter<R>,
    Second: ReadsFilter<R>,
{
    #[inline]
    fn is_read_ok(&self, record: &R) -> bool {
        self.first.is_read_ok(record) && self.second.is_read_ok(record)
    }
}
