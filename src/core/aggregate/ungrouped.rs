use std::io::Write;

use crate::core::errors::Result;
use crate::core::introns::Intron;
use crate::core::io::table;

use super::Aggregator;

/// Writes each intron occurrence as soon as it arrives.
pub struct Ungrouped<W: Write> {
    saveto: csv::Writer<W>,
    written: usize,
}

impl<W: Write> Ungrouped<W> {
    pub fn new(saveto: W) -> Self {
        Self { saveto: table::writer(saveto), written: 0 }
    }
}

impl<W: Write> Aggregator for Ungrouped<W> {
    #[inline]
    fn add(&mut self, _: usize, intron: Intron) -> Result<()> {
        self.saveto.serialize(&intron)?;
        self.written += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<usize> {
        self.saveto.flush()?;
        Ok(self.written)
    }
}
