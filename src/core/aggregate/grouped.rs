use std::collections::HashMap;
use std::io::Write;

use crate::core::errors::Result;
use crate::core::introns::{Intron, IntronKey};
use crate::core::io::table;

use super::Aggregator;

/// Folds identical introns into one record with per-file counts, written on finish.
pub struct Grouped<W: Write> {
    saveto: csv::Writer<W>,
    files: usize,
    table: HashMap<IntronKey, Intron>,
}

impl<W: Write> Grouped<W> {
    pub fn new(saveto: W, files: usize) -> Self {
        Self { saveto: table::writer(saveto), files, table: HashMap::new() }
    }
}

#[cfg(test)]
impl<W: Write> Grouped<W> {
    fn len(&self) -> usize {
        self.table.len()
    }

    fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn get(&self, key: &IntronKey) -> Option<&Intron> {
        self.table.get(key)
    }
}

impl<W: Write> Aggregator for Grouped<W> {
    fn add(&mut self, file: usize, mut intron: Intron) -> Result<()> {
        debug_assert!(file < self.files);

        let files = self.files;
        self.table
            .entry(intron.key())
            .or_insert_with(|| {
                intron.counts = vec![0; files];
                intron
            })
            .counts[file] += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<usize> {
        let written = self.table.len();
        for (_, intron) in self.table.drain() {
            self.saveto.serialize(&intron)?;
        }
        self.saveto.flush()?;
        Ok(written)
    }
}
