pub use grouped::Grouped;
pub use ungrouped::Ungrouped;

use crate::core::errors::Result;
use crate::core::introns::Intron;

mod grouped;
mod ungrouped;

/// Single consumer of the introns extracted by all workers.
pub trait Aggregator {
    fn add(&mut self, file: usize, intron: Intron) -> Result<()>;
    /// Flush everything that is left, returns the total number of written rows.
    fn finish(self) -> Result<usize>;
}
