use crossbeam_channel::{Receiver, Sender};
use derive_more::{Add, AddAssign};

use crate::core::errors::{Error, Result};
use crate::core::filtering::reads::ReadsFilter;
use crate::core::introns::{introns, Intron};
use crate::core::io::hts::Decoder;
use crate::core::stranding::Protocol;

use super::workload::Workload;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Add, AddAssign)]
pub struct ReadsStats {
    pub total: u64,
    pub filtered: u64,
    pub introns: u64,
}

pub enum Message {
    Introns { file: usize, introns: Vec<Intron> },
    Finished { file: usize, stats: ReadsStats },
    Failed(Error),
}

/// Decodes, filters and splits into introns the reads of each file pulled from the queue.
pub struct FileWorker<'a, D, F> {
    decoder: &'a D,
    filter: &'a F,
    protocol: Protocol,
    threads: usize,
}

impl<'a, D, F> FileWorker<'a, D, F>
where
    D: Decoder,
    F: ReadsFilter<D::Read>,
{
    pub fn new(decoder: &'a D, filter: &'a F, protocol: Protocol, threads: usize) -> Self {
        Self { decoder, filter, protocol, threads }
    }

    pub fn run(&self, queue: Receiver<Workload>, sink: Sender<Message>) {
        for work in queue.iter() {
            let message = match self.process(&work, &sink) {
                Ok(Some(stats)) => Message::Finished { file: work.index, stats },
                // Nobody is listening anymore
                Ok(None) => return,
                Err(err) => Message::Failed(err),
            };
            let failed = matches!(message, Message::Failed(_));
            if sink.send(message).is_err() || failed {
                return;
            }
        }
    }

    fn process(&self, work: &Workload, sink: &Sender<Message>) -> Result<Option<ReadsStats>> {
        let mut stats = ReadsStats::default();
        for read in self.decoder.open(&work.path, self.threads)? {
            let read = read?;
            stats.total += 1;
            if !self.filter.is_read_ok(&read) {
                stats.filtered += 1;
                continue;
            }

            let introns = introns(&read, &self.protocol);
            if introns.is_empty() {
                continue;
            }
            stats.introns += introns.len() as u64;
            if sink.send(Message::Introns { file: work.index, introns }).is_err() {
                return Ok(None);
            }
        }
        Ok(Some(stats))
    }
}
