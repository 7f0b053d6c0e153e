use crossbeam_channel::{bounded, Receiver};
use rayon::ThreadPoolBuilder;

use crate::core::aggregate::Aggregator;
use crate::core::errors::Result;
use crate::core::filtering::reads::ReadsFilter;
use crate::core::io::hts::Decoder;
use crate::core::stranding::Protocol;

use super::worker::{FileWorker, Message, ReadsStats};
use super::workload::{ThreadsBudget, Workload};

// Max number of in-flight batches of introns (one batch per read)
const OUTPUT_CAPACITY: usize = 4096;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub reads: ReadsStats,
    pub written: usize,
}

pub struct Pipeline<D, F> {
    decoder: D,
    filter: F,
    protocol: Protocol,
    threads: usize,
}

impl<D, F> Pipeline<D, F>
where
    D: Decoder,
    F: ReadsFilter<D::Read> + Sync,
{
    pub fn new(decoder: D, filter: F, protocol: Protocol, threads: usize) -> Self {
        Self { decoder, filter, protocol, threads }
    }

    /// Process all files and feed the extracted introns to the aggregator.
    /// `onfinish` is called on the calling thread each time a file is fully processed.
    pub fn run<A: Aggregator>(
        &self,
        workload: Vec<Workload>,
        aggregator: A,
        onfinish: impl Fn(usize, &ReadsStats),
    ) -> Result<Summary> {
        let files = workload.len();
        let budget = ThreadsBudget::new(self.threads, files);
        let pool = ThreadPoolBuilder::new().num_threads(budget.workers).build()?;

        let (jobs, queue) = bounded(files.max(1));
        for work in workload {
            jobs.send(work).expect("File queue can't be closed while the receiver is alive");
        }
        drop(jobs);

        let (sink, stream) = bounded(OUTPUT_CAPACITY);
        let worker = FileWorker::new(&self.decoder, &self.filter, self.protocol, budget.decoders);
        pool.in_place_scope(|scope| {
            for _ in 0..budget.workers {
                let (queue, sink, worker) = (queue.clone(), sink.clone(), &worker);
                scope.spawn(move |_| worker.run(queue, sink));
            }
            // The stream is closed as soon as the last worker is done
            drop(sink);
            aggregate(stream, aggregator, files, onfinish)
        })
    }
}

fn aggregate<A: Aggregator>(
    stream: Receiver<Message>,
    mut aggregator: A,
    files: usize,
    onfinish: impl Fn(usize, &ReadsStats),
) -> Result<Summary> {
    let mut summary = Summary { files, ..Default::default() };
    for message in stream {
        match message {
            Message::Introns { file, introns } => {
                for intron in introns {
                    aggregator.add(file, intron)?;
                }
            }
            Message::Finished { file, stats } => {
                summary.reads += stats;
                onfinish(file, &stats);
            }
            Message::Failed(err) => return Err(err),
        }
    }
    summary.written = aggregator.finish()?;
    Ok(summary)
}
