use indicatif::ProgressBar;

use crate::cli::args::CoreArgs;
use crate::cli::style;
use crate::core::aggregate::{Grouped, Ungrouped};
use crate::core::errors::Result;
use crate::core::io::hts::HTSDecoder;
use crate::core::run::{Pipeline, ReadsStats, Summary, Workload};

pub fn run(core: CoreArgs, factory: impl Fn() -> ProgressBar) -> Result<Summary> {
    let workload = Workload::from_paths(&core.bamfiles[..]);
    let files = workload.len();

    // Callbacks to track progress
    let pbar = factory();
    pbar.set_style(style::files::running());
    pbar.set_length(files as u64);
    pbar.set_message("extracting introns...");
    let onfinish = |_: usize, _: &ReadsStats| pbar.inc(1);

    let pipeline = Pipeline::new(HTSDecoder, core.readfilter, core.protocol, core.threads);
    let summary = if core.grouped {
        pipeline.run(workload, Grouped::new(core.saveto, files), onfinish)
    } else {
        pipeline.run(workload, Ungrouped::new(core.saveto), onfinish)
    };

    pbar.set_style(style::files::finished());
    match &summary {
        Ok(summary) => pbar.finish_with_message(format!(
            "finished with {} rows, processed reads: {} ({} filtered), introns: {}",
            summary.written, summary.reads.total, summary.reads.filtered, summary.reads.introns
        )),
        Err(_) => pbar.abandon_with_message("failed to extract introns"),
    }
    summary
}
