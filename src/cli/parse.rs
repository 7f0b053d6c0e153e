use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{ArgMatches, ErrorKind};
use indicatif::ProgressBar;
use itertools::Itertools;
use rust_htslib::bam::Record;

use crate::core::filtering::reads::{ReadsFilterByFlags, ReadsFilterByQuality, SequentialReadsFilter, SECONDARY_FLAG};
use crate::core::stranding::Protocol;

use super::args;

pub fn readfilter(
    pbar: ProgressBar,
    matches: &ArgMatches,
) -> clap::Result<SequentialReadsFilter<Record, ReadsFilterByQuality, ReadsFilterByFlags>> {
    pbar.set_message("Parsing reads filter options...");
    let (mapq, skip_mapq_255) = (
        matches.value_of_t(args::reads_filtering::MAPQ)?,
        matches.is_present(args::reads_filtering::SKIP_MAPQ_255),
    );
    let byquality = ReadsFilterByQuality::new(mapq, skip_mapq_255);

    let (include, mut exclude): (u16, u16) = (
        matches.value_of_t(args::reads_filtering::INCLUDE_FLAGS)?,
        matches.value_of_t(args::reads_filtering::EXCLUDE_FLAGS)?,
    );
    if !matches.is_present(args::reads_filtering::KEEP_SECONDARY) {
        exclude |= SECONDARY_FLAG;
    }
    let byflags = ReadsFilterByFlags::new(include, exclude);

    let msg = format!(
        "Reads filter options: require flags {}, disallow flags {}, mapq >= {}. ",
        byflags.include(),
        byflags.exclude(),
        byquality.mapq()
    );
    if skip_mapq_255 {
        pbar.finish_with_message(msg + "Mapq = 255 is NOT allowed.");
    } else {
        pbar.finish_with_message(msg + "Mapq = 255 is allowed.");
    }

    Ok(SequentialReadsFilter::new(byquality, byflags))
}

pub fn saveto(pbar: ProgressBar, matches: &ArgMatches) -> clap::Result<BufWriter<File>> {
    pbar.set_message("Parsing output path...");
    let result = matches.value_of(args::core::SAVETO).unwrap_or("/dev/stdout");
    let file = File::create(result).map_err(|err| {
        clap::Error::raw(ErrorKind::Io, format!("Failed to create the output file {}: {}\n", result, err))
    })?;
    pbar.finish_with_message(format!("Result will be saved to {}", result));
    Ok(BufWriter::new(file))
}

pub fn protocol(pbar: ProgressBar, matches: &ArgMatches) -> clap::Result<Protocol> {
    pbar.set_message("Parsing stranding parameter...");
    let protocol: Protocol = matches.value_of_t(args::core::STRANDING)?;
    let msg = match protocol {
        Protocol::None => "Unstranded library: introns strand is the alignment strand",
        Protocol::Stranded => {
            "Stranded library: read1 (or single-end read) matches transcription strand, read2 is reverse to the transcription strand"
        }
        Protocol::Reverse => {
            "Reverse stranded library: read1 (or single-end read) is reverse to the transcription strand, read2 matches transcription strand"
        }
    };
    pbar.finish_with_message(msg);
    Ok(protocol)
}

pub fn grouped(pbar: ProgressBar, matches: &ArgMatches) -> bool {
    pbar.set_message("Parsing output mode...");
    let result = matches.is_present(args::core::GROUPED);
    if result {
        pbar.finish_with_message("Grouped output: identical introns are collapsed with per-file counts");
    } else {
        pbar.finish_with_message("Ungrouped output: every intron occurrence is reported");
    }
    result
}

pub fn bamfiles(pbar: ProgressBar, matches: &ArgMatches) -> Vec<PathBuf> {
    pbar.set_message("Parsing paths to the input files...");
    let result: Vec<PathBuf> =
        matches.values_of(args::core::INPUT).map(|x| x.map(|x| x.into()).collect()).unwrap_or_default();
    if result.len() == 1 {
        pbar.finish_with_message(format!("Input file path: {}", result[0].display()))
    } else {
        let paths = result.iter().map(|x| x.display()).join(" ");
        pbar.finish_with_message(format!("Input files: {}", paths));
    }
    result
}

pub fn threads(pbar: ProgressBar, matches: &ArgMatches) -> clap::Result<usize> {
    pbar.set_message("Parsing number of threads allowed to launch...");
    let result = matches.value_of_t(args::core::THREADS)?;
    pbar.finish_with_message(format!("Using at most {} threads(+ 1 thread to aggregate the results)", result));
    Ok(result)
}
