use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Arg, ArgMatches};
use indicatif::ProgressBar;
use rust_htslib::bam::Record;

use crate::core::filtering::reads::{ReadsFilterByFlags, ReadsFilterByQuality, SequentialReadsFilter};
use crate::core::stranding::Protocol;

use super::{parse, validate};

pub mod core {
    use super::*;
    pub const INPUT: &str = "input";
    pub const STRANDING: &str = "stranded";
    pub const THREADS: &str = "threads";
    pub const GROUPED: &str = "grouped";
    pub const SAVETO: &str = "saveto";

    pub const SECTION_NAME: &str = "Core";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(INPUT)
                .required(true)
                .takes_value(true)
                .multiple_values(true)
                .validator(validate::path)
                .long_help("Path to the input BAM file(s). Use \"-\" or \"stdin\" to read the alignments from the standard input. In the grouped mode, counts are reported in the same order as the files are listed."),
            Arg::new(STRANDING)
                .short('s')
                .long(STRANDING)
                .takes_value(true)
                .validator(validate::stranding)
                .possible_values(["none", "stranded", "reverse"])
                .default_value("none")
                .long_help("Strand-specificity of the library. \"none\": introns strand is the alignment strand; \"stranded\": read1 (or single-end read) matches the transcript strand, read2 is flipped; \"reverse\": read1 (or single-end read) is flipped, read2 matches the transcript strand."),
            Arg::new(THREADS)
                .short('t')
                .long(THREADS)
                .takes_value(true)
                .validator(validate::numeric(1, usize::MAX))
                .default_value("1")
                .long_help("Maximum number of threads to spawn at once. Threads are shared between parallel files processing and BAM decompression."),
            Arg::new(GROUPED)
                .short('g')
                .long(GROUPED)
                .takes_value(false)
                .long_help("Collapse identical introns (contig, start, end, strand) into a single row with per-file comma-separated counts. Otherwise, each intron occurrence is reported as is."),
            Arg::new(SAVETO)
                .short('o')
                .long(SAVETO)
                .takes_value(true)
                .validator(validate::writable)
                .default_value("/dev/stdout")
                .long_help("Path to the output tsv file. By default, the results are printed to stdout."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod reads_filtering {
    use super::*;
    pub const MAPQ: &str = "mapq";
    pub const SKIP_MAPQ_255: &str = "skip-mapq-255";
    pub const INCLUDE_FLAGS: &str = "in-flags";
    pub const EXCLUDE_FLAGS: &str = "ex-flags";
    pub const KEEP_SECONDARY: &str = "keep-secondary";

    pub const SECTION_NAME: &str = "Reads filtering";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(MAPQ)
                .long(MAPQ)
                .takes_value(true)
                .validator(validate::numeric(0u8, 255u8))
                .default_value("0")
                .long_help("Extract introns only from reads with mapq ≥ threshold. By default, all reads are used."),
            Arg::new(SKIP_MAPQ_255)
                .long(SKIP_MAPQ_255)
                .takes_value(false)
                .long_help("Skip reads with mapq = 255 (mapq is not available according to the SAM spec)."),
            Arg::new(INCLUDE_FLAGS)
                .long(INCLUDE_FLAGS)
                .takes_value(true)
                .validator(validate::numeric(0u16, 4095u16))
                .default_value("0")
                .long_help("Use only reads for which all the specified BAM flags are set. For example, a value of 3 will result in skipping reads that were not mapped in proper pairs. Use zero(0) to disable this filter."),
            Arg::new(EXCLUDE_FLAGS)
                .long(EXCLUDE_FLAGS)
                .takes_value(true)
                .validator(validate::numeric(0u16, 4095u16))
                .default_value("0")
                .long_help("Skip reads for which any of the specified BAM flags are set. For example, a value of 2564 will result in skipping unmapped reads, supplementary alignments and reads that fail platform/vendor quality checks. Secondary alignments are controlled separately, see --keep-secondary."),
            Arg::new(KEEP_SECONDARY)
                .long(KEEP_SECONDARY)
                .takes_value(false)
                .long_help("Extract introns from secondary alignments too. By default, they are skipped."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>() -> Vec<Arg<'a>> {
    core::args().into_iter().chain(reads_filtering::args()).collect()
}

pub struct CoreArgs {
    pub threads: usize,
    pub bamfiles: Vec<PathBuf>,
    pub protocol: Protocol,
    pub grouped: bool,
    pub readfilter: SequentialReadsFilter<Record, ReadsFilterByQuality, ReadsFilterByFlags>,
    pub saveto: BufWriter<File>,
}

impl CoreArgs {
    pub fn new(args: &ArgMatches, factory: impl Fn() -> ProgressBar) -> clap::Result<Self> {
        Ok(Self {
            threads: parse::threads(factory(), args)?,
            bamfiles: parse::bamfiles(factory(), args),
            protocol: parse::protocol(factory(), args)?,
            grouped: parse::grouped(factory(), args),
            readfilter: parse::readfilter(factory(), args)?,
            saveto: parse::saveto(factory(), args)?,
        })
    }
}
