use clap::{crate_authors, crate_description, crate_name, crate_version, App};
use indicatif::ProgressBar;

use bam2introns::cli;
use bam2introns::cli::args::CoreArgs;

fn main() {
    let matches = App::new(crate_name!())
        .author(crate_authors!("\n"))
        .version(crate_version!())
        .about(crate_description!())
        .max_term_width(120)
        .args(cli::args::all())
        .get_matches();

    let factory = || ProgressBar::new_spinner().with_style(cli::style::option());
    let core = CoreArgs::new(&matches, factory).unwrap_or_else(|err| err.exit());

    if let Err(err) = cli::run(core, factory) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
