use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

/// Tab-separated, header-less writer for BED-like output rows.
pub fn writer<W: Write>(saveto: W) -> csv::Writer<W> {
    WriterBuilder::new().delimiter(b'\t').has_headers(false).quote_style(QuoteStyle::Never).from_writer(saveto)
}
