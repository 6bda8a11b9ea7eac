//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use bwtseq::access::column::retrieve_column_with;
use bwtseq::access::row::retrieve_row;
use bwtseq::compression::{compress::compress, decompress::decompress};
use bwtseq::error::SeqError;
use bwtseq::tools::cli::{seqopts_init, Mode, SeqOpts};
use bwtseq::tools::data_in::read_sequences;
use bwtseq::tools::distance::{distance, size};
use bwtseq::tools::report::report;

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), SeqError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = seqopts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Compress => compress(&options),
        Mode::Decompress => decompress(&options),
        Mode::Row => row(&options),
        Mode::Column => column(&options),
        Mode::Report => report(&options),
        Mode::Distance => distance(&options),
        Mode::Size => size(&options),
    };

    info!("Done.\n");
    result
}

/// Print one decompressed row of the compressed file.
fn row(opts: &SeqOpts) -> Result<(), SeqError> {
    let compressed = read_sequences(&opts.input)?;
    println!("{}", retrieve_row(opts.index, &compressed)?);
    Ok(())
}

/// Print one column across every row of the compressed file.
fn column(opts: &SeqOpts) -> Result<(), SeqError> {
    let compressed = read_sequences(&opts.input)?;
    let column = retrieve_column_with(opts.index, &compressed, opts.anchor, opts.parallel)?;
    println!("Retrieved column {}: {}", opts.index, column);
    Ok(())
}
