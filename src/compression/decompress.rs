use log::info;
use rayon::prelude::*;

use crate::bwt_algorithms::lf_map::bwt_inverse;
use crate::error::Result;
use crate::tools::cli::SeqOpts;
use crate::tools::data_in::{read_sequences, write_sequences};
use crate::tools::rle::run_length_decode;

/// BWT inverse of the RLE-decoded form of one stored sequence.
pub fn decompress_sequence(compressed: &str) -> Result<String> {
    bwt_inverse(&run_length_decode(compressed)?)
}

/// Decompress every stored sequence, keeping order.
pub fn decompress_sequences<S: AsRef<str>>(compressed: &[S]) -> Result<Vec<String>> {
    compressed
        .iter()
        .map(|c| decompress_sequence(c.as_ref()))
        .collect()
}

/// Parallel version of decompress_sequences. Output order matches input order.
pub fn decompress_sequences_par<S: AsRef<str> + Sync>(compressed: &[S]) -> Result<Vec<String>> {
    compressed
        .par_iter()
        .map(|c| decompress_sequence(c.as_ref()))
        .collect()
}

/// Decompress the compressed file named in opts into the output file.
pub fn decompress(opts: &SeqOpts) -> Result<()> {
    let compressed = read_sequences(&opts.input)?;

    let sequences = if opts.parallel {
        decompress_sequences_par(&compressed)?
    } else {
        decompress_sequences(&compressed)?
    };

    write_sequences(&opts.output, &sequences)?;
    info!(
        "RLE + BWT decompression completed (ignoring spaces). Check {}",
        opts.output.display()
    );
    Ok(())
}
