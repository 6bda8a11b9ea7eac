use log::{debug, info};
use rayon::prelude::*;

use crate::bwt_algorithms::bwt_sort::bwt_transform;
use crate::error::Result;
use crate::tools::cli::SeqOpts;
use crate::tools::data_in::{read_sequences, write_sequences};
use crate::tools::rle::run_length_encode;

/// RLE(BWT(sequence)) for one sequence.
pub fn compress_sequence(sequence: &str) -> Result<String> {
    Ok(run_length_encode(&bwt_transform(sequence)?))
}

/// Compress every sequence of the collection independently, keeping order.
pub fn compress_sequences<S: AsRef<str>>(sequences: &[S]) -> Result<Vec<String>> {
    sequences
        .iter()
        .map(|s| compress_sequence(s.as_ref()))
        .collect()
}

/// Parallel version of compress_sequences. Output order matches input order.
pub fn compress_sequences_par<S: AsRef<str> + Sync>(sequences: &[S]) -> Result<Vec<String>> {
    sequences
        .par_iter()
        .map(|s| compress_sequence(s.as_ref()))
        .collect()
}

/// Compress the input file named in opts, one sequence per line, into the output file.
pub fn compress(opts: &SeqOpts) -> Result<()> {
    let sequences = read_sequences(&opts.input)?;

    let compressed = if opts.parallel {
        compress_sequences_par(&sequences)?
    } else {
        compress_sequences(&sequences)?
    };
    debug!(
        "Compressed {} sequences, {} symbols in, {} out",
        sequences.len(),
        sequences.iter().map(|s| s.len()).sum::<usize>(),
        compressed.iter().map(|s| s.len()).sum::<usize>()
    );

    write_sequences(&opts.output, &compressed)?;
    info!(
        "BWT + RLE compression completed (ignoring spaces). Check {}",
        opts.output.display()
    );
    Ok(())
}
