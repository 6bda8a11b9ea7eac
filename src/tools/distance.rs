use std::path::Path;

use log::{debug, info};

use crate::compression::compress::compress_sequence;
use crate::error::{Result, SeqError};
use crate::tools::cli::SeqOpts;
use crate::tools::data_in::read_sequences;

/// Normalized difference of the compressed byte lengths of two sequences:
/// `|C(x) - C(y)| / max(C(x), C(y))`. Always in `[0, 1)`.
pub fn pair_distance(x: &str, y: &str) -> Result<f64> {
    let cx = compress_sequence(x)?.len();
    let cy = compress_sequence(y)?.len();
    // Every compressed form holds the sentinel, so the max is never zero
    Ok(cx.abs_diff(cy) as f64 / cx.max(cy) as f64)
}

/// Check an explicit divisor, or fall back to the count of items actually compared.
fn resolve_divisor(divisor: Option<f64>, count: usize) -> Result<f64> {
    match divisor {
        Some(d) if d > 0.0 && d.is_finite() => Ok(d),
        Some(d) => Err(SeqError::InvalidArgument(format!(
            "divisor must be positive, got {}",
            d
        ))),
        None => Ok(count as f64),
    }
}

/// Sum of pair distances over aligned lines (stopping at the shorter collection), averaged.
pub fn sequence_distance<S: AsRef<str>, T: AsRef<str>>(
    first: &[S],
    second: &[T],
    divisor: Option<f64>,
) -> Result<f64> {
    let pairs = first.len().min(second.len());
    if pairs == 0 {
        return Err(SeqError::EmptyInput(
            "no aligned sequence pairs to compare".to_string(),
        ));
    }

    let mut sum = 0.0;
    for (x, y) in first.iter().zip(second.iter()) {
        sum += pair_distance(x.as_ref(), y.as_ref())?;
    }
    debug!("Summed distance {} over {} pairs", sum, pairs);
    Ok(sum / resolve_divisor(divisor, pairs)?)
}

/// Mean compressed size in bytes per sequence.
pub fn mean_compressed_size<S: AsRef<str>>(sequences: &[S], divisor: Option<f64>) -> Result<f64> {
    if sequences.is_empty() {
        return Err(SeqError::EmptyInput("no sequences to compress".to_string()));
    }
    let mut total = 0_usize;
    for s in sequences {
        total += compress_sequence(s.as_ref())?.len();
    }
    Ok(total as f64 / resolve_divisor(divisor, sequences.len())?)
}

/// Distance between two sequence files.
pub fn file_distance<P: AsRef<Path>, Q: AsRef<Path>>(
    first: P,
    second: Q,
    divisor: Option<f64>,
) -> Result<f64> {
    let first = read_sequences(first)?;
    let second = read_sequences(second)?;
    sequence_distance(&first, &second, divisor)
}

/// Mean compressed size in bytes per sequence of a file.
pub fn compressed_size<P: AsRef<Path>>(path: P, divisor: Option<f64>) -> Result<f64> {
    mean_compressed_size(&read_sequences(path)?, divisor)
}

/// Print the mean compressed size of the file named in opts.
pub fn size(opts: &SeqOpts) -> Result<()> {
    let mean = compressed_size(&opts.input, opts.divisor)?;
    println!("{}: {} bytes per sequence", opts.input.display(), mean);
    Ok(())
}

/// Print the distance between the two files named in opts.
pub fn distance(opts: &SeqOpts) -> Result<()> {
    let d = file_distance(&opts.input, &opts.other, opts.divisor)?;
    info!(
        "Distance computed between {} and {}",
        opts.input.display(),
        opts.other.display()
    );
    println!(
        "{} - {}: {}",
        opts.input.display(),
        opts.other.display(),
        d
    );
    Ok(())
}
