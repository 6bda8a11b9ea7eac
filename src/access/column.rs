use log::{debug, trace};
use rayon::prelude::*;

use crate::bwt_algorithms::lf_map::LfMap;
use crate::error::{Result, SeqError};
use crate::tools::rle::run_length_decode;
use crate::PLACEHOLDER;

/// Which end of the original sequence a column position counts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Position 0 is the first symbol of the sequence
    Start,
    /// Position 0 is the last symbol before the sentinel
    End,
}

/// Find one symbol of one compressed sequence by walking the LF chain, without rebuilding the
/// sequence. Positions past the end of the BWT string give the placeholder.
pub fn column_symbol(position: usize, compressed: &str, anchor: Anchor) -> Result<u8> {
    // Still a full RLE expansion; the BWT string is needed whole to rank it.
    let bwt = run_length_decode(compressed)?;
    if !bwt.is_ascii() {
        return Err(SeqError::MalformedInput(
            "BWT string contains non-ASCII symbols".to_string(),
        ));
    }

    let n = bwt.len();
    if position >= n {
        trace!("Position {} past BWT length {}, using placeholder", position, n);
        return Ok(PLACEHOLDER);
    }

    let map = LfMap::new(bwt.as_bytes())?;
    // k steps from the root land on the symbol k places before the sentinel. Counting from the
    // start, position p is n - 2 - p steps back, wrapping onto the sentinel at p == n - 1.
    let steps = match anchor {
        Anchor::End => position,
        Anchor::Start => (2 * n - 2 - position) % n,
    };
    Ok(map.symbol(map.walk(steps)))
}

/// Retrieve one column across every compressed sequence, counting from `anchor`.
/// Each entry is independent; `parallel` spreads them over the rayon pool, keeping order.
pub fn retrieve_column_with<S: AsRef<str> + Sync>(
    position: i64,
    compressed_sequences: &[S],
    anchor: Anchor,
    parallel: bool,
) -> Result<String> {
    if position < 0 {
        return Err(SeqError::InvalidArgument(format!(
            "column position must be non-negative, got {}",
            position
        )));
    }
    let position = position as usize;
    debug!(
        "Retrieving column {} ({:?}) from {} sequences",
        position,
        anchor,
        compressed_sequences.len()
    );

    let column = if parallel {
        compressed_sequences
            .par_iter()
            .map(|c| column_symbol(position, c.as_ref(), anchor))
            .collect::<Result<Vec<u8>>>()?
    } else {
        compressed_sequences
            .iter()
            .map(|c| column_symbol(position, c.as_ref(), anchor))
            .collect::<Result<Vec<u8>>>()?
    };

    // Every symbol was checked as ASCII (or is the placeholder)
    String::from_utf8(column)
        .map_err(|_| SeqError::MalformedInput("column is not valid text".to_string()))
}

/// Retrieve the symbol at `position` (0 = first symbol) from every compressed sequence.
pub fn retrieve_column<S: AsRef<str> + Sync>(
    position: i64,
    compressed_sequences: &[S],
) -> Result<String> {
    retrieve_column_with(position, compressed_sequences, Anchor::Start, false)
}

/// Same as retrieve_column, but position 0 is the last symbol of every sequence.
pub fn retrieve_column_from_end<S: AsRef<str> + Sync>(
    position: i64,
    compressed_sequences: &[S],
) -> Result<String> {
    retrieve_column_with(position, compressed_sequences, Anchor::End, false)
}
