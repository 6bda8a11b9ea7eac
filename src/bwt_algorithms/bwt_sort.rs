use log::{debug, info};
use rayon::prelude::*;

use crate::error::{Result, SeqError};
use crate::tools::normalize::strip_spaces;
use crate::SENTINEL;

/*
Rotations are never materialized. Each rotation is named by its start index, and two rotations
are compared lazily by walking the block from each start and wrapping to the front. The order
matches sorting the full rotation strings, so the output is byte-identical to that construction.
*/

/// Burrows-Wheeler-Transform of a sentinel-terminated block. Sorting goes parallel over 40k symbols.
/// Returns the key (sorted row of the unrotated block) and the BWT data.
pub fn bwt_encode(block: &[u8]) -> (u32, Vec<u8>) {
    // Create index into block. Index is u32, which is plenty for line sized input.
    let mut index = (0_u32..block.len() as u32).collect::<Vec<u32>>();

    if block.len() > 40000 {
        info!("Sorting {} rotations in parallel.", block.len());
        index[..].par_sort_unstable_by(|a, b| block_compare(*a as usize, *b as usize, block));
    } else {
        index[..].sort_unstable_by(|a, b| block_compare(*a as usize, *b as usize, block));
    }

    // Last symbol of each sorted rotation is the symbol just before its start.
    let mut key = 0_u32;
    let mut bwt = vec![0; block.len()];
    for (i, &start) in index.iter().enumerate() {
        if start == 0 {
            key = i as u32;
            bwt[i] = block[block.len() - 1];
        } else {
            bwt[i] = block[(start as usize) - 1];
        }
    }
    (key, bwt)
}

/// Order the rotations starting at a and b: each runs to the end of the block, then wraps.
fn block_compare(a: usize, b: usize, block: &[u8]) -> std::cmp::Ordering {
    let left = block[a..].iter().chain(&block[..a]);
    let right = block[b..].iter().chain(&block[..b]);
    left.cmp(right)
}

/// Transform one sequence. Spaces are stripped first and never come back on decode.
/// The sequence must be ASCII and must not already hold the sentinel.
pub fn bwt_transform(sequence: &str) -> Result<String> {
    let text = strip_spaces(sequence);
    if !text.is_ascii() {
        return Err(SeqError::InvalidArgument(
            "sequence contains non-ASCII symbols".to_string(),
        ));
    }
    if text.as_bytes().contains(&SENTINEL) {
        return Err(SeqError::InvalidArgument(format!(
            "sequence already contains the sentinel '{}'",
            SENTINEL as char
        )));
    }

    let mut block = Vec::with_capacity(text.len() + 1);
    block.extend_from_slice(text.as_bytes());
    block.push(SENTINEL);

    let (key, bwt) = bwt_encode(&block);
    debug!("BWT of {} symbols, key {}", block.len(), key);

    // ASCII in, ASCII out
    String::from_utf8(bwt)
        .map_err(|_| SeqError::MalformedInput("BWT produced invalid text".to_string()))
}
