use log::debug;

use crate::bwt_algorithms::lf_map::bwt_inverse;
use crate::error::{Result, SeqError};
use crate::tools::rle::run_length_decode;

/// Retrieve and fully decompress one sequence (row) of the collection.
pub fn retrieve_row<S: AsRef<str>>(index: i64, compressed_sequences: &[S]) -> Result<String> {
    let len = compressed_sequences.len();
    if index < 0 || index as u64 >= len as u64 {
        return Err(SeqError::IndexOutOfRange { index, len });
    }
    debug!("Retrieving row {} of {}", index, len);

    let bwt = run_length_decode(compressed_sequences[index as usize].as_ref())?;
    bwt_inverse(&bwt)
}
