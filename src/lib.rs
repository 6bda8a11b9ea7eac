//! Burrows-Wheeler + run-length compression of line-oriented sequence collections.
//!
//! Each sequence (one line of input) is compressed independently:
//! - Spaces are stripped. This is lossy: they never come back on decompression.
//! - A sentinel (`$`) is appended and the Burrows-Wheeler Transform is taken.
//! - The transform is run-length encoded as `<symbol><count>` tokens, the count omitted when 1.
//!
//! A compressed collection supports two kinds of random access:
//! - Row access decompresses one sequence.
//! - Column access reads the symbol at one position of every sequence by walking the LF
//!   (last-to-first) chain of each transform, without rebuilding the sequences.
//!
//! Basic usage from the command line:
//!
//! `$> bwtseq compress genome.txt -o compressed.txt`
//!
//! `$> bwtseq column compressed.txt 1`
//!
//! Sequences must be ASCII, must not contain `$`, and should not contain digits (a digit
//! collides with the run counts, so such a sequence does not survive the round trip).
//!
#![warn(rust_2018_idioms)]
pub mod access;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod tools;

#[cfg(test)]
mod tests;

/// Terminator appended to every sequence before the transform. Sorts before letters and digits.
pub const SENTINEL: u8 = b'$';
/// Emitted by column access for a sequence too short to have the requested position.
pub const PLACEHOLDER: u8 = b'-';

pub use access::column::{retrieve_column, retrieve_column_from_end, Anchor};
pub use access::row::retrieve_row;
pub use bwt_algorithms::bwt_sort::bwt_transform;
pub use bwt_algorithms::lf_map::bwt_inverse;
pub use compression::compress::{compress_sequences, compress_sequences_par};
pub use compression::decompress::{decompress_sequences, decompress_sequences_par};
pub use error::{Result, SeqError};
pub use tools::rle::{run_length_decode, run_length_encode};
