//! The compression module runs the whole pipeline over a collection of sequences.
//!
//! Compression, per sequence:
//! - Normalize: strip spaces.
//! - Burrows Wheeler Transform: append the sentinel and sort the rotations.
//! - Run Length Encoding: collapse runs of identical symbols.
//!
//! Decompression follows the inverse of the compression process.
//! - RLE: expand the runs.
//! - BWT reversal: restore the sequence with the LF mapping.
//!
//! Sequences share nothing, so either direction can spread a collection over rayon's pool.
//! Output order always matches input order.
//!
pub mod compress;
pub mod decompress;
