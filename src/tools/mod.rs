//! The tools module provides the helper pieces around the core transform.
//!
//! The tools are:
//! - cli: Command line interface and the runtime options built from it.
//! - data_in: Reading and writing line-oriented sequence files.
//! - distance: Compressed-length distance between two sequence collections.
//! - freq_count: Symbol frequency counts and the cumulative C-table.
//! - normalize: Space stripping applied before the transform.
//! - report: Size comparison of a raw file and its compressed store.
//! - rle: Run-Length-Encoding of transformed sequences.
//!
pub mod cli;
pub mod data_in;
pub mod distance;
pub mod freq_count;
pub mod normalize;
pub mod report;
pub mod rle;
