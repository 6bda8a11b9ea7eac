//! The bwt_algorithms module holds the Burrows-Wheeler Transform and its inverse.
//!
//! The transform sorts every rotation of a sentinel-terminated sequence and keeps the last symbol
//! of each. Runs of identical symbols become more likely, which is what the RLE stage feeds on.
//!
//! The inverse never sorts. A cumulative frequency table (the C-table) plus a running rank of
//! each symbol gives the last-to-first (LF) mapping, and following that mapping from the
//! sentinel's row reads the original sequence back to front. The same chain, walked a given
//! number of steps, is what column access uses to reach a single symbol.
//!
pub mod bwt_sort;
pub mod lf_map;
