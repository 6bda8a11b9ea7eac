//! Random access into a collection of compressed sequences.
//!
//! - row: fully decompress one sequence.
//! - column: read one position of every sequence by walking its LF chain.
//!
pub mod column;
pub mod row;
