use std::fmt::{Display, Formatter};
use std::path::Path;

use log::info;

use crate::error::{Result, SeqError};
use crate::tools::cli::SeqOpts;
use crate::tools::data_in::file_size;

/// Byte sizes of a raw sequence file and its compressed store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressionReport {
    pub raw_bytes: u64,
    pub compressed_bytes: u64,
}

impl CompressionReport {
    pub fn new(raw_bytes: u64, compressed_bytes: u64) -> Result<Self> {
        if raw_bytes == 0 {
            return Err(SeqError::EmptyInput(
                "raw file is empty, no ratio to report".to_string(),
            ));
        }
        Ok(Self {
            raw_bytes,
            compressed_bytes,
        })
    }

    /// Bytes saved. Negative when the compressed store is the larger file.
    pub fn difference(&self) -> i64 {
        self.raw_bytes as i64 - self.compressed_bytes as i64
    }

    /// Compressed size as a percentage of the raw size.
    pub fn ratio_percent(&self) -> f64 {
        self.compressed_bytes as f64 / self.raw_bytes as f64 * 100.0
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Raw size: {} bytes", self.raw_bytes)?;
        writeln!(f, "Compressed size: {} bytes", self.compressed_bytes)?;
        writeln!(f, "Size difference: {} bytes", self.difference())?;
        write!(f, "Compression ratio: {:.2}%", self.ratio_percent())
    }
}

/// Build a report from the sizes of two files on disk.
pub fn report_files<P: AsRef<Path>, Q: AsRef<Path>>(raw: P, compressed: Q) -> Result<CompressionReport> {
    CompressionReport::new(file_size(raw)?, file_size(compressed)?)
}

/// Print the report for the two files named in opts.
pub fn report(opts: &SeqOpts) -> Result<()> {
    let report = report_files(&opts.input, &opts.other)?;
    info!(
        "Compared {} against {}",
        opts.input.display(),
        opts.other.display()
    );
    println!("{}", report);
    Ok(())
}
