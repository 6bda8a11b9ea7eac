use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::{error, info};

use crate::error::{Result, SeqError};

/// Read one sequence per line. Lines are trimmed and blank lines are skipped.
/// Standard IO errors are reported and returned. A file with no sequences is an error.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let f_in = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            error!("Cannot read from the file {}", path.display());
            return Err(e.into());
        }
    };

    let mut sequences = Vec::new();
    for line in BufReader::new(f_in).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            sequences.push(trimmed.to_string());
        }
    }

    if sequences.is_empty() {
        return Err(SeqError::EmptyInput(format!(
            "no valid sequences found in {}",
            path.display()
        )));
    }
    info!("Read {} sequences from {}", sequences.len(), path.display());
    Ok(sequences)
}

/// Write each sequence on its own newline-terminated line, replacing the file.
pub fn write_sequences<P: AsRef<Path>, S: AsRef<str>>(path: P, sequences: &[S]) -> Result<()> {
    let path = path.as_ref();
    let mut f_out = BufWriter::new(File::create(path)?);
    for seq in sequences {
        f_out.write_all(seq.as_ref().as_bytes())?;
        f_out.write_all(b"\n")?;
    }
    f_out.flush()?;
    info!("Wrote {} sequences to {}", sequences.len(), path.display());
    Ok(())
}

/// Size of a file in bytes.
pub fn file_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}
