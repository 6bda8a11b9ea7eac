use log::{debug, trace};

use crate::error::{Result, SeqError};
use crate::tools::freq_count::{cumulative, freqs};
use crate::SENTINEL;

/// Last-to-first mapping over a BWT string.
///
/// `lf[i]` is the first-column row holding the same (symbol, rank) pair as position `i` of the
/// BWT string. It is computed from the C-table as `C[bwt[i]] + rank(i) - 1`, so no composite
/// (symbol, rank) keys are ever hashed.
pub struct LfMap<'a> {
    bwt: &'a [u8],
    lf: Vec<u32>,
    root: usize,
}

impl<'a> LfMap<'a> {
    /// Build the mapping. The BWT string must hold exactly one sentinel.
    pub fn new(bwt: &'a [u8]) -> Result<Self> {
        let freq = freqs(bwt);
        match freq[SENTINEL as usize] {
            1 => {}
            0 => {
                return Err(SeqError::MalformedInput(
                    "BWT string has no sentinel".to_string(),
                ))
            }
            more => {
                return Err(SeqError::MalformedInput(format!(
                    "BWT string has {} sentinels, expected exactly one",
                    more
                )))
            }
        }

        // Start from the C-table and bump each symbol's slot as we meet it, left to right.
        let mut next = cumulative(&freq);
        // The sentinel is unique, so its first-column row is where its bucket starts.
        let root = next[SENTINEL as usize] as usize;

        let mut lf = Vec::with_capacity(bwt.len());
        for &s in bwt {
            lf.push(next[s as usize]);
            next[s as usize] += 1;
        }
        trace!("LF map built for {} symbols, root row {}", bwt.len(), root);

        Ok(Self { bwt, lf, root })
    }

    /// First-column row of the rotation that starts with the sentinel.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Symbol at `row` of the last column.
    pub fn symbol(&self, row: usize) -> u8 {
        self.bwt[row]
    }

    /// One LF step.
    pub fn step(&self, row: usize) -> usize {
        self.lf[row] as usize
    }

    /// Follow the chain `steps` times from the root and return the row reached. Nothing is buffered.
    /// The symbol at that row is the one `steps` places before the sentinel in the original text.
    pub fn walk(&self, steps: usize) -> usize {
        let mut row = self.root;
        for _ in 0..steps {
            row = self.step(row);
        }
        row
    }
}

/// Decode a Burrows-Wheeler-Transform. Returns the original symbols without the sentinel.
pub fn bwt_decode(bwt_in: &[u8]) -> Result<Vec<u8>> {
    let map = LfMap::new(bwt_in)?;

    // Walking the chain yields the text back to front, so fill the output from the end.
    let end = bwt_in.len() - 1;
    let mut out = vec![0_u8; end];
    let mut row = map.root();
    for slot in out.iter_mut().rev() {
        *slot = map.symbol(row);
        row = map.step(row);
    }
    debug!("Decoded BWT of {} symbols", bwt_in.len());
    Ok(out)
}

/// Reconstruct the original sequence from its BWT string.
pub fn bwt_inverse(bwt: &str) -> Result<String> {
    let decoded = bwt_decode(bwt.as_bytes())?;
    String::from_utf8(decoded).map_err(|_| {
        SeqError::MalformedInput("BWT string does not decode to valid text".to_string())
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn banana_inverse_test() {
        assert_eq!(bwt_inverse("annb$aa").unwrap(), "banana");
    }

    #[test]
    fn sentinel_only_test() {
        assert_eq!(bwt_inverse("$").unwrap(), "");
    }

    #[test]
    fn lf_map_banana_test() {
        // Sorted rotations of banana$: $banana, a$banan, ana$ban, anana$b, banana$, na$bana, nana$ba
        let map = LfMap::new(b"annb$aa").unwrap();
        assert_eq!(map.root(), 0);
        assert_eq!(map.lf, vec![1, 5, 6, 4, 0, 2, 3]);
        // Zero steps sits on "$banana", whose last symbol is the final 'a'
        assert_eq!(map.symbol(map.walk(0)), b'a');
        assert_eq!(map.symbol(map.walk(1)), b'n');
        assert_eq!(map.symbol(map.walk(5)), b'b');
        assert_eq!(map.symbol(map.walk(6)), SENTINEL);
    }

    #[test]
    fn missing_sentinel_test() {
        assert!(matches!(
            bwt_inverse("annbaa"),
            Err(SeqError::MalformedInput(_))
        ));
        assert!(matches!(bwt_inverse(""), Err(SeqError::MalformedInput(_))));
    }

    #[test]
    fn extra_sentinel_test() {
        assert!(matches!(
            bwt_inverse("an$b$aa"),
            Err(SeqError::MalformedInput(_))
        ));
    }
}
