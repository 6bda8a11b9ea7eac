use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Result, SeqError};

/// Run-length encode a sequence. Each maximal run becomes the symbol, followed by the decimal
/// run length when that length is more than one: `aaabbbcca` -> `a3b3c2a`.
///
/// Digits in the input make the output ambiguous; such input is outside what `run_length_decode`
/// can reverse.
pub fn run_length_encode(sequence: &str) -> String {
    let mut out = String::with_capacity(sequence.len());
    let mut chars = sequence.chars();

    // Empty in, empty out
    let mut current = match chars.next() {
        Some(c) => c,
        None => return out,
    };
    let mut count = 1_usize;

    for c in chars {
        if c == current {
            count += 1;
        } else {
            push_run(&mut out, current, count);
            current = c;
            count = 1;
        }
    }
    // Write out the last run
    push_run(&mut out, current, count);
    out
}

/// Helper for run_length_encode to write one token.
fn push_run(out: &mut String, symbol: char, count: usize) {
    out.push(symbol);
    if count > 1 {
        out.push_str(&count.to_string());
    }
}

/// Iterator over the (symbol, run length) tokens of an encoded stream.
/// All digits directly after a symbol belong to that symbol's count.
pub struct Runs<'a> {
    source: Peekable<Chars<'a>>,
    digits: String,
}

impl<'a> Runs<'a> {
    pub fn new(encoded: &'a str) -> Self {
        Runs {
            source: encoded.chars().peekable(),
            digits: String::new(),
        }
    }

    /// Read one token. The caller has already checked there is a symbol to read.
    fn token(&mut self, symbol: char) -> Result<(char, usize)> {
        if symbol.is_ascii_digit() {
            return Err(SeqError::MalformedInput(format!(
                "run count '{}' has no symbol before it",
                symbol
            )));
        }

        // Greedily take every digit that follows
        self.digits.clear();
        while let Some(&d) = self.source.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            self.digits.push(d);
            self.source.next();
        }

        if self.digits.is_empty() {
            return Ok((symbol, 1));
        }
        let count = self.digits.parse::<usize>().map_err(|_| {
            SeqError::InvalidArgument(format!("run count '{}' is not representable", self.digits))
        })?;
        Ok((symbol, count))
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Result<(char, usize)>;
    fn next(&mut self) -> Option<Self::Item> {
        let symbol = self.source.next()?;
        Some(self.token(symbol))
    }
}

fn too_long(symbol: char, count: usize) -> SeqError {
    SeqError::InvalidArgument(format!(
        "run of {} x '{}' cannot be expanded in memory",
        count, symbol
    ))
}

/// Expand a run-length encoded stream back into the sequence.
pub fn run_length_decode(encoded: &str) -> Result<String> {
    let mut out = String::with_capacity(encoded.len());
    for run in Runs::new(encoded) {
        let (symbol, count) = run?;
        let bytes = count
            .checked_mul(symbol.len_utf8())
            .ok_or_else(|| too_long(symbol, count))?;
        out.try_reserve(bytes).map_err(|_| too_long(symbol, count))?;
        out.extend(std::iter::repeat(symbol).take(count));
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_test() {
        assert_eq!(run_length_encode("aaabbbcca"), "a3b3c2a");
        assert_eq!(run_length_encode("a"), "a");
        assert_eq!(run_length_encode("abc"), "abc");
        assert_eq!(run_length_encode(""), "");
    }

    #[test]
    fn multi_digit_encode_test() {
        let long = "G".repeat(12);
        assert_eq!(run_length_encode(&format!("{}A", long)), "G12A");
    }

    #[test]
    fn decode_test() {
        assert_eq!(run_length_decode("a3b3c2a").unwrap(), "aaabbbcca");
        assert_eq!(run_length_decode("").unwrap(), "");
        assert_eq!(run_length_decode("$").unwrap(), "$");
    }

    #[test]
    fn multi_digit_decode_test() {
        let decoded = run_length_decode("T10a").unwrap();
        assert_eq!(decoded, format!("{}a", "T".repeat(10)));
        assert_eq!(run_length_decode("x120").unwrap().len(), 120);
    }

    #[test]
    fn zero_count_test() {
        assert_eq!(run_length_decode("a0b").unwrap(), "b");
    }

    #[test]
    fn runs_test() {
        let runs = Runs::new("a3b$c12")
            .collect::<Result<Vec<(char, usize)>>>()
            .unwrap();
        assert_eq!(runs, vec![('a', 3), ('b', 1), ('$', 1), ('c', 12)]);
    }

    #[test]
    fn leading_digit_test() {
        assert!(matches!(
            run_length_decode("3a"),
            Err(SeqError::MalformedInput(_))
        ));
    }

    #[test]
    fn unallocatable_run_test() {
        assert!(matches!(
            run_length_decode("a18446744073709551615"),
            Err(SeqError::InvalidArgument(_))
        ));
        assert!(matches!(
            run_length_decode("ab9223372036854775807"),
            Err(SeqError::InvalidArgument(_))
        ));
    }

    #[test]
    fn overflow_count_test() {
        assert!(matches!(
            run_length_decode("a99999999999999999999999999"),
            Err(SeqError::InvalidArgument(_))
        ));
    }
}
