use rayon::prelude::*;

/// Returns a frequency count of the input symbols. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> [u32; 256] {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || [0_u32; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_u32; 256],
                |mut s, f| {
                    s.iter_mut().zip(f.iter()).for_each(|(a, b)| *a += b);
                    s
                },
            )
    } else {
        let mut freqs = [0_u32; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

/// Converts a frequency count into the C-table: for each symbol, the number of symbols in the
/// data that sort strictly before it. This is where that symbol's run starts in the first column.
pub fn cumulative(freq: &[u32; 256]) -> [u32; 256] {
    let mut c_table = [0_u32; 256];
    for i in 0..255 {
        c_table[i + 1] = c_table[i] + freq[i];
    }
    c_table
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn freq_count_test() {
        let f = freqs(b"annb$aa");
        assert_eq!(f[b'a' as usize], 3);
        assert_eq!(f[b'n' as usize], 2);
        assert_eq!(f[b'b' as usize], 1);
        assert_eq!(f[b'$' as usize], 1);
        assert_eq!(f.iter().sum::<u32>(), 7);
    }

    #[test]
    fn freq_count_parallel_matches_serial() {
        let data = b"acgt".repeat(20_000);
        let f = freqs(&data);
        for &sym in b"acgt" {
            assert_eq!(f[sym as usize], 20_000);
        }
    }

    #[test]
    fn cumulative_test() {
        let c = cumulative(&freqs(b"annb$aa"));
        // Sorted: $ a a a b n n
        assert_eq!(c[b'$' as usize], 0);
        assert_eq!(c[b'a' as usize], 1);
        assert_eq!(c[b'b' as usize], 4);
        assert_eq!(c[b'n' as usize], 5);
    }
}
