use crate::access::column::{retrieve_column, retrieve_column_from_end};
use crate::access::row::retrieve_row;
use crate::bwt_algorithms::bwt_sort::bwt_transform;
use crate::bwt_algorithms::lf_map::bwt_inverse;
use crate::compression::compress::compress_sequences;
use crate::compression::decompress::decompress_sequences;
use crate::tools::rle::{run_length_decode, run_length_encode};
use crate::{PLACEHOLDER, SENTINEL};
use proptest::prelude::*;

proptest! {
    /// Property 1: The inverse undoes the transform.
    #[test]
    fn prop_bwt_roundtrip(input in "[-A-Za-z.,;:!?]{0,64}") {
        let bwt = bwt_transform(&input).unwrap();
        prop_assert_eq!(bwt_inverse(&bwt).unwrap(), input);
    }

    /// Property 2: The transform is a permutation of the input plus one sentinel.
    #[test]
    fn prop_bwt_permutation(input in "[ACGT]{0,64}") {
        let bwt = bwt_transform(&input).unwrap();
        prop_assert_eq!(bwt.len(), input.len() + 1);
        prop_assert_eq!(bwt.bytes().filter(|&b| b == SENTINEL).count(), 1);

        let mut expected = format!("{}$", input).into_bytes();
        expected.sort_unstable();
        let mut got = bwt.into_bytes();
        got.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    /// Property 3: RLE round trip for digit-free input.
    #[test]
    fn prop_rle_roundtrip(input in "[-a-zA-Z$ ]{0,128}") {
        let encoded = run_length_encode(&input);
        prop_assert!(encoded.len() <= input.len() * 2);
        prop_assert_eq!(run_length_decode(&encoded).unwrap(), input);
    }

    /// Property 4: Every row comes back.
    #[test]
    fn prop_rows(rows in prop::collection::vec("[ACGT]{0,24}", 1..8)) {
        let compressed = compress_sequences(&rows).unwrap();
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(&retrieve_row(i as i64, &compressed).unwrap(), row);
        }
        prop_assert!(retrieve_row(rows.len() as i64, &compressed).is_err());
    }

    /// Property 5: A column is the symbol at that position of every row, or the placeholder
    /// once the position is past the end of the transform.
    #[test]
    fn prop_columns(rows in prop::collection::vec("[ACGT]{0,16}", 1..8), position in 0_usize..20) {
        let compressed = compress_sequences(&rows).unwrap();
        let column = retrieve_column(position as i64, &compressed).unwrap().into_bytes();
        let from_end = retrieve_column_from_end(position as i64, &compressed).unwrap().into_bytes();
        prop_assert_eq!(column.len(), rows.len());

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_bytes();
            let (start, end) = if position < row.len() {
                (row[position], row[row.len() - 1 - position])
            } else if position == row.len() {
                (SENTINEL, SENTINEL)
            } else {
                (PLACEHOLDER, PLACEHOLDER)
            };
            prop_assert_eq!(column[i], start);
            prop_assert_eq!(from_end[i], end);
        }
    }

    /// Property 6: Compressing the decompressed output gives the same store again.
    #[test]
    fn prop_second_pass(rows in prop::collection::vec("[ACGT ]{0,32}", 1..6)) {
        let first = compress_sequences(&rows).unwrap();
        let second = compress_sequences(&decompress_sequences(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
