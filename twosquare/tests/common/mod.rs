//! Shared proptest strategies

#![allow(dead_code)]

use proptest::prelude::*;
use proptest::sample::{select, subsequence};

/// The 25 letters of a square, with I standing for the merged I/J
pub const SQUARE_LETTERS: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Any valid key: 1 to 25 distinct letters in random order and case,
/// using either I or J for the merged letter
pub fn valid_key() -> impl Strategy<Value = String> {
    let letters: Vec<char> = SQUARE_LETTERS.chars().collect();
    (
        subsequence(letters, 1..=25).prop_shuffle(),
        any::<bool>(),
        proptest::collection::vec(any::<bool>(), 25),
    )
        .prop_map(|(letters, use_j, lowercase)| {
            letters
                .into_iter()
                .zip(lowercase)
                .map(|(c, lower)| {
                    let c = if c == 'I' && use_j { 'J' } else { c };
                    if lower { c.to_ascii_lowercase() } else { c }
                })
                .collect::<String>()
        })
}

/// Uppercase plaintext of even length without I or J, which survives a
/// raw round trip unchanged
pub fn lossless_plaintext() -> impl Strategy<Value = String> {
    let letters: Vec<char> = SQUARE_LETTERS.chars().filter(|&c| c != 'I').collect();
    proptest::collection::vec((select(letters.clone()), select(letters)), 1..40).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .flat_map(|(a, b)| [a, b])
                .collect::<String>()
        },
    )
}

/// Any letter of the merged alphabet, as a character
pub fn square_letter() -> impl Strategy<Value = char> {
    select(SQUARE_LETTERS.chars().collect::<Vec<_>>())
}
