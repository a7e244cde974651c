//! The merged 25-letter alphabet used by the cipher squares.
//!
//! A Playfair square only has room for 25 symbols, so the letters `I` and
//! `J` share a single cell. [`Letter`] models that merged identity directly:
//! there are exactly 25 values, and converting `'I'` or `'J'` yields the same
//! one. Going back from the merged identity to a single character is lossy
//! and happens only at the output boundary.

use std::fmt;

/// Number of distinct letter identities in a square.
pub const LETTER_COUNT: usize = 25;

/// One of the 25 letter identities of the merged alphabet (A-H, IJ, K-Z).
///
/// Internally stored as the uppercase ASCII byte of the letter, with the
/// merged identity stored as `b'I'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// The merged alphabet in standard order.
pub const ALPHABET: [Letter; LETTER_COUNT] = build_alphabet();

const fn build_alphabet() -> [Letter; LETTER_COUNT] {
    let mut letters = [Letter(b'A'); LETTER_COUNT];
    let mut byte = b'A';
    let mut index = 0;

    while byte <= b'Z' {
        if byte != b'J' {
            letters[index] = Letter(byte);
            index += 1;
        }
        byte += 1;
    }

    letters
}

impl Letter {
    /// The merged I/J identity
    pub const IJ: Letter = Letter(b'I');

    /// Converts an ASCII letter of either case to its identity.
    ///
    /// Both `'I'` and `'J'` map to [`Letter::IJ`]. Returns `None` for
    /// anything that is not an ASCII letter.
    pub fn from_char(c: char) -> Option<Letter> {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        match c.to_ascii_uppercase() as u8 {
            b'J' => Some(Letter::IJ),
            byte => Some(Letter(byte)),
        }
    }

    /// Parses a table cell label (`"A"`, `"IJ"`, a lone `"I"` or `"J"`).
    pub fn from_label(label: &str) -> Option<Letter> {
        match label {
            "IJ" => Some(Letter::IJ),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => Letter::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Whether this is the merged I/J identity
    pub fn is_merged(self) -> bool {
        self == Letter::IJ
    }

    /// The label of this identity as it appears in a square: `"IJ"` for the
    /// merged letter, the single uppercase letter otherwise.
    pub fn as_str(self) -> &'static str {
        const LABELS: [&str; 26] = [
            "A", "B", "C", "D", "E", "F", "G", "H", "IJ", "J", "K", "L", "M", "N", "O", "P", "Q",
            "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
        ];
        LABELS[(self.0 - b'A') as usize]
    }

    /// Collapses the identity to one character, writing the merged letter
    /// as `'I'`.
    pub fn to_char(self) -> char {
        self.0 as char
    }

    /// Position of this identity within [`ALPHABET`].
    pub fn index(self) -> usize {
        let offset = (self.0 - b'A') as usize;
        if self.0 > b'J' { offset - 1 } else { offset }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Letter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Class of a character that a validator refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CharClass {
    /// Space, tab, newline and friends
    Whitespace,
    /// ASCII digit
    Digit,
    /// ASCII punctuation or symbol
    Punctuation,
    /// Lowercase ASCII letter
    Lowercase,
    /// Anything outside the ASCII range
    NonAscii,
    /// ASCII control character
    NonPrintable,
}

impl CharClass {
    /// Classifies a character that is not an uppercase ASCII letter.
    ///
    /// Returns `None` for `A`-`Z`.
    pub fn of(c: char) -> Option<CharClass> {
        if c.is_ascii_uppercase() {
            None
        } else if !c.is_ascii() {
            Some(CharClass::NonAscii)
        } else if c.is_ascii_whitespace() {
            Some(CharClass::Whitespace)
        } else if c.is_ascii_control() {
            Some(CharClass::NonPrintable)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lowercase)
        } else {
            Some(CharClass::Punctuation)
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Whitespace => "white space",
            CharClass::Digit => "digit",
            CharClass::Punctuation => "punctuation or special character",
            CharClass::Lowercase => "lowercase letter",
            CharClass::NonAscii => "non-ASCII character",
            CharClass::NonPrintable => "non-printable character",
        };
        f.write_str(name)
    }
}
