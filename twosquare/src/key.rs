//! Key validation
//!
//! A key is a keyword or key phrase of 1 to 25 ASCII letters (case is
//! ignored) in which no letter appears twice. Because `I` and `J` share a
//! cell of the square, a key may contain one of them but not both.

use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;
use crate::letter::{CharClass, Letter, LETTER_COUNT};

/// A validated key
///
/// Holding a `Key` proves the text passed [`validate_key`], so building a
/// [`Table`](crate::Table) from it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    text: String,
    letters: Vec<Letter>,
}

impl Key {
    /// Validate `key` and keep its letter identities in order
    pub fn new(key: &str) -> Result<Self, KeyError> {
        let letters = parse(key)?;
        Ok(Key {
            text: key.to_ascii_uppercase(),
            letters,
        })
    }

    /// The key's letter identities, I and J already merged
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The key text, upper-cased
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::new(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Check a key against the formatting rules
///
/// Rules are checked in order and the first failure is reported: the key
/// must be non-empty, consist of ASCII letters only, repeat no letter, not
/// hold both `I` and `J`, and be at most twenty-five characters long.
pub fn validate_key(key: &str) -> Result<(), KeyError> {
    parse(key).map(|_| ())
}

fn parse(key: &str) -> Result<Vec<Letter>, KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }

    let mut seen = [false; 26];
    let mut letters = Vec::with_capacity(LETTER_COUNT);

    for (position, character) in key.chars().enumerate() {
        let upper = character.to_ascii_uppercase();

        if let Some(class) = CharClass::of(upper) {
            return Err(KeyError::IllegalCharacter {
                character,
                position,
                class,
            });
        }

        let slot = (upper as u8 - b'A') as usize;
        if seen[slot] {
            return Err(KeyError::DuplicateLetter(upper));
        }
        seen[slot] = true;

        // Checked above: upper is A-Z
        if let Some(letter) = Letter::from_char(upper) {
            letters.push(letter);
        }
    }

    if seen[(b'I' - b'A') as usize] && seen[(b'J' - b'A') as usize] {
        return Err(KeyError::BothIAndJ);
    }

    let length = key.chars().count();
    if length > LETTER_COUNT {
        return Err(KeyError::TooLong(length));
    }

    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        for key in ["astring", "python", "ALGORITHM", "Falcon", "jump", "z"] {
            assert_eq!(validate_key(key), Ok(()), "{}", key);
        }
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(validate_key(""), Err(KeyError::Empty));
    }

    #[test]
    fn test_illegal_characters() {
        let cases = [
            ("two words", ' ', 3, CharClass::Whitespace),
            ("abc123", '1', 3, CharClass::Digit),
            ("key!", '!', 3, CharClass::Punctuation),
            ("café", 'é', 3, CharClass::NonAscii),
            ("tab\tkey", '\t', 3, CharClass::Whitespace),
        ];

        for (key, character, position, class) in cases {
            assert_eq!(
                validate_key(key),
                Err(KeyError::IllegalCharacter {
                    character,
                    position,
                    class
                }),
                "{:?}",
                key
            );
        }
    }

    #[test]
    fn test_duplicate_letters() {
        assert_eq!(validate_key("AABC"), Err(KeyError::DuplicateLetter('A')));
        assert_eq!(validate_key("aBcA"), Err(KeyError::DuplicateLetter('A')));
        assert_eq!(validate_key("hello"), Err(KeyError::DuplicateLetter('L')));
        assert_eq!(
            validate_key(&"A".repeat(26)),
            Err(KeyError::DuplicateLetter('A'))
        );
    }

    #[test]
    fn test_i_and_j_together() {
        assert_eq!(validate_key("IJ"), Err(KeyError::BothIAndJ));
        assert_eq!(validate_key("jim"), Err(KeyError::BothIAndJ));
        assert!(validate_key("ink").is_ok());
        assert!(validate_key("jar").is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // The digit comes before the duplicate
        assert!(matches!(
            validate_key("a1a"),
            Err(KeyError::IllegalCharacter { position: 1, .. })
        ));
        // The duplicate comes before the space
        assert_eq!(validate_key("aa b"), Err(KeyError::DuplicateLetter('A')));
    }

    #[test]
    fn test_longest_key() {
        // 25 distinct letters: the whole alphabet without J
        let key = "ABCDEFGHIKLMNOPQRSTUVWXYZ";
        let parsed = Key::new(key).expect("25 distinct letters is valid");
        assert_eq!(parsed.letters().len(), 25);
    }

    #[test]
    fn test_key_merges_i_and_j() {
        let key = Key::new("jump").unwrap();
        assert_eq!(key.letters()[0], Letter::IJ);
        assert_eq!(key.as_str(), "JUMP");
        assert_eq!(key.to_string(), "JUMP");
    }

    #[test]
    fn test_from_str() {
        let key: Key = "Python".parse().unwrap();
        assert_eq!(key.as_str(), "PYTHON");
        assert!("bad key".parse::<Key>().is_err());
    }
}
