//! Plaintext and ciphertext validation
//!
//! Plaintext is lenient: any printable ASCII text with at least one letter
//! is accepted, and everything that is not a letter is dropped later during
//! encryption. Ciphertext is strict: uppercase ASCII letters only.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, MessageError};
use crate::letter::CharClass;

/// Which rule set a message is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MessageKind {
    /// Text to be encrypted
    Plain,
    /// Text to be decrypted
    Cipher,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Plain => f.write_str("plaintext"),
            MessageKind::Cipher => f.write_str("ciphertext"),
        }
    }
}

impl FromStr for MessageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "p" => Ok(MessageKind::Plain),
            "cipher" | "c" => Ok(MessageKind::Cipher),
            _ => Err(Error::InvalidValue(format!(
                "unknown message kind {:?}, expected 'plain' or 'cipher'",
                s
            ))),
        }
    }
}

/// Validate a message under the rules for `kind`
pub fn validate_message(message: &str, kind: MessageKind) -> Result<(), MessageError> {
    match kind {
        MessageKind::Plain => validate_plaintext(message),
        MessageKind::Cipher => validate_ciphertext(message),
    }
}

/// Validate a plaintext message
///
/// Requirements:
/// - non-empty, with at least one ASCII letter
/// - ASCII only; no non-printable characters
///
/// Digits, punctuation and white space are allowed but will be ignored by
/// encryption.
pub fn validate_plaintext(message: &str) -> Result<(), MessageError> {
    if message.is_empty() {
        return Err(MessageError::Empty);
    }

    let mut contains_a_letter = false;

    for (position, character) in message.chars().enumerate() {
        if !is_printable(character) {
            let class = if character.is_ascii() {
                CharClass::NonPrintable
            } else {
                CharClass::NonAscii
            };
            return Err(MessageError::IllegalCharacter {
                character,
                position,
                class,
            });
        }

        if character.is_ascii_alphabetic() {
            contains_a_letter = true;
        }
    }

    if !contains_a_letter {
        return Err(MessageError::NoLetters);
    }

    Ok(())
}

/// Validate a ciphertext message
///
/// Every character must be an uppercase ASCII letter. White space, digits,
/// punctuation, lowercase letters and non-ASCII characters are all refused.
pub fn validate_ciphertext(message: &str) -> Result<(), MessageError> {
    if message.is_empty() {
        return Err(MessageError::Empty);
    }

    for (position, character) in message.chars().enumerate() {
        if let Some(class) = CharClass::of(character) {
            return Err(MessageError::IllegalCharacter {
                character,
                position,
                class,
            });
        }
    }

    Ok(())
}

// Visible ASCII plus space, tab, newline, carriage return, vertical tab, form feed
fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
