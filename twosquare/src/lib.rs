//! # Twosquare - Two-Square Cipher Library
//!
//! An implementation of the two-square cipher, also known as double
//! Playfair. Two keys each produce a 5x5 square of letters; the message is
//! split into two-letter digraphs, and each digraph is substituted by
//! reading the letters at the swapped columns of the two squares. The
//! squares are stacked vertically.
//!
//! The cipher is a historical curiosity, not a way to protect data:
//!
//! - everything but the letters A-Z is dropped from the plaintext
//! - `I` and `J` share one cell, so one of them is lost
//! - an odd-length plaintext is padded with `Z`
//!
//! ## Example
//!
//! ```
//! use twosquare::{DecryptOptions, decrypt, encrypt};
//!
//! # fn main() -> Result<(), twosquare::Error> {
//! let ciphertext = encrypt("Decrypted!", "python", "algo")?;
//! assert_eq!(ciphertext, "BHATOKTEDZ");
//!
//! let plaintext = decrypt(&ciphertext, "python", "algo", DecryptOptions::default())?;
//! assert_eq!(plaintext, "DECRYPTED");
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`Error`]. Use [`Error::kind`] to tell
//! bad input ([`ErrorKind::InvalidValue`], [`ErrorKind::TypeMismatch`]) from
//! a defect in the library ([`ErrorKind::InvariantViolation`]).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod cipher;
pub mod error;
pub mod key;
pub mod letter;
pub mod message;
pub mod table;

// Re-export commonly used types
pub use cipher::{decrypt, encrypt, transform, DecryptOptions, Mode, TwoSquare, PADDING};
pub use error::{Error, ErrorKind, KeyError, KeyPosition, MessageError, Result, TableError};
pub use key::{validate_key, Key};
pub use letter::{CharClass, Letter, ALPHABET, LETTER_COUNT};
pub use message::{validate_ciphertext, validate_message, validate_plaintext, MessageKind};
pub use table::{create_table, validate_table, Table, TABLE_SIZE};
