//! The two-square digraph transform
//!
//! Both directions run through the same pipeline:
//!
//! 1. validate both keys and the message
//! 2. normalize the message to a list of letter identities
//! 3. split it into digraphs
//! 4. build one square per key
//! 5. substitute each digraph using the two squares
//!
//! For a digraph `(a, b)`, `a` is looked up in the first square at
//! `(r1, c1)` and `b` in the second at `(r2, c2)`. When the columns differ
//! they are swapped and the output is `first[r1][c2]`, `second[r2][c1]`.
//! When the columns are equal the digraph passes through unchanged.
//! Swapping columns twice gives back the original cells, which is why the
//! same substitution both encrypts and decrypts.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, KeyPosition, MessageError, Result};
use crate::key::Key;
use crate::letter::Letter;
use crate::message::{validate_message, MessageKind};
use crate::table::Table;

/// Letter appended to a plaintext with an odd number of letters
pub const PADDING: char = 'Z';

/// Direction of a cipher operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Mode {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl Mode {
    /// The message rules that apply to this mode's input
    pub fn message_kind(self) -> MessageKind {
        match self {
            Mode::Encrypt => MessageKind::Plain,
            Mode::Decrypt => MessageKind::Cipher,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => f.write_str("encrypt"),
            Mode::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "e" | "encrypt" => Ok(Mode::Encrypt),
            "d" | "decrypt" => Ok(Mode::Decrypt),
            _ => Err(Error::InvalidValue(format!(
                "unknown mode {:?}, expected 'encrypt' or 'decrypt'",
                s
            ))),
        }
    }
}

/// Post-processing applied to decrypted text
///
/// Both steps are lossy guesses and both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecryptOptions {
    /// Write the merged I/J letter as `I` instead of `IJ`. Whether the
    /// original letter was I or J cannot be recovered.
    pub unmerge_ij: bool,

    /// Drop one trailing `Z`, assumed to be encryption padding. A genuine
    /// trailing Z is dropped as well.
    pub strip_trailing_pad: bool,
}

impl Default for DecryptOptions {
    fn default() -> Self {
        DecryptOptions {
            unmerge_ij: true,
            strip_trailing_pad: true,
        }
    }
}

impl DecryptOptions {
    /// Options that keep the raw substitution output untouched
    pub fn raw() -> Self {
        DecryptOptions {
            unmerge_ij: false,
            strip_trailing_pad: false,
        }
    }
}

/// A pair of squares built from two keys
///
/// Building the squares once and reusing them gives the same results as
/// calling [`encrypt`] and [`decrypt`] with the keys every time.
///
/// ```
/// use twosquare::{DecryptOptions, TwoSquare};
///
/// let cipher = TwoSquare::from_keys("python", "algo")?;
/// assert_eq!(cipher.encrypt("decrypted")?, "BHATOKTEDZ");
/// assert_eq!(cipher.decrypt("BHATOKTEDZ", DecryptOptions::default())?, "DECRYPTED");
/// # Ok::<(), twosquare::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoSquare {
    first: Table,
    second: Table,
}

impl TwoSquare {
    /// Build both squares
    pub fn new(first: &Key, second: &Key) -> Self {
        TwoSquare {
            first: Table::new(first),
            second: Table::new(second),
        }
    }

    /// Validate both keys and build their squares
    pub fn from_keys(first: &str, second: &str) -> Result<Self> {
        let (first, second) = parse_keys(first, second)?;
        Ok(TwoSquare::new(&first, &second))
    }

    /// The square built from the first key
    pub fn first(&self) -> &Table {
        &self.first
    }

    /// The square built from the second key
    pub fn second(&self) -> &Table {
        &self.second
    }

    /// Encrypt a plaintext
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.run(Mode::Encrypt, plaintext, DecryptOptions::default())
    }

    /// Decrypt a ciphertext
    pub fn decrypt(&self, ciphertext: &str, options: DecryptOptions) -> Result<String> {
        self.run(Mode::Decrypt, ciphertext, options)
    }

    /// Substitute a single digraph
    ///
    /// Fails with [`Error::InvariantViolation`] if a letter is missing from
    /// its square.
    pub fn substitute(&self, a: Letter, b: Letter) -> Result<(Letter, Letter)> {
        self.lookup(a, b).map(Substitution::letters)
    }

    fn lookup(&self, a: Letter, b: Letter) -> Result<Substitution> {
        let (r1, c1) = self
            .first
            .locate(a)
            .ok_or_else(|| Error::invariant(format!("letter {} missing from first table", a)))?;
        let (r2, c2) = self
            .second
            .locate(b)
            .ok_or_else(|| Error::invariant(format!("letter {} missing from second table", b)))?;

        if c1 == c2 {
            log::trace!("Digraph {}{} shares column {}, unchanged", a, b, c1);
            return Ok(Substitution::Unchanged(a, b));
        }

        Ok(Substitution::Swapped(
            self.first.rows()[r1][c2],
            self.second.rows()[r2][c1],
        ))
    }

    fn run(&self, mode: Mode, message: &str, options: DecryptOptions) -> Result<String> {
        let kind = mode.message_kind();
        validate_message(message, kind).map_err(|e| Error::message(kind, e))?;

        let letters = normalize(mode, message).map_err(|e| Error::message(kind, e))?;
        self.apply(mode, &letters, options)
    }

    fn apply(&self, mode: Mode, letters: &[Letter], options: DecryptOptions) -> Result<String> {
        let digraphs = split_digraphs(letters)?;
        log::debug!("{}: {} digraphs", mode, digraphs.len());

        let mut text = String::with_capacity(letters.len() + 2);
        for &(a, b) in &digraphs {
            let substitution = self.lookup(a, b)?;
            let swapped = matches!(substitution, Substitution::Swapped(..));
            let (x, y) = substitution.letters();
            push_letter(&mut text, x, swapped, mode, options);
            push_letter(&mut text, y, swapped, mode, options);
        }

        if mode == Mode::Decrypt && options.strip_trailing_pad && text.ends_with(PADDING) {
            text.pop();
        }

        Ok(text)
    }
}

/// Result of looking up one digraph in the two squares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Substitution {
    /// Columns differed; letters read from the swapped cells
    Swapped(Letter, Letter),
    /// Same column; input letters kept
    Unchanged(Letter, Letter),
}

impl Substitution {
    fn letters(self) -> (Letter, Letter) {
        match self {
            Substitution::Swapped(x, y) | Substitution::Unchanged(x, y) => (x, y),
        }
    }
}

/// Encrypt or decrypt `message` with two keys
///
/// The keys and message are validated first; any problem is reported before
/// any text is produced. `options` only affects decryption.
pub fn transform(
    mode: Mode,
    message: &str,
    key1: &str,
    key2: &str,
    options: DecryptOptions,
) -> Result<String> {
    let (first, second) = parse_keys(key1, key2)?;

    let kind = mode.message_kind();
    validate_message(message, kind).map_err(|e| Error::message(kind, e))?;

    let letters = normalize(mode, message).map_err(|e| Error::message(kind, e))?;

    TwoSquare::new(&first, &second).apply(mode, &letters, options)
}

/// Encrypt a plaintext
///
/// The plaintext is upper-cased and everything but the letters A-Z is
/// dropped. If an odd number of letters remains, a `Z` is appended. A
/// merged I/J letter read from a square is written as `IJ` in the
/// ciphertext.
///
/// A `J` in a digraph that passes through unchanged is written as `I`, so
/// `"JF"` under the keys `python` and `algo` encrypts to `"IF"`.
///
/// ```
/// assert_eq!(twosquare::encrypt("decrypted", "python", "algo")?, "BHATOKTEDZ");
/// # Ok::<(), twosquare::Error>(())
/// ```
///
/// ```
/// assert_eq!(twosquare::encrypt("JF", "python", "algo")?, "IF");
/// # Ok::<(), twosquare::Error>(())
/// ```
pub fn encrypt(plaintext: &str, key1: &str, key2: &str) -> Result<String> {
    transform(Mode::Encrypt, plaintext, key1, key2, DecryptOptions::default())
}

/// Decrypt a ciphertext
///
/// Every `J` is removed from the ciphertext before decryption, since the
/// merged letter is written as `IJ`. The remaining letters must be even in
/// number. The keys must be the ones used to encrypt, in the same order.
///
/// ```
/// use twosquare::DecryptOptions;
///
/// let plain = twosquare::decrypt("BHATOKTEDZ", "python", "algo", DecryptOptions::default())?;
/// assert_eq!(plain, "DECRYPTED");
///
/// let raw = twosquare::decrypt("BHATOKTEDZ", "python", "algo", DecryptOptions::raw())?;
/// assert_eq!(raw, "DECRYPTEDZ");
/// # Ok::<(), twosquare::Error>(())
/// ```
pub fn decrypt(
    ciphertext: &str,
    key1: &str,
    key2: &str,
    options: DecryptOptions,
) -> Result<String> {
    transform(Mode::Decrypt, ciphertext, key1, key2, options)
}

fn parse_keys(first: &str, second: &str) -> Result<(Key, Key)> {
    let first = Key::new(first).map_err(|e| Error::key(KeyPosition::First, e))?;
    let second = Key::new(second).map_err(|e| Error::key(KeyPosition::Second, e))?;
    Ok((first, second))
}

/// Reduce a validated message to the letters the cipher works on
fn normalize(mode: Mode, message: &str) -> std::result::Result<Vec<Letter>, MessageError> {
    match mode {
        Mode::Encrypt => {
            let mut letters: Vec<Letter> = message.chars().filter_map(Letter::from_char).collect();

            if letters.len() % 2 != 0 {
                log::debug!("Odd number of letters, padding with {}", PADDING);
                letters.extend(Letter::from_char(PADDING));
            }

            Ok(letters)
        }
        Mode::Decrypt => {
            let dropped = message.chars().filter(|&c| c == 'J').count();
            if dropped > 0 {
                log::debug!("Removed {} J from ciphertext", dropped);
            }

            let letters: Vec<Letter> = message
                .chars()
                .filter(|&c| c != 'J')
                .filter_map(Letter::from_char)
                .collect();

            if letters.is_empty() {
                return Err(MessageError::NothingToDecrypt);
            }
            if letters.len() % 2 != 0 {
                return Err(MessageError::OddLength(letters.len()));
            }

            Ok(letters)
        }
    }
}

fn split_digraphs(letters: &[Letter]) -> Result<Vec<(Letter, Letter)>> {
    if letters.len() % 2 != 0 {
        return Err(Error::invariant(format!(
            "cannot split {} letters into digraphs",
            letters.len()
        )));
    }

    Ok(letters
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect())
}

/// Append one output letter
///
/// A merged letter read from a square is written `IJ`, or `I` when
/// decrypting with `unmerge_ij`. A merged letter that passed through
/// unchanged is written `I`, as it was read from the message.
fn push_letter(text: &mut String, letter: Letter, swapped: bool, mode: Mode, options: DecryptOptions) {
    let unmerge = !swapped || (mode == Mode::Decrypt && options.unmerge_ij);
    if unmerge {
        text.push(letter.to_char());
    } else {
        text.push_str(letter.as_str());
    }
}
