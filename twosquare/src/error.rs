//! Error types for the two-square cipher

use std::fmt;
use thiserror::Error;

use crate::letter::CharClass;
use crate::message::MessageKind;

/// Reasons a key is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key has no characters
    #[error("Key must not be empty")]
    Empty,

    /// The key holds something other than an ASCII letter
    #[error("Key cannot contain {class} ({character:?} at position {position}); only ASCII letters are allowed")]
    IllegalCharacter {
        /// The refused character
        character: char,
        /// Its character index in the key
        position: usize,
        /// What kind of character it is
        class: CharClass,
    },

    /// A letter appears twice (case ignored)
    #[error("Key must not contain duplicate letters ({0} repeats)")]
    DuplicateLetter(char),

    /// Both I and J appear; they share a cell
    #[error("Key may contain 'I' or 'J', but not both")]
    BothIAndJ,

    /// More than 25 characters
    #[error("Key cannot contain more than twenty-five characters (got {0})")]
    TooLong(usize),
}

/// Reasons a plaintext or ciphertext is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// The message has no characters
    #[error("Message is empty")]
    Empty,

    /// A plaintext without a single ASCII letter
    #[error("Message contains no letters")]
    NoLetters,

    /// A character the message rules refuse
    #[error("Message cannot contain {class} ({character:?} at position {position})")]
    IllegalCharacter {
        /// The refused character
        character: char,
        /// Its character index in the message
        position: usize,
        /// What kind of character it is
        class: CharClass,
    },

    /// A ciphertext that cannot be split into digraphs
    #[error("Uneven number of letters ({0}) after removing J")]
    OddLength(usize),

    /// A ciphertext made only of J
    #[error("No letters remain after removing J")]
    NothingToDecrypt,
}

/// Structural problems found in a raw table grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Not exactly five rows
    #[error("Illegal number of rows in table: {0}")]
    RowCount(usize),

    /// A row without exactly five cells
    #[error("Illegal number of columns in table row {row}: {count}")]
    ColumnCount {
        /// Index of the row
        row: usize,
        /// Number of cells found
        count: usize,
    },

    /// A cell that is not one or two uppercase ASCII letters
    #[error("Bad table data at row {row}, column {column}: {cell:?}")]
    BadCell {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        column: usize,
        /// The cell contents
        cell: String,
    },

    /// The same cell label appears twice
    #[error("Table contains duplicate letters: {0}")]
    DuplicateCell(String),

    /// The cells add up to more than 26 letters
    #[error("Table contains more than 26 letters ({0})")]
    TooManyLetters(usize),
}

/// Which of the two keys an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPosition {
    /// The key of the upper square
    First,
    /// The key of the lower square
    Second,
}

impl fmt::Display for KeyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPosition::First => f.write_str("first"),
            KeyPosition::Second => f.write_str("second"),
        }
    }
}

/// Broad class of an [`Error`]
///
/// `TypeMismatch` and `InvalidValue` are problems with caller input and can
/// be fixed by asking again. `InvariantViolation` means the library itself is
/// broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input of the wrong type
    TypeMismatch,
    /// Input of the right type that breaks a rule
    InvalidValue,
    /// A broken internal guarantee
    InvariantViolation,
}

/// Main error type for the two-square cipher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input of the wrong type, such as a non-string table cell
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// One of the two keys is invalid
    #[error("Invalid {position} key: {source}")]
    Key {
        /// Which key
        position: KeyPosition,
        /// Why it was refused
        #[source]
        source: KeyError,
    },

    /// The plaintext or ciphertext is invalid
    #[error("Invalid {kind}: {source}")]
    Message {
        /// Which rules the message was checked against
        kind: MessageKind,
        /// Why it was refused
        #[source]
        source: MessageError,
    },

    /// A raw table grid is malformed
    #[error("Invalid table: {0}")]
    Table(#[from] TableError),

    /// Any other refused value, such as an unknown mode name
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A defect in the library
    #[error("Internal error: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Create a key error for the given key slot
    pub fn key(position: KeyPosition, source: KeyError) -> Self {
        Error::Key { position, source }
    }

    /// Create a message error for the given message kind
    pub fn message(kind: MessageKind, source: MessageError) -> Self {
        Error::Message { kind, source }
    }

    /// Create an invariant violation error
    pub fn invariant<S: Into<String>>(msg: S) -> Self {
        Error::InvariantViolation(msg.into())
    }

    /// The broad class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Error::Key { .. }
            | Error::Message { .. }
            | Error::Table(_)
            | Error::InvalidValue(_) => ErrorKind::InvalidValue,
            Error::InvariantViolation(_) => ErrorKind::InvariantViolation,
        }
    }

    /// Whether fixing the input can make the operation succeed
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::InvariantViolation
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, Error>;
