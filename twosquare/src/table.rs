//! Playfair squares
//!
//! A [`Table`] is a 5x5 grid holding each of the 25 letter identities
//! exactly once. It is built from a [`Key`]: the key's letters fill the grid
//! row by row, followed by the rest of the alphabet in order.
//!
//! ```
//! use twosquare::{Key, Table};
//!
//! let key = Key::new("python").unwrap();
//! let table = Table::new(&key);
//!
//! assert_eq!(table.locate_char('P'), Some((0, 0)));
//! assert_eq!(table.locate_char('J'), Some((2, 3)));
//! ```

use std::fmt;

use crate::error::{KeyError, TableError};
use crate::key::Key;
use crate::letter::{Letter, ALPHABET, LETTER_COUNT};

/// Number of rows and columns in a square
pub const TABLE_SIZE: usize = 5;

/// Upper bound on the letters a raw grid may hold (25 cells, one of them
/// the two-letter `IJ`)
const MAX_TABLE_LETTERS: usize = 26;

/// A 5x5 Playfair square
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Table {
    cells: [[Letter; TABLE_SIZE]; TABLE_SIZE],
}

impl Table {
    /// Build the square for a validated key
    ///
    /// The key's letters are placed first, in key order, then the remaining
    /// letters of the merged alphabet in alphabetical order. The same key
    /// always yields the same square.
    pub fn new(key: &Key) -> Self {
        let mut in_key = [false; LETTER_COUNT];
        for letter in key.letters() {
            in_key[letter.index()] = true;
        }

        let remaining = ALPHABET.iter().filter(|letter| !in_key[letter.index()]);
        let mut fill = key.letters().iter().chain(remaining).copied();

        let mut cells = [[Letter::IJ; TABLE_SIZE]; TABLE_SIZE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                // A key holds no duplicates, so key + remaining is exactly 25
                if let Some(letter) = fill.next() {
                    *cell = letter;
                }
            }
        }

        Table { cells }
    }

    /// Find the (row, column) of a letter identity
    ///
    /// Rows are scanned top to bottom and each row left to right. `None`
    /// means the table does not hold the letter, which never happens for a
    /// table built by [`Table::new`].
    pub fn locate(&self, letter: Letter) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&cell| cell == letter)
                .map(|column| (row, column))
        })
    }

    /// Find the (row, column) of a character, treating `I` and `J` as the
    /// same letter. Returns `None` for non-letters.
    pub fn locate_char(&self, c: char) -> Option<(usize, usize)> {
        Letter::from_char(c).and_then(|letter| self.locate(letter))
    }

    /// The letter at (row, column), if both are in range
    pub fn get(&self, row: usize, column: usize) -> Option<Letter> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// The rows of the square
    pub fn rows(&self) -> &[[Letter; TABLE_SIZE]; TABLE_SIZE] {
        &self.cells
    }

    /// The square as a grid of cell labels (`"IJ"` for the merged letter)
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|letter| letter.as_str().to_string()).collect())
            .collect()
    }
}

impl From<&Key> for Table {
    fn from(key: &Key) -> Self {
        Table::new(key)
    }
}

/// Each cell is right-aligned in six columns and rows are separated by two
/// blank lines.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            for letter in row {
                write!(f, "{:>6}", letter.as_str())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Validate a key and build its square
pub fn create_table(key: &str) -> Result<Table, KeyError> {
    Key::new(key).map(|key| Table::new(&key))
}

/// Check the structure of a raw grid of cell labels
///
/// A valid grid has exactly 5 rows of 5 cells; every cell is one or two
/// uppercase ASCII letters; no cell repeats; and the cells hold at most 26
/// letters in total.
pub fn validate_table<R, S>(table: &[R]) -> Result<(), TableError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    if table.len() != TABLE_SIZE {
        return Err(TableError::RowCount(table.len()));
    }

    let mut letters_in_table: Vec<&str> = Vec::with_capacity(LETTER_COUNT);
    let mut letter_count = 0;

    for (row, cells) in table.iter().enumerate() {
        let cells = cells.as_ref();
        if cells.len() != TABLE_SIZE {
            return Err(TableError::ColumnCount {
                row,
                count: cells.len(),
            });
        }

        for (column, cell) in cells.iter().enumerate() {
            let cell = cell.as_ref();
            let well_formed = (1..=2).contains(&cell.len())
                && cell.bytes().all(|b| b.is_ascii_uppercase());

            if !well_formed {
                return Err(TableError::BadCell {
                    row,
                    column,
                    cell: cell.to_string(),
                });
            }

            if letters_in_table.contains(&cell) {
                return Err(TableError::DuplicateCell(cell.to_string()));
            }
            letters_in_table.push(cell);

            letter_count += cell.len();
            if letter_count > MAX_TABLE_LETTERS {
                return Err(TableError::TooManyLetters(letter_count));
            }
        }
    }

    Ok(())
}
