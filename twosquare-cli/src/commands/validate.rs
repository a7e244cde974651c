//! Validation commands

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use twosquare::{Error, MessageKind};

use crate::output;

#[derive(Serialize)]
struct Verdict<'a> {
    subject: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Report a validation outcome; an invalid input becomes the command error
fn report<E>(subject: &str, outcome: std::result::Result<(), E>) -> Result<()>
where
    E: std::error::Error + Send + Sync + 'static,
{
    if output::is_json() {
        output::print_json(&Verdict {
            subject,
            valid: outcome.is_ok(),
            error: outcome.as_ref().err().map(|e| e.to_string()),
        })?;
    } else if outcome.is_ok() {
        println!("{} is valid", subject);
    }

    outcome.map_err(Into::into)
}

/// Check a key against the key rules
pub fn key(key: &str) -> Result<()> {
    report("Key", twosquare::validate_key(key))
}

/// Check a message under the plaintext or ciphertext rules
pub fn message(message: &str, kind: MessageKind) -> Result<()> {
    let outcome =
        twosquare::validate_message(message, kind).map_err(|e| Error::message(kind, e));
    let subject = match kind {
        MessageKind::Plain => "Plaintext",
        MessageKind::Cipher => "Ciphertext",
    };
    report(subject, outcome)
}

/// Check the structure of a square stored as a JSON grid of strings
pub fn table(path: &Path) -> Result<()> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    let outcome = grid_from_json(&value)
        .and_then(|grid| twosquare::validate_table(&grid).map_err(Error::from));
    report("Table", outcome)
}

/// Convert a JSON value into rows of cell labels
fn grid_from_json(value: &Value) -> std::result::Result<Vec<Vec<String>>, Error> {
    let rows = value
        .as_array()
        .ok_or_else(|| Error::TypeMismatch("table must be a list of rows".to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(row, cells)| {
            let cells = cells.as_array().ok_or_else(|| {
                Error::TypeMismatch(format!("table row {} must be a list", row))
            })?;

            cells
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    cell.as_str().map(str::to_string).ok_or_else(|| {
                        Error::TypeMismatch(format!(
                            "table cell at row {}, column {} must be a string, got {}",
                            row, column, cell
                        ))
                    })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use twosquare::{ErrorKind, TableError};

    #[test]
    fn test_grid_from_json() {
        let value = json!([["A", "B"], ["IJ"]]);
        let grid = grid_from_json(&value).unwrap();
        assert_eq!(grid, vec![vec!["A", "B"], vec!["IJ"]]);
    }

    #[test]
    fn test_non_string_cells() {
        for value in [json!("ABCDE"), json!([1, 2]), json!([["A", 1]]), json!([[null]])] {
            let err = grid_from_json(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch, "{}", value);
        }
    }

    #[test]
    fn test_structural_errors_pass_through() {
        let value = json!([["A", "B", "C", "D", "E"]]);
        let grid = grid_from_json(&value).unwrap();
        assert_eq!(
            twosquare::validate_table(&grid).map_err(Error::from),
            Err(Error::Table(TableError::RowCount(1)))
        );
    }
}
