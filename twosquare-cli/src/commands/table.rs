//! Tables command implementation

use anyhow::Result;
use colored::*;
use serde::Serialize;
use twosquare::{Key, KeyPosition, Table};

use crate::output;

#[derive(Serialize)]
struct NamedTable {
    key: String,
    table: Table,
}

/// Display the two squares the keys produce
pub fn tables(key1: &str, key2: &str) -> Result<()> {
    let first = Key::new(key1).map_err(|e| twosquare::Error::key(KeyPosition::First, e))?;
    let second = Key::new(key2).map_err(|e| twosquare::Error::key(KeyPosition::Second, e))?;

    let named = [
        NamedTable {
            key: first.to_string(),
            table: Table::new(&first),
        },
        NamedTable {
            key: second.to_string(),
            table: Table::new(&second),
        },
    ];

    if output::is_json() {
        output::print_json(&named)?;
        return Ok(());
    }

    for (i, entry) in named.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let title = format!("Table {} (key: {})", i + 1, entry.key);
        if output::use_color() {
            println!("{}", title.bold());
        } else {
            println!("{}", title);
        }
        println!();
        print!("{}", entry.table);
    }

    Ok(())
}
