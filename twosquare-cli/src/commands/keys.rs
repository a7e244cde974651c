//! Key storage commands

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use twosquare::{Key, KeyPosition};

use crate::config::{self, Config};
use crate::output;

#[derive(Serialize)]
struct StoredKeys<'a> {
    first: Option<&'a str>,
    second: Option<&'a str>,
}

/// Display the keys stored in the config file
pub fn show(config: &Config) -> Result<()> {
    let keys = StoredKeys {
        first: config.first_key.as_deref(),
        second: config.second_key.as_deref(),
    };

    if output::is_json() {
        output::print_json(&keys)?;
        return Ok(());
    }

    println!("KEY 1: {}", keys.first.unwrap_or("(not set)"));
    println!("KEY 2: {}", keys.second.unwrap_or("(not set)"));
    Ok(())
}

/// Validate `key` and write it to the config file at `path`
pub fn set(mut config: Config, position: KeyPosition, key: &str, path: &Path) -> Result<()> {
    let key = Key::new(key).map_err(|e| twosquare::Error::key(position, e))?;

    match position {
        KeyPosition::First => config.first_key = Some(key.to_string()),
        KeyPosition::Second => config.second_key = Some(key.to_string()),
    }

    config::save_config(&config, path)?;
    output::status(&format!(
        "Stored {} key {} in {}",
        position,
        key,
        path.display()
    ))?;
    Ok(())
}
