//! Encrypt and decrypt command implementation

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use twosquare::{DecryptOptions, Mode};

use crate::files;
use crate::output::{self, verbose_println};

#[derive(Serialize)]
struct CipherResult<'a> {
    mode: Mode,
    input: &'a str,
    output: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<DecryptOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_to: Option<String>,
}

/// Run the cipher over `message` and print (and optionally save) the result
pub fn run(
    mode: Mode,
    message: &str,
    key1: &str,
    key2: &str,
    options: DecryptOptions,
    save: Option<&Path>,
) -> Result<()> {
    verbose_println(1, &format!("Running {} with two keys", mode));
    if mode == Mode::Decrypt {
        verbose_println(
            2,
            &format!(
                "unmerge_ij = {}, strip_trailing_pad = {}",
                options.unmerge_ij, options.strip_trailing_pad
            ),
        );
    }

    let result = twosquare::transform(mode, message, key1, key2, options)?;

    if let Some(path) = save {
        files::save_message(path, &result)?;
    }

    if output::is_json() {
        output::print_json(&CipherResult {
            mode,
            input: message,
            output: &result,
            options: (mode == Mode::Decrypt).then_some(options),
            saved_to: save.map(|p| p.display().to_string()),
        })?;
    } else {
        println!("{}", result);
        if let Some(path) = save {
            output::status(&format!("Saved to {}", path.display()))?;
        }
    }

    Ok(())
}
