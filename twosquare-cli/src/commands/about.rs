//! About command implementation

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::output;

const KEYS: &[&str] = &[
    "The two-square cipher uses two keys to encrypt and decrypt messages.",
    "Each key can be a key word or phrase:",
    "* Up to twenty-five letters in length",
    "* ASCII letters only; case is ignored",
    "* Each letter may not be used more than once in a key",
    "* A key may contain either 'I' or 'J', but not both",
    "* No digits, white space, punctuation or special characters",
];

const PLAINTEXT: &[&str] = &[
    "A plaintext message must contain at least one ASCII letter.",
    "* Digits, white space and punctuation are allowed but removed",
    "* Non-printable and non-ASCII characters are not allowed",
    "* 'I' and 'J' share a cell, so decryption cannot tell them apart",
    "* An odd number of letters is padded with a trailing 'Z'",
];

const CIPHERTEXT: &[&str] = &[
    "A ciphertext message may only hold uppercase ASCII letters.",
    "* No white space, digits, punctuation or lowercase letters",
    "* The merged letter is written 'IJ'; every 'J' is dropped before decrypting",
    "* After dropping 'J' the number of letters must be even",
];

const FILES: &[&str] = &[
    "Messages can be loaded from and saved to .txt files.",
    "* No other file type is accepted",
    "* Saving never overwrites an existing file",
    "* The cipher drops everything but letters, so it is unsuitable for general data",
];

#[derive(Serialize)]
struct About {
    name: &'static str,
    version: &'static str,
    keys: &'static [&'static str],
    plaintext: &'static [&'static str],
    ciphertext: &'static [&'static str],
    files: &'static [&'static str],
}

/// Print the rules for keys, messages and files
pub fn about() -> Result<()> {
    let about = About {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        keys: KEYS,
        plaintext: PLAINTEXT,
        ciphertext: CIPHERTEXT,
        files: FILES,
    };

    if output::is_json() {
        output::print_json(&about)?;
        return Ok(());
    }

    println!("twosquare {}", about.version);

    for (title, lines) in [
        ("Keys", KEYS),
        ("Plaintext", PLAINTEXT),
        ("Ciphertext", CIPHERTEXT),
        ("Files", FILES),
    ] {
        println!();
        if output::use_color() {
            println!("{}", title.bold());
        } else {
            println!("{}", title);
        }
        for line in lines {
            println!("  {}", line);
        }
    }

    Ok(())
}
