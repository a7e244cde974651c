//! Loading and saving messages as text files
//!
//! Only `.txt` files are accepted. Saving never overwrites an existing file.

use anyhow::{bail, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

fn check_extension(path: &Path) -> Result<()> {
    match path.extension() {
        Some(ext) if ext == "txt" => Ok(()),
        _ => bail!("File must be a .txt file: {}", path.display()),
    }
}

/// Read a message from an existing `.txt` file
pub fn load_message(path: &Path) -> Result<String> {
    check_extension(path)?;

    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let message = fs::read_to_string(path)
        .with_context(|| format!("Could not load {}", path.display()))?;

    if message.is_empty() {
        bail!("File is empty: {}", path.display());
    }

    log::info!("Loaded {} bytes from {}", message.len(), path.display());
    Ok(message)
}

/// Write a message to a new `.txt` file
pub fn save_message(path: &Path, message: &str) -> Result<()> {
    check_extension(path)?;

    if message.is_empty() {
        bail!("Message cannot be empty");
    }

    // create_new fails if the file appeared in the meantime
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| {
            if path.exists() {
                format!("A file with that name already exists: {}", path.display())
            } else {
                format!("Could not save {}", path.display())
            }
        })?;

    file.write_all(message.as_bytes())
        .with_context(|| format!("Could not save {}", path.display()))?;

    log::info!("Saved {} bytes to {}", message.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("message.txt");

        save_message(&path, "OMRCOIJOMBBXM").unwrap();
        assert_eq!(load_message(&path).unwrap(), "OMRCOIJOMBBXM");
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("message.txt");
        fs::write(&path, "original").unwrap();

        let err = save_message(&path, "replacement").unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_only_txt_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("message.md");

        assert!(save_message(&path, "HELLO").is_err());
        assert!(!path.exists());

        fs::write(&path, "HELLO").unwrap();
        assert!(load_message(&path).is_err());
        assert!(load_message(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_load_missing_or_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(load_message(&missing).is_err());

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "").unwrap();
        assert!(load_message(&empty).is_err());
    }
}
