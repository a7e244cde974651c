//! Integration tests for config file handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn twosquare(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("twosquare").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_keys_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("twosquare.toml");
    fs::write(&config, "first_key = \"python\"\nsecond_key = \"algo\"\n").unwrap();

    twosquare(&home)
        .arg("--config")
        .arg(&config)
        .args(["encrypt", "decrypted"])
        .assert()
        .success()
        .stdout("BHATOKTEDZ\n");

    // Command-line keys win over the config file
    twosquare(&home)
        .arg("--config")
        .arg(&config)
        .args(["encrypt", "cat", "-k", "falcon", "-K", "osprey"])
        .assert()
        .success()
        .stdout("ACUX\n");
}

#[test]
fn test_config_in_home_directory() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".twosquare");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.toml"),
        "first_key = \"falcon\"\nsecond_key = \"osprey\"\nstrip_trailing_pad = false\n",
    )
    .unwrap();

    twosquare(&home)
        .args(["decrypt", "ACUX"])
        .assert()
        .success()
        .stdout("CATZ\n");
}

#[test]
fn test_default_output_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("twosquare.toml");
    fs::write(&config, "default_output = \"json\"\n").unwrap();

    twosquare(&home)
        .arg("-c")
        .arg(&config)
        .args(["validate-key", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));

    fs::write(&config, "default_output = \"yaml\"\n").unwrap();
    twosquare(&home)
        .arg("-c")
        .arg(&config)
        .args(["validate-key", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_output"));
}

#[test]
fn test_set_key_and_show() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("keys.toml");

    twosquare(&home)
        .arg("-c")
        .arg(&config)
        .args(["set-key", "falcon"])
        .assert()
        .success();

    twosquare(&home)
        .arg("-c")
        .arg(&config)
        .args(["set-key", "osprey", "--second"])
        .assert()
        .success();

    twosquare(&home)
        .arg("-c")
        .arg(&config)
        .arg("keys")
        .assert()
        .success()
        .stdout("KEY 1: FALCON\nKEY 2: OSPREY\n");

    twosquare(&home)
        .arg("-c")
        .arg(&config)
        .args(["encrypt", "cat"])
        .assert()
        .success()
        .stdout("ACUX\n");
}

#[test]
fn test_set_key_rejects_invalid_key() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("keys.toml");

    twosquare(&home)
        .arg("-c")
        .arg(&config)
        .args(["set-key", "not valid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid first key"));

    assert!(!config.exists());
}

#[test]
fn test_set_key_default_location() {
    let home = TempDir::new().unwrap();

    twosquare(&home)
        .args(["set-key", "python"])
        .assert()
        .success();

    let saved = home.path().join(".config").join("twosquare").join("config.toml");
    let contents = fs::read_to_string(saved).unwrap();
    assert!(contents.contains("first_key = \"PYTHON\""));
}
