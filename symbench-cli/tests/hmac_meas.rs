// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use regex::Regex;
use std::fs;
use tempfile::tempdir;

const SECRET_ABC_HMAC: &str = "9946dad4e00e913fc8be8e5d3f7e110a4a9e832f83fb09c345285d78638d8a0e";

fn hmac_line(output: &str) -> &str {
    output
        .lines()
        .find(|line| line.starts_with("HMAC: "))
        .unwrap()
}

#[test]
fn integration_test_hmac_literal_key() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("abc");
    fs::write(&file, b"abc").unwrap();

    let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
    let result = cmd
        .arg("--key-literal")
        .arg("secret")
        .arg("--file")
        .arg(&file)
        .ok();
    assert!(result.is_ok());
    let output = String::from_utf8(result.unwrap().stdout).unwrap();

    let expected = Regex::new(&format!(
        r"^Time taken to calculate HMAC: [0-9.]+ seconds\nHMAC: {}\n$",
        SECRET_ABC_HMAC
    ))
    .unwrap();
    assert!(expected.is_match(&output), "unexpected output: {}", output);
}

#[test]
fn integration_test_hmac_hex_and_file_keys() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("abc");
    fs::write(&file, b"abc").unwrap();
    let key_file = dir.path().join("hmac.key");
    fs::write(&key_file, b"secret").unwrap();

    let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
    let result = cmd
        .arg("--key-hex")
        .arg("736563726574")
        .arg("--file")
        .arg(&file)
        .ok();
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert_eq!(hmac_line(&output), format!("HMAC: {}", SECRET_ABC_HMAC));

    let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
    let result = cmd
        .arg("--key-file")
        .arg(&key_file)
        .arg("--file")
        .arg(&file)
        .arg("--chunk-size")
        .arg("1")
        .ok();
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert_eq!(hmac_line(&output), format!("HMAC: {}", SECRET_ABC_HMAC));
}

#[test]
fn integration_test_hmac_default_key_and_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("random_file"), [7u8; 2048]).unwrap();

    let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
    let first = cmd.current_dir(dir.path()).ok().unwrap();
    let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
    let second = cmd
        .current_dir(dir.path())
        .arg("--iterations")
        .arg("3")
        .ok()
        .unwrap();

    let first = String::from_utf8(first.stdout).unwrap();
    let second = String::from_utf8(second.stdout).unwrap();
    assert_eq!(hmac_line(&first), hmac_line(&second));
    assert_eq!(hmac_line(&first).len(), "HMAC: ".len() + 64);
    assert!(second.contains("Stats for hmac: n=3 "));
}

#[test]
fn integration_test_hmac_missing_file() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
    let output = cmd.current_dir(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(exitcode::IOERR));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("HMAC: "));
    assert!(stdout.trim_end().ends_with("'random_file'"));
    assert!(!stdout.contains("Time taken"));
}

#[test]
fn integration_test_hmac_conflicting_keys() {
    let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
    let output = cmd
        .arg("--key-literal")
        .arg("a")
        .arg("--key-hex")
        .arg("00")
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn integration_test_hmac_print_config_redacts_key() {
    let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
    let result = cmd
        .arg("--key-literal")
        .arg("hunter2")
        .arg("--print-config")
        .ok();
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert!(!output.contains("hunter2"));
    assert!(output.contains("\"literal\": \"<7 bytes>\""));
    assert!(output.contains("\"chunk_size\": 1024"));
}

#[test]
fn integration_test_hmac_oversized_settings_are_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("random_file"), b"abc").unwrap();

    for (flag, value) in [
        ("--chunk-size", usize::MAX.to_string()),
        ("--iterations", usize::MAX.to_string()),
    ] {
        let mut cmd = Command::cargo_bin("hmac-meas").unwrap();
        let output = cmd
            .current_dir(dir.path())
            .arg(flag)
            .arg(&value)
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(exitcode::DATAERR));
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("HMAC: Invalid input: "), "{}", stdout);
    }
}
