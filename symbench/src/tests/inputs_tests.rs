// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::aes::{parse_nonce, AesGcmCipher};
use crate::error::SymBenchError;
use crate::inputs::{read_input, write_inputs, DEFAULT_PLAINTEXT_SIZE};
use rand::{rngs::StdRng, SeedableRng};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_read_input() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"aoeu").unwrap();
    assert_eq!(read_input(file.path()).unwrap(), b"aoeu");
}

#[test]
fn test_read_missing_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist");
    match read_input(&path) {
        Err(SymBenchError::Io { path: p, message }) => {
            assert_eq!(p, path.display().to_string());
            assert!(!message.is_empty());
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_write_inputs() {
    let dir = tempdir().unwrap();
    let mut rng = StdRng::from_seed([1; 32]);
    let inputs = write_inputs(dir.path(), 24, DEFAULT_PLAINTEXT_SIZE, &mut rng).unwrap();

    assert_eq!(inputs.key_path, dir.path().join("aes-gcm-key.bin"));
    let key = read_input(&inputs.key_path).unwrap();
    let iv = read_input(&inputs.iv_path).unwrap();
    let plaintext = read_input(&inputs.plaintext_path).unwrap();
    assert_eq!(key.len(), 24);
    assert_eq!(iv.len(), 12);
    assert_eq!(plaintext.len(), 2048);

    // Generated inputs are usable as is.
    assert!(AesGcmCipher::new(&key).is_ok());
    assert!(parse_nonce(&iv).is_ok());
}

#[test]
fn test_write_inputs_is_reproducible_with_a_seed() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    write_inputs(first.path(), 16, 100, &mut StdRng::from_seed([2; 32])).unwrap();
    write_inputs(second.path(), 16, 100, &mut StdRng::from_seed([2; 32])).unwrap();
    for name in ["aes-gcm-key.bin", "aes-gcm-iv.bin", "random_file"] {
        assert_eq!(
            read_input(&first.path().join(name)).unwrap(),
            read_input(&second.path().join(name)).unwrap()
        );
    }
}

#[test]
fn test_write_inputs_rejects_bad_key_size() {
    let dir = tempdir().unwrap();
    let mut rng = StdRng::from_seed([1; 32]);
    assert_eq!(
        write_inputs(dir.path(), 20, 10, &mut rng).unwrap_err(),
        SymBenchError::InvalidKeyLength(20)
    );
    assert!(!dir.path().join("aes-gcm-key.bin").exists());
}
