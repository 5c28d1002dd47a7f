// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Loading benchmark inputs from disk, and generating fresh random ones.

use crate::aes::{AesKey, InitializationVector};
use crate::config::{DEFAULT_AES_GCM_IV_PATH, DEFAULT_AES_GCM_KEY_PATH, DEFAULT_PLAINTEXT_PATH};
use crate::error::{SymBenchError, SymBenchResult};
use crate::traits::{AllowedRng, Generate, ToFromBytes};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use typenum::{U12, U16, U24, U32};
use zeroize::Zeroizing;

/// Size of the plaintext written by [write_inputs] when none is requested.
pub const DEFAULT_PLAINTEXT_SIZE: usize = 2048;

/// Read a whole input file into memory.
pub fn read_input(path: &Path) -> SymBenchResult<Vec<u8>> {
    let file = File::open(path).map_err(|e| SymBenchError::io(path, e))?;
    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| SymBenchError::io(path, e))?;
    debug!(path = %path.display(), len = bytes.len(), "loaded input");
    Ok(bytes)
}

/// Like [read_input], for secrets. The buffer is wiped when dropped.
pub fn read_secret(path: &Path) -> SymBenchResult<Zeroizing<Vec<u8>>> {
    read_input(path).map(Zeroizing::new)
}

/// Paths written by [write_inputs].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedInputs {
    pub key_path: PathBuf,
    pub iv_path: PathBuf,
    pub plaintext_path: PathBuf,
}

/// Write a random AES key of `key_size` bytes, a random 96-bit nonce and `plaintext_size` random
/// bytes into `dir`, under the default file names.
pub fn write_inputs<R: AllowedRng>(
    dir: &Path,
    key_size: usize,
    plaintext_size: usize,
    rng: &mut R,
) -> SymBenchResult<GeneratedInputs> {
    let key: Zeroizing<Vec<u8>> = Zeroizing::new(match key_size {
        16 => AesKey::<U16>::generate(rng).as_bytes().to_vec(),
        24 => AesKey::<U24>::generate(rng).as_bytes().to_vec(),
        32 => AesKey::<U32>::generate(rng).as_bytes().to_vec(),
        n => return Err(SymBenchError::InvalidKeyLength(n)),
    });
    let iv = InitializationVector::<U12>::generate(rng);
    let mut plaintext = vec![0u8; plaintext_size];
    rng.fill_bytes(&mut plaintext);

    let inputs = GeneratedInputs {
        key_path: dir.join(DEFAULT_AES_GCM_KEY_PATH),
        iv_path: dir.join(DEFAULT_AES_GCM_IV_PATH),
        plaintext_path: dir.join(DEFAULT_PLAINTEXT_PATH),
    };
    write_file(&inputs.key_path, &key)?;
    write_file(&inputs.iv_path, iv.as_bytes())?;
    write_file(&inputs.plaintext_path, &plaintext)?;
    debug!(dir = %dir.display(), key_size, plaintext_size, "wrote inputs");
    Ok(inputs)
}

fn write_file(path: &Path, bytes: &[u8]) -> SymBenchResult<()> {
    let mut file = File::create(path).map_err(|e| SymBenchError::io(path, e))?;
    file.write_all(bytes)
        .and_then(|_| file.sync_all())
        .map_err(|e| SymBenchError::io(path, e))
}
