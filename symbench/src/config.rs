// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Parameters of a benchmark run.

use crate::error::{SymBenchError, SymBenchResult};
use crate::hmac::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::timing::Sampler;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_AES_GCM_KEY_PATH: &str = "aes-gcm-key.bin";
pub const DEFAULT_AES_GCM_IV_PATH: &str = "aes-gcm-iv.bin";
pub const DEFAULT_PLAINTEXT_PATH: &str = "random_file";

/// Secret used by `hmac-meas` when no key is given. The ASCII bytes are the key, not their hex
/// decoding.
pub const DEFAULT_HMAC_KEY: &[u8] =
    b"d8b66c54b3f5cd95115734d90b7c512504d71ce66711ea4ced2f5b41021a4313";

/// Configuration of an AES-GCM encrypt/decrypt round trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AesGcmConfig {
    pub key_path: PathBuf,
    pub iv_path: PathBuf,
    pub plaintext_path: PathBuf,
    /// Additional authenticated data, bound into the tag but not encrypted.
    #[serde(serialize_with = "serialize_hex")]
    pub aad: Vec<u8>,
    pub warmup: usize,
    pub iterations: usize,
    /// Flip one bit of the sealed output before decrypting.
    pub tamper: bool,
}

impl Default for AesGcmConfig {
    fn default() -> Self {
        Self {
            key_path: DEFAULT_AES_GCM_KEY_PATH.into(),
            iv_path: DEFAULT_AES_GCM_IV_PATH.into(),
            plaintext_path: DEFAULT_PLAINTEXT_PATH.into(),
            aad: Vec::new(),
            warmup: 0,
            iterations: 1,
            tamper: false,
        }
    }
}

impl AesGcmConfig {
    pub fn sampler(&self) -> SymBenchResult<Sampler> {
        Sampler::new(self.warmup, self.iterations)
    }
}

/// Where the HMAC secret comes from.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySource {
    Literal(#[serde(serialize_with = "serialize_redacted")] Vec<u8>),
    File(PathBuf),
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Literal(bytes) => write!(f, "Literal(<{} bytes>)", bytes.len()),
            KeySource::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}

/// Configuration of an HMAC-SHA256 digest of a file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HmacConfig {
    pub key: KeySource,
    pub file_path: PathBuf,
    pub chunk_size: usize,
    pub warmup: usize,
    pub iterations: usize,
}

impl Default for HmacConfig {
    fn default() -> Self {
        Self {
            key: KeySource::Literal(DEFAULT_HMAC_KEY.to_vec()),
            file_path: DEFAULT_PLAINTEXT_PATH.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            warmup: 0,
            iterations: 1,
        }
    }
}

impl HmacConfig {
    pub fn validate(&self) -> SymBenchResult<()> {
        if self.chunk_size == 0 {
            return Err(SymBenchError::InvalidInput(
                "chunk size must be at least 1".into(),
            ));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(SymBenchError::InvalidInput(format!(
                "chunk size must be at most {MAX_CHUNK_SIZE} bytes, got {}",
                self.chunk_size
            )));
        }
        self.sampler().map(|_| ())
    }

    pub fn sampler(&self) -> SymBenchResult<Sampler> {
        Sampler::new(self.warmup, self.iterations)
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

fn serialize_redacted<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("<{} bytes>", bytes.len()))
}
