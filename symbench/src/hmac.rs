// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! [HMAC](https://www.rfc-editor.org/rfc/rfc2104) with SHA-256, computed incrementally so large
//! inputs can be streamed from disk.

use crate::error::{SymBenchError, SymBenchResult};
use crate::hash::Digest;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use std::io::{ErrorKind, Read};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size in bytes of an HMAC-SHA256 output.
pub const HMAC_SHA256_LENGTH: usize = 32;

/// Default number of bytes read from an input per update.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Largest chunk size accepted by a run configuration.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Secret key for [HmacSha256]. Any length is accepted: keys longer than the SHA-256 block size
/// are hashed first and shorter ones are zero padded.
#[derive(Clone)]
pub struct HmacKey(Vec<u8>);

impl HmacKey {
    pub fn new(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for HmacKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for HmacKey {}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<elided {} byte HMAC key>", self.0.len())
    }
}

/// Incremental [Keyed-Hash Message Authentication Code](https://www.rfc-editor.org/rfc/rfc2104)
/// using SHA-256.
#[derive(Clone)]
pub struct HmacSha256(Hmac<Sha256>);

impl HmacSha256 {
    pub fn new(key: &HmacKey) -> SymBenchResult<Self> {
        let mac = Hmac::<Sha256>::new_from_slice(key.as_bytes())
            .map_err(|_| SymBenchError::InvalidKeyLength(key.as_bytes().len()))?;
        Ok(Self(mac))
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    /// Feed everything `reader` yields into the MAC, reading at most `chunk_size` bytes at a
    /// time. Returns the number of bytes consumed.
    pub fn update_reader<R: Read>(
        &mut self,
        mut reader: R,
        chunk_size: usize,
    ) -> std::io::Result<u64> {
        if chunk_size == 0 {
            return Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                "chunk size must be positive",
            ));
        }
        let mut chunk: Vec<u8> = Vec::new();
        chunk.try_reserve_exact(chunk_size).map_err(|e| {
            std::io::Error::new(
                ErrorKind::OutOfMemory,
                format!("cannot allocate a {chunk_size} byte chunk: {e}"),
            )
        })?;
        chunk.resize(chunk_size, 0);
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.0.update(&chunk[..n]);
            total += n as u64;
        }
        Ok(total)
    }

    pub fn finalize(self) -> Digest<HMAC_SHA256_LENGTH> {
        Digest {
            digest: self.0.finalize().into_bytes().into(),
        }
    }
}

/// One-shot HMAC-SHA256 of `message`.
pub fn hmac_sha256(key: &HmacKey, message: &[u8]) -> SymBenchResult<Digest<HMAC_SHA256_LENGTH>> {
    let mut mac = HmacSha256::new(key)?;
    mac.update(message);
    Ok(mac.finalize())
}
