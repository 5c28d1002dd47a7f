// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The two benchmark modes: an AES-GCM round trip and an HMAC-SHA256 file digest.
//!
//! Both load every input before the clock starts. Expected failures (a tampered ciphertext, a
//! missing file) surface as values the caller can report, never as panics.

use crate::aes::{parse_nonce, AesGcmCipher, AuthenticatedCipher, Sealed};
use crate::config::{AesGcmConfig, HmacConfig, KeySource};
use crate::error::{SymBenchError, SymBenchResult};
use crate::hash::Digest;
use crate::hmac::{HmacKey, HmacSha256, HMAC_SHA256_LENGTH};
use crate::inputs::{read_input, read_secret};
use crate::timing::TimingStats;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of [run_aes_gcm].
#[derive(Clone, Debug, PartialEq)]
pub struct AesGcmReport {
    pub cipher: &'static str,
    pub plaintext_len: usize,
    pub encrypt: TimingStats,
    pub decrypt: TimingStats,
    /// Whether the tag verified during decryption.
    pub authenticated: bool,
    /// Whether the decrypted bytes equal the original plaintext. Always false when not
    /// authenticated, since no plaintext is released then.
    pub plaintext_matches: bool,
}

/// Encrypt the configured plaintext, then decrypt and verify it, timing each transform.
///
/// A tag mismatch is reported through [AesGcmReport::authenticated]. Missing files, a key of the
/// wrong size or a nonce of the wrong size are returned as errors before anything is timed.
pub fn run_aes_gcm(config: &AesGcmConfig) -> SymBenchResult<AesGcmReport> {
    let sampler = config.sampler()?;
    let key = read_secret(&config.key_path)?;
    let iv_bytes = read_input(&config.iv_path)?;
    let plaintext = read_input(&config.plaintext_path)?;

    let cipher = AesGcmCipher::new(&key)?;
    let iv = parse_nonce(&iv_bytes)?;
    debug!(cipher = cipher.name(), len = plaintext.len(), "starting AES-GCM round trip");

    // Each run works on a fresh copy of its input made outside the timed region. The buffer is
    // handed back so it is dropped outside that region too.
    let ((tag, ciphertext), encrypt) = sampler.run_with_setup(
        "encrypt",
        || plaintext.clone(),
        |mut buffer| {
            let tag = cipher.encrypt_in_place_detached(&iv, &config.aad, &mut buffer);
            (tag, buffer)
        },
    )?;
    let mut sealed = Sealed {
        tag: tag?,
        ciphertext,
    };

    if config.tamper {
        tamper(&mut sealed);
    }

    let ((verified, decrypted), decrypt) = sampler.run_with_setup(
        "decrypt",
        || sealed.ciphertext.clone(),
        |mut buffer| {
            let verified =
                cipher.decrypt_in_place_detached(&iv, &config.aad, &mut buffer, &sealed.tag);
            (verified, buffer)
        },
    )?;

    let (authenticated, plaintext_matches) = match verified {
        Ok(()) => (true, decrypted == plaintext),
        Err(SymBenchError::AuthenticationFailure) => (false, false),
        Err(e) => return Err(e),
    };
    if authenticated && !plaintext_matches {
        warn!("decryption verified but did not reproduce the plaintext");
    }

    info!(
        cipher = cipher.name(),
        len = plaintext.len(),
        encrypt_secs = encrypt.median.as_secs_f64(),
        decrypt_secs = decrypt.median.as_secs_f64(),
        authenticated,
        "AES-GCM round trip done"
    );

    Ok(AesGcmReport {
        cipher: cipher.name(),
        plaintext_len: plaintext.len(),
        encrypt,
        decrypt,
        authenticated,
        plaintext_matches,
    })
}

/// Flip the low bit of the first ciphertext byte, or of the first tag byte when there is no
/// ciphertext.
fn tamper(sealed: &mut Sealed) {
    match sealed.ciphertext.first_mut() {
        Some(byte) => *byte ^= 1,
        None => sealed.tag[0] ^= 1,
    }
}

/// Outcome of [run_hmac].
#[derive(Clone, Debug, PartialEq)]
pub struct HmacReport {
    pub bytes_read: u64,
    pub finalize: TimingStats,
    pub digest: Digest<HMAC_SHA256_LENGTH>,
}

/// Stream the configured file into HMAC-SHA256 and time the finalization.
pub fn run_hmac(config: &HmacConfig) -> SymBenchResult<HmacReport> {
    config.validate()?;
    let sampler = config.sampler()?;
    let key = match &config.key {
        KeySource::Literal(bytes) => HmacKey::new(bytes),
        KeySource::File(path) => HmacKey::new(&read_secret(path)?),
    };

    let mut mac = HmacSha256::new(&key)?;
    let bytes_read = stream_file(&mut mac, &config.file_path, config.chunk_size)?;
    debug!(len = bytes_read, chunk_size = config.chunk_size, "streamed input into HMAC");

    let (digest, finalize) = sampler.run_with_setup("hmac", || mac.clone(), HmacSha256::finalize)?;

    info!(
        len = bytes_read,
        finalize_secs = finalize.median.as_secs_f64(),
        "HMAC-SHA256 done"
    );

    Ok(HmacReport {
        bytes_read,
        finalize,
        digest,
    })
}

fn stream_file(mac: &mut HmacSha256, path: &Path, chunk_size: usize) -> SymBenchResult<u64> {
    let file = File::open(path).map_err(|e| SymBenchError::io(path, e))?;
    mac.update_reader(file, chunk_size)
        .map_err(|e| SymBenchError::io(path, e))
}

/// HMAC-SHA256 of the file at `path` as a hex string. Any failure is returned as its message
/// instead of a digest.
pub fn calculate_file_hmac(path: &Path, key: &[u8]) -> String {
    let config = HmacConfig {
        key: KeySource::Literal(key.to_vec()),
        file_path: path.to_path_buf(),
        ..HmacConfig::default()
    };
    match run_hmac(&config) {
        Ok(report) => report.digest.to_string(),
        Err(e) => e.to_string(),
    }
}
