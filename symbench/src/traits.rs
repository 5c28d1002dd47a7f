// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::SymBenchError;
use rand::rngs::{StdRng, ThreadRng};
use rand::{CryptoRng, RngCore};

/// Byte material (keys, nonces) with a fixed serialized form.
pub trait ToFromBytes: AsRef<[u8]> + Sized {
    /// Parse from the byte representation.
    fn from_bytes(bytes: &[u8]) -> Result<Self, SymBenchError>;

    /// Borrow a byte slice representing the serialized form.
    fn as_bytes(&self) -> &[u8] {
        self.as_ref()
    }
}

/// Trait impl'd by byte material that can be generated randomly.
pub trait Generate {
    /// Generate a new random instance using the given RNG.
    fn generate<R: AllowedRng>(rng: &mut R) -> Self;
}

/// Trait impl'd by RNGs accepted when generating keys and nonces.
pub trait AllowedRng: CryptoRng + RngCore {}

// StdRng uses ChaCha12 and should be seeded from OsRng outside of tests.
impl AllowedRng for StdRng {}
// thread_rng() uses OsRng for the seed, and ChaCha12 as the PRG function.
impl AllowedRng for ThreadRng {}
