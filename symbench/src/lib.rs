// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

//! Timing harness for symmetric primitives: an AES-GCM encrypt/decrypt round trip and an
//! HMAC-SHA256 digest of a file. The primitives themselves come from the RustCrypto crates; this
//! crate loads inputs, times only the transform, and reports what happened.

#[cfg(test)]
#[path = "tests/aes_tests.rs"]
pub mod aes_tests;

#[cfg(test)]
#[path = "tests/hmac_tests.rs"]
pub mod hmac_tests;

#[cfg(test)]
#[path = "tests/encoding_tests.rs"]
pub mod encoding_tests;

#[cfg(test)]
#[path = "tests/timing_tests.rs"]
pub mod timing_tests;

#[cfg(test)]
#[path = "tests/inputs_tests.rs"]
pub mod inputs_tests;

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
pub mod runner_tests;

// Primitives
pub mod aes;
pub mod hash;
pub mod hmac;

// Measurement
pub mod config;
pub mod inputs;
pub mod runner;
pub mod timing;

// Other tooling
pub mod encoding;
pub mod error;
pub mod traits;
