// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Hex encoding of binary data.
//!
//! # Example
//! ```rust
//! # use symbench::encoding::*;
//! assert_eq!(Hex::encode("Hello world!"), "48656c6c6f20776f726c6421");
//! assert_eq!(Hex::decode("0x48656C6C6F").unwrap(), b"Hello");
//! ```

use crate::error::{SymBenchError, SymBenchResult};

/// Trait representing a general binary-to-string encoding.
pub trait Encoding {
    /// Decode this encoding into bytes.
    fn decode(s: &str) -> SymBenchResult<Vec<u8>>;

    /// Encode bytes into a string.
    fn encode<T: AsRef<[u8]>>(data: T) -> String;
}

/// Hex string encoding.
pub struct Hex;

impl Encoding for Hex {
    /// Decodes a hex string to bytes. Both upper and lower case characters are accepted, and the
    /// string may have a "0x" prefix or not.
    fn decode(s: &str) -> SymBenchResult<Vec<u8>> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(s).map_err(|e| SymBenchError::InvalidInput(format!("invalid hex string: {e}")))
    }

    /// Hex encoding is lower case and without "0x" prefix.
    fn encode<T: AsRef<[u8]>>(data: T) -> String {
        hex::encode(data.as_ref())
    }
}
