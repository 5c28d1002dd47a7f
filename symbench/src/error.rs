// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Collection of errors to be used in symbench.
//!
//! A function should validate its arguments and return an indicative error where needed, before
//! any cryptographic transform starts. Once a primitive is executing it should only return opaque
//! errors, since details about a failed verification might leak private information. In that case
//! the function returns [SymBenchError::AuthenticationFailure].

use std::path::Path;
use thiserror::Error;

pub type SymBenchResult<T> = Result<T, SymBenchError>;

/// Collection of errors to be used in symbench.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SymBenchError {
    /// An input file could not be opened or read.
    #[error("{message}: '{path}'")]
    Io { path: String, message: String },

    /// The key does not have a length supported by the cipher.
    #[error("Invalid key length {0}, expected 16, 24 or 32 bytes")]
    InvalidKeyLength(usize),

    /// The nonce does not have the length the cipher expects.
    #[error("Invalid nonce length {actual}, expected {expected} bytes")]
    InvalidNonceLength { expected: usize, actual: usize },

    /// Input length is wrong.
    #[error("Expected input of length exactly {0}")]
    InputLengthWrong(usize),

    /// The input is longer than the cipher can process under a single nonce.
    #[error("Input of {0} bytes exceeds the AES-GCM length limit")]
    InputTooLong(usize),

    /// Invalid value was given to the function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The authentication tag did not match the ciphertext.
    #[error("Authentication failed")]
    AuthenticationFailure,
}

impl SymBenchError {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        SymBenchError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
