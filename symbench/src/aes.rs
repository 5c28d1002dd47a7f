// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! AES in GCM mode with a detached authentication tag.
//!
//! # Example
//! ```
//! # use symbench::aes::*;
//! let cipher = AesGcmCipher::new(&[0u8; 16]).unwrap();
//! let iv = parse_nonce(&[0u8; 12]).unwrap();
//! let sealed = cipher.encrypt_detached(&iv, b"", b"hello world").unwrap();
//! assert_eq!(sealed.ciphertext.len(), 11);
//! let decrypted = cipher
//!     .decrypt_detached(&iv, b"", &sealed.ciphertext, &sealed.tag)
//!     .unwrap();
//! assert_eq!(decrypted, b"hello world");
//! ```

use crate::{
    error::{SymBenchError, SymBenchResult},
    traits::{AllowedRng, Generate, ToFromBytes},
};
use aes_gcm::aead::{AeadCore, AeadInPlace, KeyInit};
use generic_array::{ArrayLength, GenericArray};
use std::fmt;
use typenum::{Unsigned, U12, U16};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length in bytes of a GCM authentication tag.
pub const TAG_LENGTH: usize = 16;

/// Length in bytes of the GCM nonces used here.
pub const NONCE_LENGTH: usize = 12;

/// A GCM authentication tag.
pub type Tag = [u8; TAG_LENGTH];

/// Trait impl'd by symmetric ciphers for authenticated encryption with a detached tag.
pub trait AuthenticatedCipher {
    type IVType: ToFromBytes;

    /// Encrypt `buffer` in place using the given IV and associated data and return the tag.
    fn encrypt_in_place_detached(
        &self,
        iv: &Self::IVType,
        aad: &[u8],
        buffer: &mut [u8],
    ) -> SymBenchResult<Tag>;

    /// Decrypt `buffer` in place and verify `tag` over it and `aad`. Verification is part of
    /// decryption: on a mismatch [SymBenchError::AuthenticationFailure] is returned and `buffer`
    /// still holds the ciphertext.
    fn decrypt_in_place_detached(
        &self,
        iv: &Self::IVType,
        aad: &[u8],
        buffer: &mut [u8],
        tag: &[u8],
    ) -> SymBenchResult<()>;

    /// Encrypt `plaintext` using the given IV and associated data. The returned ciphertext has
    /// the same length as `plaintext`.
    fn encrypt_detached(
        &self,
        iv: &Self::IVType,
        aad: &[u8],
        plaintext: &[u8],
    ) -> SymBenchResult<Sealed> {
        let mut ciphertext = plaintext.to_vec();
        let tag = self.encrypt_in_place_detached(iv, aad, &mut ciphertext)?;
        Ok(Sealed { ciphertext, tag })
    }

    /// Decrypt `ciphertext` and verify `tag`. No plaintext is released on a mismatch.
    fn decrypt_detached(
        &self,
        iv: &Self::IVType,
        aad: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
    ) -> SymBenchResult<Vec<u8>> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place_detached(iv, aad, &mut plaintext, tag)?;
        Ok(plaintext)
    }
}

/// Output of an authenticated encryption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: Vec<u8>,
    pub tag: Tag,
}

/// Struct wrapping an instance of a `generic_array::GenericArray<u8, N>`. The bytes are zeroized
/// on drop and never printed.
#[derive(Clone)]
pub struct GenericByteArray<N: ArrayLength<u8>> {
    bytes: GenericArray<u8, N>,
}

impl<N: ArrayLength<u8>> AsRef<[u8]> for GenericByteArray<N> {
    fn as_ref(&self) -> &[u8] {
        self.bytes.as_slice()
    }
}

impl<N: ArrayLength<u8>> ToFromBytes for GenericByteArray<N> {
    fn from_bytes(bytes: &[u8]) -> Result<Self, SymBenchError> {
        match bytes.len() == N::USIZE {
            true => Ok(GenericByteArray {
                bytes: GenericArray::clone_from_slice(bytes),
            }),
            false => Err(SymBenchError::InputLengthWrong(N::USIZE)),
        }
    }
}

impl<N: ArrayLength<u8>> Generate for GenericByteArray<N> {
    fn generate<R: AllowedRng>(rng: &mut R) -> Self {
        let mut bytes = GenericArray::<u8, N>::default();
        rng.fill_bytes(&mut bytes);
        GenericByteArray { bytes }
    }
}

impl<N: ArrayLength<u8>> Zeroize for GenericByteArray<N> {
    fn zeroize(&mut self) {
        self.bytes.as_mut_slice().zeroize();
    }
}

impl<N: ArrayLength<u8>> Drop for GenericByteArray<N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<N: ArrayLength<u8>> ZeroizeOnDrop for GenericByteArray<N> {}

impl<N: ArrayLength<u8>> fmt::Debug for GenericByteArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<elided {} secret bytes>", N::USIZE)
    }
}

/// A key of `N` bytes used with AES ciphers.
pub type AesKey<N> = GenericByteArray<N>;

/// An `N` byte initialization vector used with AES ciphers.
pub type InitializationVector<N> = GenericByteArray<N>;

/// Parse a 96-bit GCM nonce, reporting a length mismatch as [SymBenchError::InvalidNonceLength].
pub fn parse_nonce(bytes: &[u8]) -> SymBenchResult<InitializationVector<U12>> {
    InitializationVector::<U12>::from_bytes(bytes).map_err(|_| SymBenchError::InvalidNonceLength {
        expected: NONCE_LENGTH,
        actual: bytes.len(),
    })
}

/// An AEAD from the `aes-gcm` crate keyed and ready for use.
pub struct AeadWrapper<A: AeadInPlace>(A);

impl<A: KeyInit + AeadInPlace> AeadWrapper<A> {
    pub fn new(key: AesKey<A::KeySize>) -> Self {
        Self(A::new(&key.bytes))
    }
}

impl<A> AuthenticatedCipher for AeadWrapper<A>
where
    A: AeadInPlace + AeadCore<TagSize = U16>,
{
    type IVType = InitializationVector<<A as AeadCore>::NonceSize>;

    fn encrypt_in_place_detached(
        &self,
        iv: &Self::IVType,
        aad: &[u8],
        buffer: &mut [u8],
    ) -> SymBenchResult<Tag> {
        self.0
            .encrypt_in_place_detached(&iv.bytes, aad, buffer)
            .map(Into::into)
            .map_err(|_| SymBenchError::InputTooLong(buffer.len()))
    }

    fn decrypt_in_place_detached(
        &self,
        iv: &Self::IVType,
        aad: &[u8],
        buffer: &mut [u8],
        tag: &[u8],
    ) -> SymBenchResult<()> {
        if tag.len() != TAG_LENGTH {
            return Err(SymBenchError::AuthenticationFailure);
        }
        self.0
            .decrypt_in_place_detached(&iv.bytes, aad, buffer, GenericArray::from_slice(tag))
            .map_err(|_| SymBenchError::AuthenticationFailure)
    }
}

/// AES128 in GCM-mode (authenticated) with 96 bit nonces.
pub type Aes128Gcm = AeadWrapper<aes_gcm::AesGcm<aes::Aes128, U12>>;

/// AES192 in GCM-mode (authenticated) with 96 bit nonces.
pub type Aes192Gcm = AeadWrapper<aes_gcm::AesGcm<aes::Aes192, U12>>;

/// AES256 in GCM-mode (authenticated) with 96 bit nonces.
pub type Aes256Gcm = AeadWrapper<aes_gcm::AesGcm<aes::Aes256, U12>>;

/// AES-GCM with the key size chosen at run time from the length of the key material.
pub enum AesGcmCipher {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl AesGcmCipher {
    /// Build a cipher from raw key bytes. The key must be 16, 24 or 32 bytes long.
    pub fn new(key: &[u8]) -> SymBenchResult<Self> {
        let invalid = |_| SymBenchError::InvalidKeyLength(key.len());
        match key.len() {
            16 => Ok(Self::Aes128(Aes128Gcm::new(
                AesKey::from_bytes(key).map_err(invalid)?,
            ))),
            24 => Ok(Self::Aes192(Aes192Gcm::new(
                AesKey::from_bytes(key).map_err(invalid)?,
            ))),
            32 => Ok(Self::Aes256(Aes256Gcm::new(
                AesKey::from_bytes(key).map_err(invalid)?,
            ))),
            n => Err(SymBenchError::InvalidKeyLength(n)),
        }
    }

    /// Human readable name of the cipher, e.g. `AES-128-GCM`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aes128(_) => "AES-128-GCM",
            Self::Aes192(_) => "AES-192-GCM",
            Self::Aes256(_) => "AES-256-GCM",
        }
    }
}

impl fmt::Debug for AesGcmCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AuthenticatedCipher for AesGcmCipher {
    type IVType = InitializationVector<U12>;

    fn encrypt_in_place_detached(
        &self,
        iv: &Self::IVType,
        aad: &[u8],
        buffer: &mut [u8],
    ) -> SymBenchResult<Tag> {
        match self {
            Self::Aes128(c) => c.encrypt_in_place_detached(iv, aad, buffer),
            Self::Aes192(c) => c.encrypt_in_place_detached(iv, aad, buffer),
            Self::Aes256(c) => c.encrypt_in_place_detached(iv, aad, buffer),
        }
    }

    fn decrypt_in_place_detached(
        &self,
        iv: &Self::IVType,
        aad: &[u8],
        buffer: &mut [u8],
        tag: &[u8],
    ) -> SymBenchResult<()> {
        match self {
            Self::Aes128(c) => c.decrypt_in_place_detached(iv, aad, buffer, tag),
            Self::Aes192(c) => c.decrypt_in_place_detached(iv, aad, buffer, tag),
            Self::Aes256(c) => c.decrypt_in_place_detached(iv, aad, buffer, tag),
        }
    }
}
