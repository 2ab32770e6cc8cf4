// Copyright (C) 2015-2025 The Neo Project.
//
// ecc256.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::fmt::{self, Debug, Formatter};

use p256::{
    elliptic_curve::{
        rand_core::{CryptoRng, RngCore},
        sec1::ToEncodedPoint,
    },
    PublicKey as P256PublicKey, SecretKey as P256SecretKey,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

pub const KEY_SIZE: usize = 32;

/// Length of a compressed SEC1 public key.
pub const COMPRESSED_KEY_SIZE: usize = 33;

/// A secp256r1 secret scalar, zeroed on drop and never printed.
#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(bytes),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let buf: [u8; KEY_SIZE] = slice
            .try_into()
            .map_err(|_| KeyError::InvalidPrivateKeyLength(slice.len()))?;
        Ok(Self::new(buf))
    }

    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

/// A secp256r1 public point.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct PublicKey {
    inner: P256PublicKey,
}

impl PublicKey {
    #[inline]
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        P256PublicKey::from_sec1_bytes(bytes)
            .map(|inner| Self { inner })
            .map_err(|_| KeyError::InvalidPublicKey)
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; COMPRESSED_KEY_SIZE] {
        let encoded = self.inner.to_encoded_point(true);
        let mut buf = [0u8; COMPRESSED_KEY_SIZE];
        buf.copy_from_slice(encoded.as_bytes());
        buf
    }

    #[inline]
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let encoded = self.inner.to_encoded_point(false);
        let mut buf = [0u8; 65];
        buf.copy_from_slice(encoded.as_bytes());
        buf
    }

    pub(crate) fn as_p256(&self) -> &P256PublicKey {
        &self.inner
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &hex::encode(self.to_compressed()))
            .finish()
    }
}

/// A private key together with its derived public key.
#[derive(Clone)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Derives the public key from a private key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidPrivateKey` for zero or out-of-range scalars.
    pub fn from_private(private_key: PrivateKey) -> Result<Self, KeyError> {
        let secret = P256SecretKey::from_slice(private_key.as_be_bytes())
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self {
            public_key: PublicKey {
                inner: secret.public_key(),
            },
            private_key,
        })
    }

    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let secret = P256SecretKey::random(rng);
        Self {
            private_key: PrivateKey::new(secret.to_bytes().into()),
            public_key: PublicKey {
                inner: secret.public_key(),
            },
        }
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("ecc256: invalid private key length {0}")]
    InvalidPrivateKeyLength(usize),

    #[error("ecc256: invalid private key")]
    InvalidPrivateKey,

    #[error("ecc256: invalid public key")]
    InvalidPublicKey,
}
