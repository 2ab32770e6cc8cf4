// Copyright (C) 2015-2025 The Neo Project.
//
// ecdsa.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Deterministic (RFC 6979) ECDSA over secp256r1 with SHA-256 message digests.

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

use crate::ecc256::{KeyPair, PrivateKey, PublicKey};

pub const ECC256_SIGN_SIZE: usize = 32 * 2;

pub trait Secp256r1Sign {
    type Sign;
    type Error;

    /// Signs `SHA256(message)`.
    fn secp256r1_sign<T: AsRef<[u8]>>(&self, message: T) -> Result<Self::Sign, Self::Error>;
}

pub trait Secp256r1Verify {
    type Sign;
    type Error;

    fn secp256r1_verify<T: AsRef<[u8]>>(
        &self,
        message: T,
        sign: &Self::Sign,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignError {
    #[error("ecdsa: invalid private key")]
    InvalidKey,

    #[error("ecdsa: signing failed")]
    SigningFailed,
}

impl Secp256r1Sign for PrivateKey {
    type Sign = [u8; ECC256_SIGN_SIZE];
    type Error = SignError;

    fn secp256r1_sign<T: AsRef<[u8]>>(&self, message: T) -> Result<Self::Sign, Self::Error> {
        let sk = SigningKey::from_slice(self.as_be_bytes()).map_err(|_| SignError::InvalidKey)?;

        let sign: Signature = sk
            .try_sign(message.as_ref())
            .map_err(|_| SignError::SigningFailed)?;

        // r || s, big endian
        Ok(sign.to_bytes().into())
    }
}

impl Secp256r1Sign for KeyPair {
    type Sign = [u8; ECC256_SIGN_SIZE];
    type Error = SignError;

    #[inline]
    fn secp256r1_sign<T: AsRef<[u8]>>(&self, message: T) -> Result<Self::Sign, Self::Error> {
        self.private_key().secp256r1_sign(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("ecdsa: invalid sign")]
    InvalidSign,
}

impl Secp256r1Verify for PublicKey {
    type Sign = [u8; ECC256_SIGN_SIZE];
    type Error = VerifyError;

    #[inline]
    fn secp256r1_verify<T: AsRef<[u8]>>(
        &self,
        message: T,
        sign: &Self::Sign,
    ) -> Result<(), Self::Error> {
        let sign = Signature::from_slice(sign.as_ref()).map_err(|_| VerifyError::InvalidSign)?;
        VerifyingKey::from(self.as_p256())
            .verify(message.as_ref(), &sign)
            .map_err(|_| VerifyError::InvalidSign)
    }
}
