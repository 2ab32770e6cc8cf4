// Copyright (C) 2015-2025 The Neo Project.
//
// hash.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Hash function implementations.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Cryptographic hash functions used by the client.
pub struct Crypto;

impl Crypto {
    /// Computes SHA-256 hash of the input data.
    ///
    /// # Example
    /// ```
    /// use neo_nft_crypto::Crypto;
    /// let hash = Crypto::sha256(b"Hello, Neo!");
    /// assert_eq!(hash.len(), 32);
    /// ```
    pub fn sha256(data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }

    /// Computes SHA-256 twice, as used by Base58Check checksums.
    pub fn hash256(data: &[u8]) -> [u8; 32] {
        Sha256::digest(Sha256::digest(data)).into()
    }

    /// Computes RIPEMD-160 hash of the input data.
    pub fn ripemd160(data: &[u8]) -> [u8; 20] {
        Ripemd160::digest(data).into()
    }

    /// Computes `RIPEMD160(SHA256(data))`.
    pub fn hash160(data: &[u8]) -> [u8; 20] {
        Self::ripemd160(&Self::sha256(data))
    }
}
