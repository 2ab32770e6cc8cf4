// Copyright (C) 2015-2025 The Neo Project.
//
// wif.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Wallet Import Format for secp256r1 keys.
//!
//! Layout before Base58Check: `0x80 || key(32) || 0x01`.

use crate::ecc256::{KeyError, KeyPair, PrivateKey, KEY_SIZE};
use crate::hash::Crypto;
use zeroize::Zeroizing;

pub const WIF_VERSION: u8 = 0x80;

const COMPRESSED_FLAG: u8 = 0x01;
const CHECKSUM_SIZE: usize = 4;
const PAYLOAD_SIZE: usize = 1 + KEY_SIZE + 1;

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum WifError {
    #[error("wif-decode: invalid base58 encoded")]
    InvalidBase58Encoded,

    #[error("wif-decode: invalid length '{0}'")]
    InvalidWifLength(usize),

    #[error("wif-decode: invalid checksum")]
    InvalidChecksum,

    #[error("wif-decode: invalid version '0x{0:02x}'")]
    InvalidVersion(u8),

    #[error("wif-decode: invalid compressed flag '{0}'")]
    InvalidCompressedFlag(u8),

    #[error("wif-decode: {0}")]
    InvalidKey(#[from] KeyError),
}

impl KeyPair {
    /// Imports a key pair from a compressed WIF string.
    ///
    /// # Errors
    ///
    /// Returns a [`WifError`] describing the first malformed part.
    pub fn from_wif(wif: &str) -> Result<Self, WifError> {
        let raw = Zeroizing::new(
            bs58::decode(wif.trim())
                .into_vec()
                .map_err(|_| WifError::InvalidBase58Encoded)?,
        );

        if raw.len() != PAYLOAD_SIZE + CHECKSUM_SIZE {
            return Err(WifError::InvalidWifLength(raw.len()));
        }

        let (payload, checksum) = raw.split_at(PAYLOAD_SIZE);
        if checksum != &Crypto::hash256(payload)[..CHECKSUM_SIZE] {
            return Err(WifError::InvalidChecksum);
        }
        if payload[0] != WIF_VERSION {
            return Err(WifError::InvalidVersion(payload[0]));
        }
        let flag = payload[PAYLOAD_SIZE - 1];
        if flag != COMPRESSED_FLAG {
            return Err(WifError::InvalidCompressedFlag(flag));
        }

        let private = PrivateKey::from_slice(&payload[1..1 + KEY_SIZE])?;
        KeyPair::from_private(private).map_err(WifError::from)
    }

    /// Exports the private key as a compressed WIF string.
    pub fn to_wif(&self) -> String {
        let mut buf = Zeroizing::new(Vec::with_capacity(PAYLOAD_SIZE + CHECKSUM_SIZE));
        buf.push(WIF_VERSION);
        buf.extend_from_slice(self.private_key().as_be_bytes());
        buf.push(COMPRESSED_FLAG);
        let checksum = Crypto::hash256(&buf);
        buf.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
        bs58::encode(buf.as_slice()).into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const WIF: &str = "L3tgppXLgdaeqSGSFw1Go3skBiy8vQAM7YMXvTHsKQtE16PBncSU";
    const KEY: [u8; 32] = hex!("c7134d6fd8e73d819e82755c64c93788d8db0961929e025a53363c4cc02a6962");

    #[test]
    fn decodes_known_vector() {
        let pair = KeyPair::from_wif(WIF).unwrap();
        assert_eq!(pair.private_key().as_be_bytes(), &KEY);
        assert_eq!(
            pair.public_key().to_compressed(),
            hex!("035a928f201639204e06b4368b1a93365462a8ebbff0b8818151b74faab3a2b61a")
        );
    }

    #[test]
    fn encode_inverts_decode() {
        let pair = KeyPair::from_private(PrivateKey::new(KEY)).unwrap();
        assert_eq!(pair.to_wif(), WIF);
    }

    #[test]
    fn tampered_wif_fails_checksum() {
        let mut chars: Vec<char> = WIF.chars().collect();
        chars[10] = if chars[10] == 'a' { 'b' } else { 'a' };
        let tampered: String = chars.into_iter().collect();
        assert!(matches!(
            KeyPair::from_wif(&tampered),
            Err(WifError::InvalidChecksum) | Err(WifError::InvalidWifLength(_))
        ));
    }

    #[test]
    fn garbage_is_not_base58() {
        assert_eq!(
            KeyPair::from_wif("0OIl").unwrap_err(),
            WifError::InvalidBase58Encoded
        );
    }
}
