// Copyright (C) 2015-2025 The Neo Project.
//
// uint160.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt160`, a 160-bit script hash.

use crate::constants::{ADDRESS_SIZE, CHECKSUM_SIZE};
use crate::error::{PrimitiveError, PrimitiveResult};
use ripemd::Ripemd160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// A 160-bit script hash stored in little-endian byte order.
///
/// The textual form is the big-endian hex string with a `0x` prefix, the
/// same form the node prints in JSON-RPC responses.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    /// Alias for the byte length.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT160_SIZE])
    }

    /// Checks if this value is all zero bytes.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt160` from little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input length is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT160_SIZE] = value.try_into().map_err(|_| {
            PrimitiveError::invalid_format(format!("Invalid UInt160 length: {}", value.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Little-endian byte representation.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    /// Borrowed little-endian bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; UINT160_SIZE] {
        &self.0
    }

    /// Parses a `UInt160` from a big-endian hex string, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not 40 hex characters.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT160_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "UInt160 hex must be {} characters, got {}",
                UINT160_SIZE * 2,
                s.len()
            )));
        }

        let mut bytes = hex::decode(s)
            .map_err(|e| PrimitiveError::invalid_format(format!("Invalid UInt160 hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the value to a `0x`-prefixed big-endian hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Computes the script hash (`RIPEMD160(SHA256(script))`) of a script.
    #[must_use]
    pub fn from_script(script: &[u8]) -> Self {
        let sha = Sha256::digest(script);
        let hash160 = Ripemd160::digest(sha);
        let mut bytes = [0u8; UINT160_SIZE];
        bytes.copy_from_slice(&hash160);
        Self(bytes)
    }

    /// Encodes this script hash as a Base58Check address with the given version byte.
    #[must_use]
    pub fn to_address(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(1 + UINT160_SIZE + CHECKSUM_SIZE);
        data.push(version);
        data.extend_from_slice(&self.0);

        let checksum = double_sha256(&data);
        data.extend_from_slice(&checksum[..CHECKSUM_SIZE]);

        bs58::encode(data).into_string()
    }

    /// Parses a Base58Check address, requiring the given version byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not valid Base58, has an incorrect
    /// length, carries a different version byte, or has a bad checksum.
    pub fn from_address(address: &str, version: u8) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|_| PrimitiveError::invalid_format("Invalid Base58 address"))?;

        if decoded.len() != 1 + UINT160_SIZE + CHECKSUM_SIZE {
            return Err(PrimitiveError::invalid_format("Invalid address length"));
        }

        if decoded[0] != version {
            return Err(PrimitiveError::InvalidAddressVersion {
                expected: version,
                found: decoded[0],
            });
        }

        let (data, checksum) = decoded.split_at(1 + UINT160_SIZE);
        if checksum != &double_sha256(data)[..CHECKSUM_SIZE] {
            return Err(PrimitiveError::invalid_format("Invalid address checksum"));
        }

        Self::from_bytes(&data[1..])
    }
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

impl FromStr for UInt160 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ADDRESS_VERSION;

    const POLICY: &str = "0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b";

    #[test]
    fn parse_round_trips_through_display() {
        let hash = UInt160::parse(POLICY).unwrap();
        assert_eq!(hash.to_string(), POLICY);
        assert_eq!(hash.as_bytes()[0], 0x7b);
        assert_eq!(hash.as_bytes()[19], 0xcc);
    }

    #[test]
    fn parse_accepts_missing_prefix() {
        let with = UInt160::parse(POLICY).unwrap();
        let without = UInt160::parse(&POLICY[2..]).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn parse_rejects_bad_length_and_characters() {
        assert!(UInt160::parse("0x1234").is_err());
        assert!(UInt160::parse("0xzz5e4edd9f5f8dba8bb65734541df7a1c081c67b").is_err());
    }

    #[test]
    fn address_round_trip() {
        let hash = UInt160::from_script(&[0x01, 0x02, 0x03]);
        let address = hash.to_address(ADDRESS_VERSION);
        assert!(address.starts_with('N'));
        assert_eq!(UInt160::from_address(&address, ADDRESS_VERSION).unwrap(), hash);
    }

    #[test]
    fn address_with_wrong_version_is_rejected() {
        let address = UInt160::zero().to_address(0x17);
        let err = UInt160::from_address(&address, ADDRESS_VERSION).unwrap_err();
        assert_eq!(
            err,
            PrimitiveError::InvalidAddressVersion {
                expected: ADDRESS_VERSION,
                found: 0x17
            }
        );
    }

    #[test]
    fn address_with_corrupt_checksum_is_rejected() {
        let address = UInt160::zero().to_address(ADDRESS_VERSION);
        let mut raw = bs58::decode(&address).into_vec().unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0xff;
        let corrupt = bs58::encode(raw).into_string();
        assert!(UInt160::from_address(&corrupt, ADDRESS_VERSION).is_err());
    }

    #[test]
    fn serde_uses_hex_string() {
        let hash = UInt160::parse(POLICY).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{POLICY}\""));
        let back: UInt160 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
