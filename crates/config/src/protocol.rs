// Copyright (C) 2015-2025 The Neo Project.
//
// protocol.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Protocol settings for Neo N3 networks
//!
//! Only the parameters a transaction-building client needs: the network
//! magic mixed into signatures, the address version, the block time and the
//! validity window.

use crate::MILLISECONDS_PER_BLOCK;
use neo_nft_primitives::ADDRESS_VERSION;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Well-known Neo N3 networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkType {
    #[default]
    MainNet,
    TestNet,
}

impl NetworkType {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            NetworkType::MainNet => 0x334F_454E,
            NetworkType::TestNet => 0x3554_334E,
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(NetworkType::MainNet),
            "testnet" => Ok(NetworkType::TestNet),
            other => Err(format!("unknown network '{other}'")),
        }
    }
}

/// Neo N3 protocol settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtocolSettings {
    /// Network identifier (magic number)
    #[serde(default = "default_network")]
    pub network: u32,

    /// Address version byte for address encoding
    #[serde(default = "default_address_version")]
    pub address_version: u8,

    /// Milliseconds per block
    #[serde(default = "default_ms_per_block")]
    pub ms_per_block: u64,

    /// Maximum time for transaction validity (in blocks)
    #[serde(default = "default_max_valid_until_block_increment")]
    pub max_valid_until_block_increment: u32,
}

fn default_network() -> u32 {
    NetworkType::MainNet.magic()
}

fn default_address_version() -> u8 {
    ADDRESS_VERSION
}

fn default_ms_per_block() -> u64 {
    MILLISECONDS_PER_BLOCK
}

fn default_max_valid_until_block_increment() -> u32 {
    5760
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self::for_network(NetworkType::MainNet)
    }
}

impl ProtocolSettings {
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network: network.magic(),
            address_version: default_address_version(),
            ms_per_block: default_ms_per_block(),
            max_valid_until_block_increment: default_max_valid_until_block_increment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_defaults() {
        let settings = ProtocolSettings::default();
        assert_eq!(settings.network, 860_833_102);
        assert_eq!(settings.address_version, 0x35);
        assert_eq!(settings.ms_per_block, 15_000);
        assert_eq!(settings.max_valid_until_block_increment, 5760);
    }

    #[test]
    fn network_names_parse() {
        assert_eq!("TestNet".parse::<NetworkType>().unwrap(), NetworkType::TestNet);
        assert_eq!(NetworkType::TestNet.magic(), 894_710_606);
        assert!("devnet".parse::<NetworkType>().is_err());
    }
}
