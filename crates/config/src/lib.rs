// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo NFT Configuration
//!
//! Protocol settings of the target network and the client's own settings
//! (RPC endpoint, contract, confirmation polling), loaded from TOML.

pub mod error;
pub mod protocol;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use protocol::{NetworkType, ProtocolSettings};
pub use settings::{ClientSettings, ContractSettings, PollerSettings, RpcSettings};

/// Blockchain timing constants
pub const SECONDS_PER_BLOCK: u64 = 15;
pub const MILLISECONDS_PER_BLOCK: u64 = SECONDS_PER_BLOCK * 1000;

/// Default JSON-RPC endpoint of a local node.
pub const DEFAULT_RPC_URL: &str = "http://localhost:10332";

/// Settings file read when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "ascii-nft.toml";
