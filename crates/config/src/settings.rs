// Copyright (C) 2015-2025 The Neo Project.
//
// settings.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Client settings file.
//!
//! ```toml
//! [rpc]
//! url = "http://localhost:10332"
//! timeout_ms = 30000
//!
//! [contract]
//! hash = "0x0123456789abcdef0123456789abcdef01234567"
//!
//! [protocol]
//! network = 860833102
//!
//! [poller]
//! max_attempts = 120
//! timeout_ms = 120000
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::protocol::ProtocolSettings;
use crate::DEFAULT_RPC_URL;
use neo_nft_primitives::UInt160;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// JSON-RPC endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RpcSettings {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout_ms: u64,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            user: None,
            password: None,
            timeout_ms: 30_000,
        }
    }
}

/// The deployed NFT contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractSettings {
    pub hash: Option<UInt160>,
}

/// Confirmation polling budget.
///
/// Polling stops at whichever of `max_attempts` or `timeout_ms` runs out first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PollerSettings {
    /// Delay between attempts; half the block time when unset.
    pub interval_ms: Option<u64>,
    pub max_attempts: u32,
    pub timeout_ms: u64,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            interval_ms: None,
            max_attempts: 120,
            timeout_ms: 120_000,
        }
    }
}

impl PollerSettings {
    pub fn interval(&self, protocol: &ProtocolSettings) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(protocol.ms_per_block / 2))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Everything the client reads from its settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientSettings {
    pub rpc: RpcSettings,
    pub contract: ContractSettings,
    pub protocol: ProtocolSettings,
    pub poller: PollerSettings,
}

impl ClientSettings {
    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist. The result is validated.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "settings file not found, using defaults");
            let settings = Self::default();
            settings.validate()?;
            return Ok(settings);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.rpc_url()?;
        if self.rpc.timeout_ms == 0 {
            return Err(ConfigError::invalid("rpc.timeout_ms must be positive"));
        }
        if self.rpc.password.is_some() && self.rpc.user.is_none() {
            return Err(ConfigError::invalid("rpc.password requires rpc.user"));
        }
        if self.poller.max_attempts == 0 {
            return Err(ConfigError::invalid("poller.max_attempts must be positive"));
        }
        if self.poller.interval(&self.protocol).is_zero() {
            return Err(ConfigError::invalid("poller interval must be positive"));
        }
        if self.protocol.max_valid_until_block_increment == 0 {
            return Err(ConfigError::invalid(
                "protocol.max_valid_until_block_increment must be positive",
            ));
        }
        Ok(())
    }

    pub fn rpc_url(&self) -> ConfigResult<Url> {
        Url::parse(&self.rpc.url)
            .map_err(|e| ConfigError::invalid(format!("rpc.url '{}': {e}", self.rpc.url)))
    }

    /// The contract hash, which must be set by file or command line.
    pub fn contract_hash(&self) -> ConfigResult<UInt160> {
        self.contract
            .hash
            .ok_or_else(|| ConfigError::invalid("contract.hash is not set"))
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_millis(self.rpc.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = ClientSettings::from_toml_str("").unwrap();
        assert_eq!(settings, ClientSettings::default());
        assert_eq!(
            settings.poller.interval(&settings.protocol),
            Duration::from_millis(7_500)
        );
    }

    #[test]
    fn sections_override_defaults() {
        let settings = ClientSettings::from_toml_str(
            r#"
            [rpc]
            url = "http://seed1.neo.org:10332"

            [contract]
            hash = "0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b"

            [protocol]
            network = 894710606
            ms_per_block = 1000

            [poller]
            max_attempts = 3
            "#,
        )
        .unwrap();
        assert_eq!(settings.rpc.url, "http://seed1.neo.org:10332");
        assert_eq!(settings.protocol.network, 894_710_606);
        assert_eq!(settings.poller.max_attempts, 3);
        assert_eq!(
            settings.poller.interval(&settings.protocol),
            Duration::from_millis(500)
        );
        assert_eq!(
            settings.contract_hash().unwrap().to_string(),
            "0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b"
        );
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = ClientSettings::from_toml_str("[poller]\nmax_attempts = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ClientSettings::from_toml_str("[rpc]\nurl = \"not a url\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ClientSettings::from_toml_str("[contract]\nhash = \"0x12\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ClientSettings::from_toml_str("[rpc]\nport = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_contract_hash_is_invalid() {
        assert!(matches!(
            ClientSettings::default().contract_hash(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn load_reads_file_or_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert_eq!(
            ClientSettings::load(&missing).unwrap(),
            ClientSettings::default()
        );

        let path = dir.path().join("ascii-nft.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[poller]\ntimeout_ms = 5000").unwrap();
        let settings = ClientSettings::load(&path).unwrap();
        assert_eq!(settings.poller.timeout(), Duration::from_secs(5));
    }
}
