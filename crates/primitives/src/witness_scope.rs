// Copyright (C) 2015-2025 The Neo Project.
//
// witness_scope.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{PrimitiveError, PrimitiveResult};
use std::fmt;

/// Scope flags restricting where a signer's witness is valid.
///
/// Only single-flag scopes are modelled; the client never combines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WitnessScope {
    /// Witness is only used for the transaction itself (fees).
    None = 0x00,
    /// Witness is valid when the contract is called directly by the entry script.
    CalledByEntry = 0x01,
    /// Witness is valid for explicitly listed contracts.
    CustomContracts = 0x10,
    /// Witness is valid for contracts in the listed groups.
    CustomGroups = 0x20,
    /// Witness validity is decided by the attached rules.
    WitnessRules = 0x40,
    /// Witness is valid everywhere.
    Global = 0x80,
}

impl WitnessScope {
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Parses the wire byte of a single-flag scope.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidWitnessScope` for unknown bytes.
    pub fn from_byte(value: u8) -> PrimitiveResult<Self> {
        match value {
            0x00 => Ok(Self::None),
            0x01 => Ok(Self::CalledByEntry),
            0x10 => Ok(Self::CustomContracts),
            0x20 => Ok(Self::CustomGroups),
            0x40 => Ok(Self::WitnessRules),
            0x80 => Ok(Self::Global),
            other => Err(PrimitiveError::InvalidWitnessScope(format!("0x{other:02x}"))),
        }
    }

    /// Name used in JSON-RPC signer objects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::CalledByEntry => "CalledByEntry",
            Self::CustomContracts => "CustomContracts",
            Self::CustomGroups => "CustomGroups",
            Self::WitnessRules => "WitnessRules",
            Self::Global => "Global",
        }
    }
}

impl fmt::Display for WitnessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_round_trip() {
        for scope in [
            WitnessScope::None,
            WitnessScope::CalledByEntry,
            WitnessScope::CustomContracts,
            WitnessScope::CustomGroups,
            WitnessScope::WitnessRules,
            WitnessScope::Global,
        ] {
            assert_eq!(WitnessScope::from_byte(scope.to_byte()).unwrap(), scope);
        }
    }

    #[test]
    fn unknown_byte_is_rejected() {
        assert!(WitnessScope::from_byte(0x02).is_err());
    }
}
