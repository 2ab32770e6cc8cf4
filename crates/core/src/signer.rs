// Copyright (C) 2015-2025 The Neo Project.
//
// signer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::witness_rule::{WitnessRule, MAX_SUBITEMS};
use neo_nft_io::{helper, BinaryWriter, IoResult, Serializable};
use neo_nft_primitives::{UInt160, WitnessScope};
use serde_json::{json, Value};

/// An account that authorizes a transaction, with the scope of its witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    account: UInt160,
    scope: WitnessScope,
    rules: Vec<WitnessRule>,
}

impl Signer {
    /// Witness valid only for the entry-point call.
    pub fn called_by_entry(account: UInt160) -> Self {
        Self {
            account,
            scope: WitnessScope::CalledByEntry,
            rules: Vec::new(),
        }
    }

    /// Witness valid for the whole transaction.
    pub fn global(account: UInt160) -> Self {
        Self {
            account,
            scope: WitnessScope::Global,
            rules: Vec::new(),
        }
    }

    /// Witness valid only where the rules allow it.
    pub fn with_rules(account: UInt160, rules: Vec<WitnessRule>) -> Self {
        Self {
            account,
            scope: WitnessScope::WitnessRules,
            rules,
        }
    }

    pub fn account(&self) -> &UInt160 {
        &self.account
    }

    pub fn scope(&self) -> WitnessScope {
        self.scope
    }

    pub fn rules(&self) -> &[WitnessRule] {
        &self.rules
    }

    /// Signer object in the shape `invokescript`/`invokefunction` accept.
    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "account": self.account.to_hex_string(),
            "scopes": self.scope.as_str(),
        });
        if self.scope == WitnessScope::WitnessRules {
            value["rules"] = serde_json::to_value(&self.rules).unwrap_or(Value::Null);
        }
        value
    }
}

impl Serializable for Signer {
    fn size(&self) -> usize {
        let mut size = UInt160::LENGTH + 1;
        if self.scope == WitnessScope::WitnessRules {
            size += helper::get_array_size(&self.rules);
        }
        size
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_uint160(&self.account);
        writer.write_u8(self.scope.to_byte());
        if self.scope == WitnessScope::WitnessRules {
            helper::serialize_array(&self.rules, MAX_SUBITEMS, "witness rules", writer)?;
        }
        Ok(())
    }
}
