// Copyright (C) 2015-2025 The Neo Project.
//
// witness_rule.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Witness rules attached to signers with the `WitnessRules` scope.

use neo_nft_io::{helper, BinaryWriter, IoResult, Serializable};
use neo_nft_primitives::UInt160;
use serde::Serialize;

/// Maximum number of sub-conditions in an `And`/`Or` condition.
pub const MAX_SUBITEMS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum WitnessRuleAction {
    Deny = 0x00,
    Allow = 0x01,
}

/// The subset of witness conditions the client can express.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum WitnessCondition {
    Boolean { expression: bool },
    Not { expression: Box<WitnessCondition> },
    And { expressions: Vec<WitnessCondition> },
    Or { expressions: Vec<WitnessCondition> },
    ScriptHash { hash: UInt160 },
    CalledByEntry,
}

impl WitnessCondition {
    fn tag(&self) -> u8 {
        match self {
            Self::Boolean { .. } => 0x00,
            Self::Not { .. } => 0x01,
            Self::And { .. } => 0x02,
            Self::Or { .. } => 0x03,
            Self::ScriptHash { .. } => 0x18,
            Self::CalledByEntry => 0x20,
        }
    }
}

impl Serializable for WitnessCondition {
    fn size(&self) -> usize {
        1 + match self {
            Self::Boolean { .. } => 1,
            Self::Not { expression } => expression.size(),
            Self::And { expressions } | Self::Or { expressions } => {
                helper::get_array_size(expressions)
            }
            Self::ScriptHash { .. } => UInt160::LENGTH,
            Self::CalledByEntry => 0,
        }
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.tag());
        match self {
            Self::Boolean { expression } => writer.write_bool(*expression),
            Self::Not { expression } => Serializable::serialize(&**expression, writer)?,
            Self::And { expressions } | Self::Or { expressions } => {
                helper::serialize_array(expressions, MAX_SUBITEMS, "witness conditions", writer)?
            }
            Self::ScriptHash { hash } => writer.write_uint160(hash),
            Self::CalledByEntry => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WitnessRule {
    pub action: WitnessRuleAction,
    pub condition: WitnessCondition,
}

impl WitnessRule {
    pub fn new(action: WitnessRuleAction, condition: WitnessCondition) -> Self {
        Self { action, condition }
    }
}

impl Serializable for WitnessRule {
    fn size(&self) -> usize {
        1 + self.condition.size()
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.action as u8);
        Serializable::serialize(&self.condition, writer)
    }
}
