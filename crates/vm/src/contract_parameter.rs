// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Typed arguments for contract invocations.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use neo_nft_primitives::UInt160;
use num_bigint::BigInt;
use serde_json::{json, Value};

/// A typed argument passed to a contract method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    Hash160(UInt160),
    ByteArray(Vec<u8>),
    String(String),
    Integer(BigInt),
    Boolean(bool),
    Array(Vec<ContractParameter>),
}

impl ContractParameter {
    /// Type name used by the JSON-RPC parameter form.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Hash160(_) => "Hash160",
            Self::ByteArray(_) => "ByteArray",
            Self::String(_) => "String",
            Self::Integer(_) => "Integer",
            Self::Boolean(_) => "Boolean",
            Self::Array(_) => "Array",
        }
    }

    /// Renders the `{"type": ..., "value": ...}` object accepted by `invokefunction`.
    pub fn to_json(&self) -> Value {
        let value = match self {
            Self::Hash160(hash) => Value::String(hash.to_hex_string()),
            Self::ByteArray(bytes) => Value::String(STANDARD.encode(bytes)),
            Self::String(text) => Value::String(text.clone()),
            Self::Integer(number) => Value::String(number.to_string()),
            Self::Boolean(flag) => Value::Bool(*flag),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
        };
        json!({ "type": self.type_name(), "value": value })
    }
}

impl From<UInt160> for ContractParameter {
    fn from(value: UInt160) -> Self {
        Self::Hash160(value)
    }
}

impl From<Vec<u8>> for ContractParameter {
    fn from(value: Vec<u8>) -> Self {
        Self::ByteArray(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_forms_match_rpc_expectations() {
        let hash = UInt160::from([1u8; 20]);
        assert_eq!(
            ContractParameter::from(hash).to_json(),
            json!({"type": "Hash160", "value": hash.to_hex_string()})
        );
        assert_eq!(
            ContractParameter::from(vec![0x07u8]).to_json(),
            json!({"type": "ByteArray", "value": "Bw=="})
        );
        assert_eq!(
            ContractParameter::from(BigInt::from(-5)).to_json(),
            json!({"type": "Integer", "value": "-5"})
        );
    }

    #[test]
    fn nested_arrays_render_recursively() {
        let param = ContractParameter::Array(vec![
            ContractParameter::from(true),
            ContractParameter::from("x"),
        ]);
        assert_eq!(
            param.to_json(),
            json!({"type": "Array", "value": [
                {"type": "Boolean", "value": true},
                {"type": "String", "value": "x"}
            ]})
        );
    }
}
