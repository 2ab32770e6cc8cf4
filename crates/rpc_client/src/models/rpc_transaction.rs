// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_transaction.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::parsing::{as_object, optional_str, parse_uint256, required_str};
use neo_nft_primitives::UInt256;
use serde_json::Value;

/// The parts of a verbose `getrawtransaction` answer the client reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcTransaction {
    pub hash: UInt256,
    /// Present once the transaction is in a block.
    pub block_hash: Option<UInt256>,
    pub confirmations: Option<u32>,
    pub block_time: Option<u64>,
}

impl RpcTransaction {
    pub fn from_json(json: &Value) -> Result<Self, String> {
        let object = as_object(json, "getrawtransaction")?;
        let hash = parse_uint256(required_str(object, "hash")?, "hash")?;
        let block_hash = optional_str(object, "blockhash")
            .map(|text| parse_uint256(text, "blockhash"))
            .transpose()?;
        let confirmations = object
            .get("confirmations")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok());
        let block_time = object.get("blocktime").and_then(Value::as_u64);
        Ok(Self {
            hash,
            block_hash,
            confirmations,
            block_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HASH: &str = "0x7da6ae7ff9d0b7af3d32f3a2feb2aa96c2a27ef8b651f9a132cfaad6ef20724c";
    const BLOCK: &str = "0xc1ed259e394c9cd93c1e0eb1e0f144c0d10da64861a24c0084f0d98270b698f1";

    #[test]
    fn confirmed_transaction_has_block() {
        let tx = RpcTransaction::from_json(&json!({
            "hash": HASH, "size": 252, "version": 0,
            "blockhash": BLOCK, "confirmations": 3, "blocktime": 1_700_000_000_000u64
        }))
        .unwrap();
        assert_eq!(tx.hash.to_string(), HASH);
        assert_eq!(tx.block_hash.unwrap().to_string(), BLOCK);
        assert_eq!(tx.confirmations, Some(3));
    }

    #[test]
    fn mempool_transaction_has_no_block() {
        let tx = RpcTransaction::from_json(&json!({"hash": HASH})).unwrap();
        assert!(tx.block_hash.is_none());
    }
}
