// Copyright (C) 2015-2025 The Neo Project.
//
// application_log_reader.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::mint_error::{MintError, MintResult, Stage};
use crate::models::{stack_item_from_json, RpcApplicationLog};
use crate::node_client::NodeClient;
use neo_nft_primitives::UInt256;
use num_bigint::BigInt;
use std::sync::Arc;
use tracing::info;

/// Reads the first return value of the first execution as an integer.
///
/// A faulted execution is reported without looking at its stack.
pub fn first_return_integer(log: &RpcApplicationLog) -> MintResult<BigInt> {
    let execution = log.executions.first().ok_or(MintError::NoReturnValue {
        stage: Stage::ExecutionLog,
    })?;
    if let Some(reason) = execution.fault_reason() {
        return Err(MintError::InvocationFaulted {
            stage: Stage::ExecutionLog,
            reason,
        });
    }
    let json = execution.stack.first().ok_or(MintError::NoReturnValue {
        stage: Stage::ExecutionLog,
    })?;
    let item = stack_item_from_json(json)
        .map_err(|e| MintError::UnsupportedStackItemShape(e.to_string()))?;
    item.as_integer().ok_or_else(|| {
        MintError::UnsupportedStackItemShape(format!("{} has no integer value", item.type_name()))
    })
}

/// Fetches execution logs of confirmed transactions.
pub struct ApplicationLogReader<C> {
    client: Arc<C>,
}

impl<C: NodeClient> ApplicationLogReader<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// The integer the transaction's script returned, e.g. a minted token id.
    pub async fn return_value(&self, tx_hash: &UInt256) -> MintResult<BigInt> {
        let log = self
            .client
            .get_application_log(tx_hash)
            .await
            .map_err(|e| MintError::rpc(Stage::ExecutionLog, e))?;
        let value = first_return_integer(&log)?;
        info!(target: "neo", tx = %tx_hash, %value, "read execution result");
        Ok(value)
    }
}
