// Copyright (C) 2015-2025 The Neo Project.
//
// policy_api.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{ClientRpcError, RpcResult};
use crate::node_client::NodeClient;
use neo_nft_core::PolicyContract;
use neo_nft_primitives::UInt160;
use neo_nft_vm::ScriptBuilder;
use num_traits::ToPrimitive;
use std::sync::Arc;

/// Network fee rates, read from the PolicyContract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeRates {
    /// Datoshi per serialized byte.
    pub fee_per_byte: i64,
    /// Multiplier applied to opcode and syscall prices.
    pub exec_fee_factor: i64,
}

/// Get Policy info by RPC API
pub struct PolicyApi<C> {
    client: Arc<C>,
    script_hash: UInt160,
}

impl<C: NodeClient> PolicyApi<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            script_hash: PolicyContract::hash(),
        }
    }

    pub async fn get_fee_per_byte(&self) -> RpcResult<i64> {
        self.invoke_integer(PolicyContract::GET_FEE_PER_BYTE).await
    }

    pub async fn get_exec_fee_factor(&self) -> RpcResult<i64> {
        self.invoke_integer(PolicyContract::GET_EXEC_FEE_FACTOR).await
    }

    pub async fn get_fee_rates(&self) -> RpcResult<FeeRates> {
        Ok(FeeRates {
            fee_per_byte: self.get_fee_per_byte().await?,
            exec_fee_factor: self.get_exec_fee_factor().await?,
        })
    }

    async fn invoke_integer(&self, method: &str) -> RpcResult<i64> {
        let mut builder = ScriptBuilder::new();
        builder.emit_dynamic_call(&self.script_hash, method, &[]);
        let result = self.client.invoke_script(&builder.into_bytes(), &[]).await?;

        if let Some(message) = result.fault_message() {
            return Err(ClientRpcError::invalid_response(format!(
                "{method} faulted: {message}"
            )));
        }
        let item = result
            .stack_item(0)
            .ok_or_else(|| ClientRpcError::invalid_response(format!("{method}: No result returned")))?
            .map_err(|e| ClientRpcError::invalid_response(format!("{method}: {e}")))?;
        item.as_integer()
            .and_then(|value| value.to_i64())
            .ok_or_else(|| {
                ClientRpcError::invalid_response(format!(
                    "{method}: invalid value of type {}",
                    item.type_name()
                ))
            })
    }
}
