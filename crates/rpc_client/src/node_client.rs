// Copyright (C) 2015-2025 The Neo Project.
//
// node_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The node operations the mint and query pipelines depend on.

use crate::error::RpcResult;
use crate::models::{RpcApplicationLog, RpcInvokeResult};
use crate::rpc_client::RpcClient;
use async_trait::async_trait;
use neo_nft_core::Signer;
use neo_nft_primitives::{UInt160, UInt256};
use neo_nft_vm::ContractParameter;

/// Where a transaction stands from the node's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionStatus {
    /// Persisted in the block with this hash.
    Included(UInt256),
    /// Known to the node but still in its memory pool.
    Pending,
    /// Unknown to the node.
    NotFound,
}

/// A remote Neo node.
///
/// Every method is a single request; retries are the caller's decision.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Dry-runs `script` with the given signers.
    async fn invoke_script(&self, script: &[u8], signers: &[Signer]) -> RpcResult<RpcInvokeResult>;

    /// Calls one contract method read-only.
    async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
        signers: &[Signer],
    ) -> RpcResult<RpcInvokeResult>;

    async fn get_block_count(&self) -> RpcResult<u32>;

    /// Relays a serialized, witnessed transaction.
    async fn send_raw_transaction(&self, tx: &[u8]) -> RpcResult<UInt256>;

    /// Looks the transaction up. A JSON-RPC error other than "unknown
    /// transaction" is returned as is.
    async fn transaction_status(&self, hash: &UInt256) -> RpcResult<InclusionStatus>;

    async fn get_application_log(&self, hash: &UInt256) -> RpcResult<RpcApplicationLog>;
}

#[async_trait]
impl NodeClient for RpcClient {
    async fn invoke_script(&self, script: &[u8], signers: &[Signer]) -> RpcResult<RpcInvokeResult> {
        RpcClient::invoke_script(self, script, signers).await
    }

    async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
        signers: &[Signer],
    ) -> RpcResult<RpcInvokeResult> {
        RpcClient::invoke_function(self, contract, method, args, signers).await
    }

    async fn get_block_count(&self) -> RpcResult<u32> {
        RpcClient::get_block_count(self).await
    }

    async fn send_raw_transaction(&self, tx: &[u8]) -> RpcResult<UInt256> {
        RpcClient::send_raw_transaction(self, tx).await
    }

    async fn transaction_status(&self, hash: &UInt256) -> RpcResult<InclusionStatus> {
        match self.get_raw_transaction(hash).await {
            Ok(tx) => Ok(tx
                .block_hash
                .map_or(InclusionStatus::Pending, InclusionStatus::Included)),
            Err(err) if err.is_unknown_transaction() => Ok(InclusionStatus::NotFound),
            Err(err) => Err(err),
        }
    }

    async fn get_application_log(&self, hash: &UInt256) -> RpcResult<RpcApplicationLog> {
        RpcClient::get_application_log(self, hash).await
    }
}
