// Copyright (C) 2015-2025 The Neo Project.
//
// nft_api.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Mint and query an ASCII-art NFT contract.

use crate::application_log_reader::ApplicationLogReader;
use crate::broadcaster::Broadcaster;
use crate::confirmation_poller::ConfirmationPoller;
use crate::mint_error::{MintError, MintResult, Stage};
use crate::node_client::NodeClient;
use crate::result_decoder::{DisplayEntry, ResultDecoder};
use crate::transaction_manager_factory::TransactionManagerFactory;
use neo_nft_config::ProtocolSettings;
use neo_nft_core::{Contract, Signer, Signers};
use neo_nft_crypto::KeyPair;
use neo_nft_primitives::{UInt160, UInt256};
use neo_nft_vm::{ContractCall, ContractParameter, StackItem};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

pub const MINT_METHOD: &str = "mint";
pub const PROPERTIES_METHOD: &str = "properties";

/// Token metadata, stored by the contract as UTF-8 JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "tokenURI")]
    pub token_uri: String,
}

impl Default for NftMetadata {
    fn default() -> Self {
        Self {
            name: "some".to_string(),
            description: "Test description".to_string(),
            image: "ipfs://example_ipfs_hash".to_string(),
            token_uri: String::new(),
        }
    }
}

impl NftMetadata {
    pub fn to_bytes(&self) -> MintResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| MintError::InvalidMetadata(e.to_string()))
    }
}

/// Arguments of the contract's `mint` method besides the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRequest {
    pub metadata: NftMetadata,
    pub locked_content: Vec<u8>,
    pub royalties: Vec<u8>,
    /// The ASCII art.
    pub data: String,
}

impl MintRequest {
    pub fn new(metadata: NftMetadata, data: impl Into<String>) -> Self {
        Self {
            metadata,
            locked_content: b"something".to_vec(),
            royalties: Vec::new(),
            data: data.into(),
        }
    }

    /// `mint(account, meta, lockedContent, royalties, data)`.
    pub fn to_call(&self, contract: UInt160, owner: UInt160) -> MintResult<ContractCall> {
        let args = vec![
            ContractParameter::Hash160(owner),
            ContractParameter::ByteArray(self.metadata.to_bytes()?),
            ContractParameter::ByteArray(self.locked_content.clone()),
            ContractParameter::ByteArray(self.royalties.clone()),
            ContractParameter::String(self.data.clone()),
        ];
        ContractCall::new(contract, MINT_METHOD, args).map_err(MintError::from)
    }
}

/// Outcome of a confirmed mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    pub tx_hash: UInt256,
    pub block_hash: UInt256,
    pub token_id: BigInt,
}

/// The ASCII NFT contract as seen through one node.
pub struct NftApi<C> {
    client: Arc<C>,
    contract: UInt160,
    protocol: ProtocolSettings,
    poller: ConfirmationPoller<C>,
}

impl<C: NodeClient> NftApi<C> {
    pub fn new(
        client: Arc<C>,
        contract: UInt160,
        protocol: ProtocolSettings,
        poller: ConfirmationPoller<C>,
    ) -> Self {
        Self {
            client,
            contract,
            protocol,
            poller,
        }
    }

    pub fn contract(&self) -> &UInt160 {
        &self.contract
    }

    /// Builds, prices, signs and broadcasts a mint paid and owned by `key`'s
    /// account. Returns the transaction hash once the node accepted it.
    pub async fn submit_mint(&self, key: &KeyPair, request: &MintRequest) -> MintResult<UInt256> {
        let owner = Contract::signature_script_hash(key.public_key());
        let call = request.to_call(self.contract, owner)?;
        let signers = Signers::single(Signer::called_by_entry(owner));

        let factory = TransactionManagerFactory::new(self.client.clone(), self.protocol.clone());
        let mut manager = factory.make_transaction(call.to_script(), signers).await?;
        manager.add_signature(key)?;
        let tx = manager.sign()?;

        Broadcaster::new(self.client.clone()).broadcast(&tx).await
    }

    /// Waits for `tx_hash` and reads the minted token id from its execution.
    pub async fn confirm_mint(&self, tx_hash: UInt256) -> MintResult<MintReceipt> {
        let block_hash = self.poller.wait(&tx_hash).await?;
        let token_id = ApplicationLogReader::new(self.client.clone())
            .return_value(&tx_hash)
            .await?;
        info!(target: "neo", tx = %tx_hash, %token_id, "minted token");
        Ok(MintReceipt {
            tx_hash,
            block_hash,
            token_id,
        })
    }

    /// The whole mint: submit, confirm, read the token id.
    pub async fn mint(&self, key: &KeyPair, request: &MintRequest) -> MintResult<MintReceipt> {
        let tx_hash = self.submit_mint(key, request).await?;
        self.confirm_mint(tx_hash).await
    }

    /// Read-only `properties(tokenId)` with the token id as its signed
    /// little-endian bytes, under a zero-account signer.
    ///
    /// An exception with no result is fatal; an exception next to a result
    /// is logged and the result used.
    pub async fn properties(&self, token_id: &BigInt) -> MintResult<StackItem> {
        let args = [ContractParameter::ByteArray(token_id.to_signed_bytes_le())];
        let signers = [Signer::called_by_entry(UInt160::zero())];
        let result = self
            .client
            .invoke_function(&self.contract, PROPERTIES_METHOD, &args, &signers)
            .await
            .map_err(|e| MintError::rpc(Stage::Query, e))?;

        let item = match (result.fault_message(), result.stack_item(0)) {
            (Some(reason), None) => {
                return Err(MintError::InvocationFaulted {
                    stage: Stage::Query,
                    reason: reason.to_string(),
                })
            }
            (None, None) => return Err(MintError::NoReturnValue { stage: Stage::Query }),
            (exception, Some(item)) => {
                if let Some(reason) = exception {
                    warn!(target: "neo", %token_id, exception = reason, "properties raised an exception");
                }
                item
            }
        };
        item.map_err(|e| MintError::UnsupportedStackItemShape(e.to_string()))
    }

    /// `properties(tokenId)` decoded for display.
    pub async fn describe(
        &self,
        token_id: &BigInt,
        decoder: &ResultDecoder,
    ) -> MintResult<Vec<DisplayEntry>> {
        let item = self.properties(token_id).await?;
        Ok(decoder.decode(&item))
    }
}
