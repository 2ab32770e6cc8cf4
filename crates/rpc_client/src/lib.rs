// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo NFT RPC Client
//!
//! A JSON-RPC client for Neo N3 nodes and the pipeline built on it:
//! assemble, sign, broadcast and confirm a mint, then query and decode the
//! token's properties.

pub mod application_log_reader;
pub mod broadcaster;
pub mod confirmation_poller;
pub mod error;
pub mod mint_error;
pub mod models;
pub mod nft_api;
pub mod node_client;
pub mod policy_api;
pub mod result_decoder;
pub mod rpc_client;
pub mod transaction_manager;
pub mod transaction_manager_factory;

#[cfg(test)]
mod test_node;

pub use application_log_reader::{first_return_integer, ApplicationLogReader};
pub use broadcaster::Broadcaster;
pub use confirmation_poller::ConfirmationPoller;
pub use error::{ClientRpcError, RpcResult};
pub use mint_error::{MintError, MintResult, Stage};
pub use models::{RpcApplicationLog, RpcExecution, RpcInvokeResult, RpcTransaction, StackItemError};
pub use nft_api::{MintReceipt, MintRequest, NftApi, NftMetadata};
pub use node_client::{InclusionStatus, NodeClient};
pub use policy_api::{FeeRates, PolicyApi};
pub use result_decoder::{DisplayEntry, DisplayPolicy, Layout, ResultDecoder};
pub use rpc_client::{RpcClient, RpcClientBuilder};
pub use transaction_manager::TransactionManager;
pub use transaction_manager_factory::{calculate_network_fee, TransactionManagerFactory};
