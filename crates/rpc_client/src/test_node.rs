// Copyright (C) 2015-2025 The Neo Project.
//
// test_node.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Scripted in-memory node for unit tests.

use crate::error::{ClientRpcError, RpcResult};
use crate::models::{stack_item_to_json, RpcApplicationLog, RpcInvokeResult};
use crate::node_client::{InclusionStatus, NodeClient};
use async_trait::async_trait;
use neo_nft_core::Signer;
use neo_nft_primitives::{UInt160, UInt256};
use neo_nft_vm::{ContractParameter, StackItem, VMState};
use std::collections::VecDeque;
use std::sync::Mutex;

fn unscripted(call: &str) -> ClientRpcError {
    ClientRpcError::Transport(format!("no scripted answer for {call}"))
}

/// Answers calls from per-method queues and records what it was asked.
#[derive(Default)]
pub(crate) struct TestNode {
    block_count: Mutex<u32>,
    invokes: Mutex<VecDeque<RpcResult<RpcInvokeResult>>>,
    sends: Mutex<VecDeque<RpcResult<UInt256>>>,
    statuses: Mutex<VecDeque<RpcResult<InclusionStatus>>>,
    logs: Mutex<VecDeque<RpcResult<RpcApplicationLog>>>,
    invoked_scripts: Mutex<Vec<Vec<u8>>>,
    invoked_functions: Mutex<Vec<(UInt160, String, Vec<ContractParameter>, Vec<Signer>)>>,
    sent: Mutex<Vec<Vec<u8>>>,
    status_calls: Mutex<u32>,
    log_calls: Mutex<u32>,
}

impl TestNode {
    pub fn halt(gas_consumed: i64, stack: Vec<StackItem>) -> RpcInvokeResult {
        RpcInvokeResult {
            script: String::new(),
            state: VMState::HALT,
            gas_consumed,
            exception: None,
            stack: stack.iter().map(stack_item_to_json).collect(),
        }
    }

    pub fn fault(message: &str) -> RpcInvokeResult {
        RpcInvokeResult {
            script: String::new(),
            state: VMState::FAULT,
            gas_consumed: 0,
            exception: Some(message.to_string()),
            stack: Vec::new(),
        }
    }

    pub fn set_block_count(&self, count: u32) {
        *self.block_count.lock().unwrap() = count;
    }

    pub fn push_invoke(&self, result: RpcInvokeResult) {
        self.invokes.lock().unwrap().push_back(Ok(result));
    }

    pub fn push_invoke_error(&self, err: ClientRpcError) {
        self.invokes.lock().unwrap().push_back(Err(err));
    }

    pub fn push_send(&self, result: RpcResult<UInt256>) {
        self.sends.lock().unwrap().push_back(result);
    }

    pub fn push_status(&self, result: RpcResult<InclusionStatus>) {
        self.statuses.lock().unwrap().push_back(result);
    }

    pub fn push_log(&self, result: RpcResult<RpcApplicationLog>) {
        self.logs.lock().unwrap().push_back(result);
    }

    pub fn invoked_scripts(&self) -> Vec<Vec<u8>> {
        self.invoked_scripts.lock().unwrap().clone()
    }

    pub fn invoked_functions(&self) -> Vec<(UInt160, String, Vec<ContractParameter>, Vec<Signer>)> {
        self.invoked_functions.lock().unwrap().clone()
    }

    pub fn sent_transactions(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn status_calls(&self) -> u32 {
        *self.status_calls.lock().unwrap()
    }

    pub fn log_calls(&self) -> u32 {
        *self.log_calls.lock().unwrap()
    }
}

#[async_trait]
impl NodeClient for TestNode {
    async fn invoke_script(&self, script: &[u8], _signers: &[Signer]) -> RpcResult<RpcInvokeResult> {
        self.invoked_scripts.lock().unwrap().push(script.to_vec());
        self.invokes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("invokescript")))
    }

    async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
        signers: &[Signer],
    ) -> RpcResult<RpcInvokeResult> {
        self.invoked_functions.lock().unwrap().push((
            *contract,
            method.to_string(),
            args.to_vec(),
            signers.to_vec(),
        ));
        self.invokes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("invokefunction")))
    }

    async fn get_block_count(&self) -> RpcResult<u32> {
        Ok(*self.block_count.lock().unwrap())
    }

    async fn send_raw_transaction(&self, tx: &[u8]) -> RpcResult<UInt256> {
        self.sent.lock().unwrap().push(tx.to_vec());
        self.sends
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("sendrawtransaction")))
    }

    async fn transaction_status(&self, _hash: &UInt256) -> RpcResult<InclusionStatus> {
        *self.status_calls.lock().unwrap() += 1;
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(InclusionStatus::NotFound))
    }

    async fn get_application_log(&self, _hash: &UInt256) -> RpcResult<RpcApplicationLog> {
        *self.log_calls.lock().unwrap() += 1;
        self.logs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("getapplicationlog")))
    }
}
