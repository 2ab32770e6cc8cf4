// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_application_log.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::parsing::{
    as_object, optional_str, parse_uint256, required_i64, required_str, stack_of,
};
use neo_nft_primitives::UInt256;
use neo_nft_vm::VMState;
use serde_json::Value;

/// Result of `getapplicationlog`.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcApplicationLog {
    pub tx_id: Option<UInt256>,
    pub executions: Vec<RpcExecution>,
}

impl RpcApplicationLog {
    pub fn from_json(json: &Value) -> Result<Self, String> {
        let object = as_object(json, "getapplicationlog")?;
        let tx_id = optional_str(object, "txid")
            .map(|text| parse_uint256(text, "txid"))
            .transpose()?;
        let executions = match object.get("executions") {
            Some(Value::Array(items)) => items
                .iter()
                .map(RpcExecution::from_json)
                .collect::<Result<Vec<_>, _>>()?,
            None | Some(Value::Null) => Vec::new(),
            Some(_) => return Err("'executions' must be an array".to_string()),
        };
        Ok(Self { tx_id, executions })
    }
}

/// One trigger's execution record.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcExecution {
    pub trigger: String,
    pub vm_state: VMState,
    pub gas_consumed: i64,
    pub exception: Option<String>,
    pub stack: Vec<Value>,
}

impl RpcExecution {
    pub fn from_json(json: &Value) -> Result<Self, String> {
        let object = as_object(json, "execution")?;
        let trigger = optional_str(object, "trigger")
            .unwrap_or("Application")
            .to_string();
        let state_str = required_str(object, "vmstate")?;
        let vm_state = state_str
            .parse::<VMState>()
            .map_err(|_| format!("Invalid VM state: {state_str}"))?;
        Ok(Self {
            trigger,
            vm_state,
            gas_consumed: required_i64(object, "gasconsumed")?,
            exception: optional_str(object, "exception").map(str::to_string),
            stack: stack_of(object),
        })
    }

    /// Why the execution aborted, if it did.
    pub fn fault_reason(&self) -> Option<String> {
        match self.exception.as_deref() {
            Some(message) if !message.is_empty() => Some(message.to_string()),
            _ if self.vm_state.is_fault() => Some(format!("VM state {}", self.vm_state)),
            _ => None,
        }
    }
}
