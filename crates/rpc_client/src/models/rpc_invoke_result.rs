// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_invoke_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::parsing::{as_object, optional_str, required_i64, required_str, stack_of};
use super::stack_item_json::{stack_item_from_json, StackItemError};
use neo_nft_vm::{StackItem, VMState};
use serde_json::Value;

/// Result of `invokescript` / `invokefunction`.
///
/// The stack is kept in the node's JSON form; [`RpcInvokeResult::stack_item`]
/// parses single entries on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcInvokeResult {
    pub script: String,
    pub state: VMState,
    /// In datoshi.
    pub gas_consumed: i64,
    pub exception: Option<String>,
    pub stack: Vec<Value>,
}

impl RpcInvokeResult {
    pub fn from_json(json: &Value) -> Result<Self, String> {
        let object = as_object(json, "invoke")?;
        let script = optional_str(object, "script").unwrap_or_default().to_string();
        let state_str = required_str(object, "state")?;
        let state = state_str
            .parse::<VMState>()
            .map_err(|_| format!("Invalid VM state: {state_str}"))?;
        let gas_consumed = required_i64(object, "gasconsumed")?;
        let exception = optional_str(object, "exception").map(str::to_string);

        Ok(Self {
            script,
            state,
            gas_consumed,
            exception,
            stack: stack_of(object),
        })
    }

    /// The exception message, if the node reported a non-empty one.
    pub fn fault_message(&self) -> Option<&str> {
        self.exception.as_deref().filter(|message| !message.is_empty())
    }

    pub fn stack_item(&self, index: usize) -> Option<Result<StackItem, StackItemError>> {
        self.stack.get(index).map(stack_item_from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use serde_json::json;

    #[test]
    fn parses_halted_invocation() {
        let result = RpcInvokeResult::from_json(&json!({
            "script": "EMAfDAxnZXRGZWVQZXJCeXRl",
            "state": "HALT",
            "gasconsumed": "984060",
            "exception": null,
            "stack": [{"type": "Integer", "value": "1000"}]
        }))
        .unwrap();
        assert_eq!(result.state, VMState::HALT);
        assert_eq!(result.gas_consumed, 984_060);
        assert_eq!(result.fault_message(), None);
        assert_eq!(
            result.stack_item(0).unwrap().unwrap().as_integer(),
            Some(BigInt::from(1000))
        );
        assert!(result.stack_item(1).is_none());
    }

    #[test]
    fn empty_exception_is_not_a_fault() {
        let result = RpcInvokeResult::from_json(&json!({
            "state": "HALT", "gasconsumed": "0", "exception": "", "stack": []
        }))
        .unwrap();
        assert_eq!(result.fault_message(), None);
    }

    #[test]
    fn missing_state_is_rejected() {
        assert!(RpcInvokeResult::from_json(&json!({"gasconsumed": "0"})).is_err());
        assert!(RpcInvokeResult::from_json(&json!([])).is_err());
    }
}
