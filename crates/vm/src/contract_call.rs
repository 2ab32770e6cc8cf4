// Copyright (C) 2015-2025 The Neo Project.
//
// contract_call.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::contract_parameter::ContractParameter;
use crate::error::{VmError, VmResult};
use crate::script_builder::ScriptBuilder;
use neo_nft_primitives::UInt160;

/// Longest method name the VM accepts in `System.Contract.Call`.
pub const MAX_METHOD_LENGTH: usize = 32;

/// A validated contract invocation: target, method and ordered arguments.
///
/// The method name is checked once here; turning the call into a script
/// afterwards cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    contract: UInt160,
    method: String,
    args: Vec<ContractParameter>,
}

impl ContractCall {
    pub fn new(
        contract: UInt160,
        method: impl Into<String>,
        args: Vec<ContractParameter>,
    ) -> VmResult<Self> {
        let method = method.into();
        if method.is_empty() {
            return Err(VmError::EmptyMethod);
        }
        if method.len() > MAX_METHOD_LENGTH {
            return Err(VmError::MethodTooLong(method.len()));
        }
        Ok(Self {
            contract,
            method,
            args,
        })
    }

    pub fn contract(&self) -> &UInt160 {
        &self.contract
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn args(&self) -> &[ContractParameter] {
        &self.args
    }

    /// Encodes the call as a standalone invocation script.
    pub fn to_script(&self) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.emit_dynamic_call(&self.contract, &self.method, &self.args);
        builder.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_method_is_rejected() {
        assert_eq!(
            ContractCall::new(UInt160::zero(), "", vec![]).unwrap_err(),
            VmError::EmptyMethod
        );
    }

    #[test]
    fn overlong_method_is_rejected() {
        let name = "m".repeat(MAX_METHOD_LENGTH + 1);
        assert_eq!(
            ContractCall::new(UInt160::zero(), name, vec![]).unwrap_err(),
            VmError::MethodTooLong(MAX_METHOD_LENGTH + 1)
        );
    }

    #[test]
    fn script_matches_builder_output() {
        let contract = UInt160::from([3u8; 20]);
        let args = vec![ContractParameter::from("hi")];
        let call = ContractCall::new(contract, "properties", args.clone()).unwrap();

        let mut builder = ScriptBuilder::new();
        builder.emit_dynamic_call(&contract, "properties", &args);
        assert_eq!(call.to_script(), builder.into_bytes());
    }
}
