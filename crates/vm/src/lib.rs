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

//! # Neo NFT VM
//!
//! The client never executes scripts; it only builds them and reads the
//! values the node's VM returns. This crate holds both halves:
//! - [`ScriptBuilder`] and [`ContractCall`] encode contract invocations
//! - [`StackItem`] and [`VMState`] model what comes back

pub mod call_flags;
pub mod contract_call;
pub mod contract_parameter;
pub mod error;
pub mod op_code;
pub mod script_builder;
pub mod stack_item;
pub mod vm_state;

pub use call_flags::CallFlags;
pub use contract_call::ContractCall;
pub use contract_parameter::ContractParameter;
pub use error::{VmError, VmResult};
pub use op_code::OpCode;
pub use script_builder::{interop_hash, ScriptBuilder, SYSTEM_CONTRACT_CALL, SYSTEM_CRYPTO_CHECK_SIG};
pub use stack_item::StackItem;
pub use vm_state::VMState;
