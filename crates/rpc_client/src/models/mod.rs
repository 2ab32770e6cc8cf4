// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! JSON models of the RPC answers the client consumes.

mod parsing;
pub mod rpc_application_log;
pub mod rpc_invoke_result;
pub mod rpc_request;
pub mod rpc_transaction;
pub mod stack_item_json;

pub use rpc_application_log::{RpcApplicationLog, RpcExecution};
pub use rpc_invoke_result::RpcInvokeResult;
pub use rpc_request::{RpcRequest, RpcResponse, RpcResponseError};
pub use rpc_transaction::RpcTransaction;
pub use stack_item_json::{stack_item_from_json, stack_item_to_json, StackItemError};
