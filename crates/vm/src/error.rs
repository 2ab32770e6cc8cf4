// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use thiserror::Error;

/// Errors raised while preparing invocations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// A contract call was requested with an empty method name.
    #[error("Contract method name must not be empty")]
    EmptyMethod,

    /// A method name longer than the VM accepts.
    #[error("Contract method name too long: {0} bytes")]
    MethodTooLong(usize),

    /// A value could not be parsed into a VM state.
    #[error("Unknown VM state: {0}")]
    UnknownState(String),
}

pub type VmResult<T> = Result<T, VmError>;
