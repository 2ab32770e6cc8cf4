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

/// JSON-RPC error code used when the request never got an answer.
pub const INTERNAL_ERROR_CODE: i32 = -32603;

/// JSON-RPC error code used when an answer could not be parsed.
pub const PARSE_ERROR_CODE: i32 = -32700;

/// Codes a node answers for a transaction it does not know: -100 before
/// Neo 3.6, -103 from 3.6 on.
pub const UNKNOWN_TRANSACTION_CODES: [i32; 2] = [-100, -103];

/// Failure of a single JSON-RPC call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientRpcError {
    /// The request never got a JSON-RPC answer (connection, HTTP status, timeout).
    #[error("HTTP error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Server { code: i32, message: String },

    /// The answer arrived but could not be understood.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientRpcError {
    /// True when the node answered that it does not know the transaction.
    pub fn is_unknown_transaction(&self) -> bool {
        matches!(self, Self::Server { code, .. } if UNKNOWN_TRANSACTION_CODES.contains(code))
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Transport(_) => INTERNAL_ERROR_CODE,
            Self::Server { code, .. } => *code,
            Self::InvalidResponse(_) => PARSE_ERROR_CODE,
        }
    }

    /// True when the node was never reached or its answer was unreadable,
    /// so repeating the same call may succeed.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Server { .. })
    }
}

impl From<reqwest::Error> for ClientRpcError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

pub type RpcResult<T> = Result<T, ClientRpcError>;
