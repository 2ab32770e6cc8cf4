// Copyright (C) 2015-2025 The Neo Project.
//
// mint_error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::ClientRpcError;
use neo_nft_core::CoreError;
use neo_nft_crypto::SignError;
use neo_nft_io::IoError;
use neo_nft_primitives::UInt160;
use neo_nft_vm::VmError;
use std::fmt;
use thiserror::Error;

/// Pipeline stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Build,
    Assemble,
    Sign,
    Broadcast,
    Confirm,
    ExecutionLog,
    Query,
    Decode,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Build => "build",
            Stage::Assemble => "assemble",
            Stage::Sign => "sign",
            Stage::Broadcast => "broadcast",
            Stage::Confirm => "confirm",
            Stage::ExecutionLog => "execution-log",
            Stage::Query => "query",
            Stage::Decode => "decode",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors of the mint and query pipelines. Each one aborts the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintError {
    #[error("invalid contract call: {0}")]
    InvalidCall(#[from] VmError),

    #[error("invalid transaction: {0}")]
    InvalidTransaction(#[from] CoreError),

    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// The dry run could not price the script.
    #[error("fee estimation failed: {0}")]
    FeeEstimationFailed(String),

    /// A signer entry has no key pair.
    #[error("no key supplied for signer {0}")]
    MissingSignerKey(UInt160),

    /// A key pair whose account is not among the signers.
    #[error("key for {0} does not match any signer")]
    UnexpectedSignerKey(UInt160),

    #[error("signing failed: {0}")]
    SigningFailed(#[from] SignError),

    #[error("transaction encoding failed: {source}")]
    Encoding { stage: Stage, source: IoError },

    /// The node declined the transaction.
    #[error("rejected by node: {reason}")]
    RejectedByNode { stage: Stage, reason: String },

    /// The transaction may or may not have reached the node.
    #[error("transmission failed: {0}")]
    TransmissionFailed(ClientRpcError),

    #[error("transaction not confirmed after {attempts} attempts")]
    ConfirmationTimeout { attempts: u32 },

    #[error("invocation returned no value")]
    NoReturnValue { stage: Stage },

    /// The contract call itself aborted.
    #[error("invocation faulted: {reason}")]
    InvocationFaulted { stage: Stage, reason: String },

    #[error("unsupported stack item: {0}")]
    UnsupportedStackItemShape(String),

    #[error("{source}")]
    Rpc { stage: Stage, source: ClientRpcError },
}

impl MintError {
    pub fn rpc(stage: Stage, source: ClientRpcError) -> Self {
        Self::Rpc { stage, source }
    }

    pub fn encoding(stage: Stage, source: IoError) -> Self {
        Self::Encoding { stage, source }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidCall(_) | Self::InvalidTransaction(_) | Self::InvalidMetadata(_) => {
                Stage::Build
            }
            Self::FeeEstimationFailed(_) => Stage::Assemble,
            Self::MissingSignerKey(_) | Self::UnexpectedSignerKey(_) | Self::SigningFailed(_) => {
                Stage::Sign
            }
            Self::TransmissionFailed(_) => Stage::Broadcast,
            Self::ConfirmationTimeout { .. } => Stage::Confirm,
            Self::UnsupportedStackItemShape(_) => Stage::Decode,
            Self::Encoding { stage, .. }
            | Self::RejectedByNode { stage, .. }
            | Self::NoReturnValue { stage }
            | Self::InvocationFaulted { stage, .. }
            | Self::Rpc { stage, .. } => *stage,
        }
    }
}

pub type MintResult<T> = Result<T, MintError>;
