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

use neo_nft_io::IoError;
use neo_nft_primitives::UInt160;
use thiserror::Error;

/// Errors raised while building transactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("A transaction needs at least one signer")]
    EmptySigners,

    #[error("Signer {0} appears more than once")]
    DuplicateSigner(UInt160),

    #[error("Too many signers: {0}")]
    TooManySigners(usize),

    #[error("Transaction script must not be empty")]
    EmptyScript,

    #[error("Serialization failed: {0}")]
    Io(#[from] IoError),
}

pub type CoreResult<T> = Result<T, CoreError>;
