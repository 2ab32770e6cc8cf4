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

//! Error types for primitive parsing.

use thiserror::Error;

/// Errors raised while constructing primitive values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// Input had the wrong shape (length, characters, checksum).
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// An address carried an unexpected version byte.
    #[error("Invalid address version: expected 0x{expected:02x}, found 0x{found:02x}")]
    InvalidAddressVersion { expected: u8, found: u8 },

    /// A witness scope byte or name was not recognised.
    #[error("Invalid witness scope: {0}")]
    InvalidWitnessScope(String),
}

impl PrimitiveError {
    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Result alias for primitive operations.
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
