// Copyright (C) 2015-2025 The Neo Project.
//
// stack_item.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Values returned by the node's VM.

use num_bigint::BigInt;

/// Largest integer the VM represents, in bytes.
pub const MAX_INTEGER_SIZE: usize = 32;

/// A value produced by a script execution.
///
/// `Map` keeps the entries in the order the node returned them; keys are
/// compared by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackItem {
    Boolean(bool),
    Integer(BigInt),
    ByteString(Vec<u8>),
    Array(Vec<StackItem>),
    Map(Vec<(StackItem, StackItem)>),
}

impl StackItem {
    pub fn byte_string(value: impl Into<Vec<u8>>) -> Self {
        Self::ByteString(value.into())
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::Integer(value.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::ByteString(_) => "ByteString",
            Self::Array(_) => "Array",
            Self::Map(_) => "Map",
        }
    }

    /// Converts to an integer the way the VM does: byte strings are signed
    /// little-endian (empty is zero), booleans are 0 or 1. Containers and
    /// byte strings wider than 32 bytes have no integer value.
    pub fn as_integer(&self) -> Option<BigInt> {
        match self {
            Self::Integer(value) => Some(value.clone()),
            Self::Boolean(flag) => Some(BigInt::from(u8::from(*flag))),
            Self::ByteString(bytes) if bytes.len() <= MAX_INTEGER_SIZE => {
                Some(BigInt::from_signed_bytes_le(bytes))
            }
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::ByteString(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// UTF-8 view of a byte string.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}
