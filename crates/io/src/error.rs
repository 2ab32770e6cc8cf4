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

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("{entity} exceeds the maximum of {max} (got {actual})")]
    TooLarge {
        entity: &'static str,
        max: usize,
        actual: usize,
    },
}

impl IoError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }
}

pub type IoResult<T> = Result<T, IoError>;
