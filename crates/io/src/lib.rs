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

//! Binary writer and serialization trait for Neo N3 wire formats.
//!
//! The client only ever produces wire bytes (transactions, scripts), so this
//! crate has no reader side.

mod binary_writer;
mod error;
pub mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use serializable::{helper, Serializable, SerializableExt};
