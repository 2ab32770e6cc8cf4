// Copyright (C) 2015-2025 The Neo Project.
//
// constants.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Protocol-level size and version constants.

/// Size of a script hash in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Size of a transaction or block hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Default address version byte of Neo N3 networks.
pub const ADDRESS_VERSION: u8 = 0x35;

/// Length of a Base58Check checksum.
pub const CHECKSUM_SIZE: usize = 4;
