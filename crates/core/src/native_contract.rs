// Copyright (C) 2015-2025 The Neo Project.
//
// native_contract.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Native contracts queried by the client.

use neo_nft_primitives::UInt160;

/// The native PolicyContract, source of the network fee rates.
pub struct PolicyContract;

impl PolicyContract {
    /// Script hash `0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b`, little-endian.
    const HASH_LE: [u8; 20] = [
        0x7b, 0xc6, 0x81, 0xc0, 0xa1, 0xf7, 0x1d, 0x54, 0x34, 0x57, 0xb6, 0x8b, 0xba, 0x8d, 0x5f,
        0x9f, 0xdd, 0x4e, 0x5e, 0xcc,
    ];

    pub const GET_FEE_PER_BYTE: &'static str = "getFeePerByte";
    pub const GET_EXEC_FEE_FACTOR: &'static str = "getExecFeeFactor";

    pub fn hash() -> UInt160 {
        UInt160::from(Self::HASH_LE)
    }
}
