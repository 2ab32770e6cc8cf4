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

//! # Neo NFT Primitives
//!
//! Fundamental value types shared by every crate of the ASCII NFT client:
//! - `UInt160`: 160-bit script hashes (contracts, accounts)
//! - `UInt256`: 256-bit transaction and block hashes
//! - `WitnessScope`: the scope flags attached to a transaction signer
//!
//! ## Example
//!
//! ```rust
//! use neo_nft_primitives::{UInt160, UInt256};
//!
//! let hash = UInt256::zero();
//! assert!(hash.is_zero());
//!
//! let contract = UInt160::parse("0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b").unwrap();
//! assert_eq!(contract.to_string(), "0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b");
//! ```

pub mod constants;
pub mod error;
pub mod uint160;
pub mod uint256;
pub mod witness_scope;

pub use constants::*;
pub use error::{PrimitiveError, PrimitiveResult};
pub use uint160::{UInt160, UINT160_SIZE};
pub use uint256::{UInt256, UINT256_SIZE};
pub use witness_scope::WitnessScope;
