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

//! # Neo NFT Core
//!
//! Transaction model for the ASCII NFT client: signers and their scopes,
//! witnesses, the Neo N3 transaction layout, and helpers for
//! single-signature accounts and native contract hashes.

pub mod contract;
pub mod error;
pub mod native_contract;
pub mod signer;
pub mod signers;
pub mod transaction;
pub mod witness;
pub mod witness_rule;

pub use contract::Contract;
pub use error::{CoreError, CoreResult};
pub use native_contract::PolicyContract;
pub use signer::Signer;
pub use signers::{Signers, MAX_SIGNERS};
pub use transaction::{Transaction, HEADER_SIZE, MAX_TRANSACTION_SIZE};
pub use witness::Witness;
pub use witness_rule::{WitnessCondition, WitnessRule, WitnessRuleAction};

pub use neo_nft_primitives::{UInt160, UInt256, WitnessScope};
