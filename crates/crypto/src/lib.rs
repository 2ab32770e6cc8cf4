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

//! # Neo NFT Crypto
//!
//! Cryptographic building blocks used to sign Neo N3 transactions:
//! - [`Crypto`]: SHA-256 and RIPEMD-160 helpers
//! - [`PrivateKey`], [`PublicKey`], [`KeyPair`]: secp256r1 key material
//! - [`Secp256r1Sign`] / [`Secp256r1Verify`]: deterministic ECDSA over SHA-256
//! - WIF import and export for [`KeyPair`]

pub mod ecc256;
pub mod ecdsa;
pub mod hash;
pub mod wif;

pub use ecc256::{KeyError, KeyPair, PrivateKey, PublicKey, COMPRESSED_KEY_SIZE, KEY_SIZE};
pub use ecdsa::{Secp256r1Sign, Secp256r1Verify, SignError, VerifyError, ECC256_SIGN_SIZE};
pub use hash::Crypto;
pub use wif::{WifError, WIF_VERSION};
