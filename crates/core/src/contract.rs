// Copyright (C) 2015-2025 The Neo Project.
//
// contract.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Single-signature account contracts.

use crate::witness::Witness;
use neo_nft_crypto::{PublicKey, COMPRESSED_KEY_SIZE, ECC256_SIGN_SIZE};
use neo_nft_primitives::UInt160;
use neo_nft_vm::{ScriptBuilder, SYSTEM_CRYPTO_CHECK_SIG};

/// Execution price of `PUSHDATA1`, before the exec fee factor.
const PUSHDATA1_PRICE: i64 = 1 << 3;

/// Execution price of `System.Crypto.CheckSig`, before the exec fee factor.
const CHECK_SIG_PRICE: i64 = 1 << 15;

pub struct Contract;

impl Contract {
    /// Length of a signature verification script.
    pub const SIGNATURE_VERIFICATION_SIZE: usize = 40;

    /// Length of a signature invocation script.
    pub const SIGNATURE_INVOCATION_SIZE: usize = 2 + ECC256_SIGN_SIZE;

    /// Execution cost of verifying one signature witness, before the exec fee factor.
    pub const SIGNATURE_VERIFICATION_COST: i64 = PUSHDATA1_PRICE * 2 + CHECK_SIG_PRICE;

    /// `PUSHDATA1 <compressed key> SYSCALL System.Crypto.CheckSig`.
    pub fn create_signature_redeem_script(public_key: &PublicKey) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder
            .emit_push(&public_key.to_compressed())
            .emit_syscall(SYSTEM_CRYPTO_CHECK_SIG);
        builder.into_bytes()
    }

    /// `PUSHDATA1 <signature>`.
    pub fn create_signature_invocation(signature: &[u8; ECC256_SIGN_SIZE]) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push(signature);
        builder.into_bytes()
    }

    /// Account script hash of a single-signature key.
    pub fn signature_script_hash(public_key: &PublicKey) -> UInt160 {
        UInt160::from_script(&Self::create_signature_redeem_script(public_key))
    }

    /// Zero-filled single-signature witness with the final sizes, used to
    /// size network fees before any key is involved.
    pub fn placeholder_witness() -> Witness {
        let mut verification = ScriptBuilder::new();
        verification
            .emit_push(&[0u8; COMPRESSED_KEY_SIZE])
            .emit_syscall(SYSTEM_CRYPTO_CHECK_SIG);
        Witness::new(
            Self::create_signature_invocation(&[0u8; ECC256_SIGN_SIZE]),
            verification.into_bytes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use neo_nft_crypto::KeyPair;
    use neo_nft_primitives::ADDRESS_VERSION;

    const PUBLIC_KEY: [u8; 33] =
        hex!("035a928f201639204e06b4368b1a93365462a8ebbff0b8818151b74faab3a2b61a");

    #[test]
    fn redeem_script_layout() {
        let key = PublicKey::from_sec1_bytes(&PUBLIC_KEY).unwrap();
        let script = Contract::create_signature_redeem_script(&key);
        assert_eq!(script.len(), Contract::SIGNATURE_VERIFICATION_SIZE);
        assert_eq!(&script[..2], &[0x0C, 0x21]);
        assert_eq!(&script[2..35], &PUBLIC_KEY);
        assert_eq!(&script[35..], &hex!("4156e7b327"));
    }

    #[test]
    fn placeholder_matches_signed_sizes() {
        let pair = KeyPair::generate(&mut rand::rngs::OsRng);
        let witness = Contract::placeholder_witness();
        assert_eq!(witness.invocation_script.len(), Contract::SIGNATURE_INVOCATION_SIZE);
        assert_eq!(witness.invocation_script[..2], [0x0C, 0x40]);
        let real = Contract::create_signature_redeem_script(pair.public_key());
        assert_eq!(witness.verification_script.len(), real.len());
    }

    #[test]
    fn script_hash_yields_n3_address() {
        let key = PublicKey::from_sec1_bytes(&PUBLIC_KEY).unwrap();
        let address = Contract::signature_script_hash(&key).to_address(ADDRESS_VERSION);
        assert!(address.starts_with('N'));
        assert_eq!(address.len(), 34);
    }

    #[test]
    fn verification_cost_constant() {
        assert_eq!(Contract::SIGNATURE_VERIFICATION_COST, 32784);
    }
}
