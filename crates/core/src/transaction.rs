// Copyright (C) 2015-2025 The Neo Project.
//
// transaction.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The Neo N3 transaction.

use crate::error::{CoreError, CoreResult};
use crate::signers::Signers;
use crate::witness::Witness;
use neo_nft_crypto::Crypto;
use neo_nft_io::{helper, BinaryWriter, IoError, IoResult, Serializable};
use neo_nft_primitives::UInt256;

/// Maximum size of a transaction in bytes.
pub const MAX_TRANSACTION_SIZE: usize = 102400;

/// The size of a transaction header in bytes.
pub const HEADER_SIZE: usize = 1 +  // Version (byte)
    4 +  // Nonce (uint32)
    8 +  // SystemFee (int64)
    8 +  // NetworkFee (int64)
    4; // ValidUntilBlock (uint32)

/// A Neo N3 transaction.
///
/// Witnesses cover the exact unsigned bytes, so every setter that changes
/// those bytes drops the witnesses attached so far. Attributes are always
/// empty for this client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    version: u8,
    nonce: u32,
    /// In datoshi, 1 datoshi = 1e-8 GAS.
    system_fee: i64,
    /// In datoshi, 1 datoshi = 1e-8 GAS.
    network_fee: i64,
    valid_until_block: u32,
    signers: Signers,
    script: Vec<u8>,
    witnesses: Vec<Witness>,
}

impl Transaction {
    pub fn new(script: Vec<u8>, signers: Signers) -> CoreResult<Self> {
        if script.is_empty() {
            return Err(CoreError::EmptyScript);
        }
        Ok(Self {
            version: 0,
            nonce: 0,
            system_fee: 0,
            network_fee: 0,
            valid_until_block: 0,
            signers,
            script,
            witnesses: Vec::new(),
        })
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    pub fn set_nonce(&mut self, value: u32) {
        self.nonce = value;
        self.witnesses.clear();
    }

    pub fn system_fee(&self) -> i64 {
        self.system_fee
    }

    pub fn set_system_fee(&mut self, value: i64) {
        self.system_fee = value;
        self.witnesses.clear();
    }

    pub fn network_fee(&self) -> i64 {
        self.network_fee
    }

    pub fn set_network_fee(&mut self, value: i64) {
        self.network_fee = value;
        self.witnesses.clear();
    }

    pub fn valid_until_block(&self) -> u32 {
        self.valid_until_block
    }

    pub fn set_valid_until_block(&mut self, value: u32) {
        self.valid_until_block = value;
        self.witnesses.clear();
    }

    pub fn signers(&self) -> &Signers {
        &self.signers
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn set_script(&mut self, script: Vec<u8>) -> CoreResult<()> {
        if script.is_empty() {
            return Err(CoreError::EmptyScript);
        }
        self.script = script;
        self.witnesses.clear();
        Ok(())
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    /// Replaces all witnesses; they must be in signer order.
    pub fn set_witnesses(&mut self, witnesses: Vec<Witness>) {
        self.witnesses = witnesses;
    }

    /// True once every signer has a witness attached.
    pub fn is_fully_witnessed(&self) -> bool {
        self.witnesses.len() == self.signers.len()
    }

    /// Size of the unsigned part.
    pub fn unsigned_size(&self) -> usize {
        HEADER_SIZE
            + self.signers.size()
            + helper::get_var_size(0)
            + helper::get_var_bytes_size(&self.script)
    }

    /// Writes everything but the witnesses.
    pub fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version);
        writer.write_u32(self.nonce);
        writer.write_i64(self.system_fee);
        writer.write_i64(self.network_fee);
        writer.write_u32(self.valid_until_block);
        self.signers.serialize(writer)?;
        // attributes
        writer.write_var_int(0);
        writer.write_var_bytes(&self.script);
        Ok(())
    }

    pub fn unsigned_bytes(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.unsigned_size());
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Content hash: `SHA256(unsigned bytes)`. This is the transaction id.
    pub fn hash(&self) -> IoResult<UInt256> {
        Ok(UInt256::from(Crypto::sha256(&self.unsigned_bytes()?)))
    }

    /// Bytes a witness signs: network magic (LE) followed by the hash.
    pub fn sign_data(&self, network: u32) -> IoResult<Vec<u8>> {
        let mut data = Vec::with_capacity(4 + UInt256::LENGTH);
        data.extend_from_slice(&network.to_le_bytes());
        data.extend_from_slice(self.hash()?.as_bytes());
        Ok(data)
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        self.unsigned_size() + helper::get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        let size = self.size();
        if size > MAX_TRANSACTION_SIZE {
            return Err(IoError::TooLarge {
                entity: "transaction",
                max: MAX_TRANSACTION_SIZE,
                actual: size,
            });
        }
        self.serialize_unsigned(writer)?;
        helper::serialize_array(&self.witnesses, self.signers.len(), "witnesses", writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::Signer;
    use neo_nft_io::SerializableExt;
    use neo_nft_primitives::UInt160;

    fn sample() -> Transaction {
        let signers = Signers::single(Signer::called_by_entry(UInt160::from([1u8; 20])));
        let mut tx = Transaction::new(vec![0x40], signers).unwrap();
        tx.set_nonce(0x0102_0304);
        tx.set_system_fee(100);
        tx.set_network_fee(200);
        tx.set_valid_until_block(300);
        tx
    }

    #[test]
    fn empty_script_is_rejected() {
        let signers = Signers::single(Signer::called_by_entry(UInt160::zero()));
        assert_eq!(
            Transaction::new(Vec::new(), signers).unwrap_err(),
            CoreError::EmptyScript
        );
    }

    #[test]
    fn unsigned_layout() {
        let tx = sample();
        let bytes = tx.unsigned_bytes().unwrap();
        assert_eq!(bytes.len(), tx.unsigned_size());
        assert_eq!(bytes[0], 0);
        assert_eq!(&bytes[1..5], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&bytes[5..13], &100i64.to_le_bytes());
        assert_eq!(&bytes[13..21], &200i64.to_le_bytes());
        assert_eq!(&bytes[21..25], &300u32.to_le_bytes());
        // one signer, 20 byte account, CalledByEntry
        assert_eq!(bytes[25], 1);
        assert_eq!(bytes[46], 0x01);
        // no attributes, one byte script
        assert_eq!(&bytes[47..], &[0x00, 0x01, 0x40]);
    }

    #[test]
    fn setters_clear_witnesses() {
        let mut tx = sample();
        tx.set_witnesses(vec![Witness::new(vec![1], vec![2])]);
        assert!(tx.is_fully_witnessed());
        tx.set_network_fee(201);
        assert!(tx.witnesses().is_empty());

        tx.set_witnesses(vec![Witness::new(vec![1], vec![2])]);
        tx.set_script(vec![0x11, 0x40]).unwrap();
        assert!(tx.witnesses().is_empty());
    }

    #[test]
    fn hash_ignores_witnesses() {
        let mut tx = sample();
        let before = tx.hash().unwrap();
        tx.set_witnesses(vec![Witness::new(vec![1; 66], vec![2; 40])]);
        assert_eq!(tx.hash().unwrap(), before);
    }

    #[test]
    fn sign_data_prefixes_network_magic() {
        let tx = sample();
        let data = tx.sign_data(860_833_102).unwrap();
        assert_eq!(&data[..4], &[0x4e, 0x45, 0x4f, 0x33]);
        assert_eq!(&data[4..], tx.hash().unwrap().as_bytes());
    }

    #[test]
    fn full_size_matches_serialization() {
        let mut tx = sample();
        tx.set_witnesses(vec![Witness::new(vec![0; 66], vec![0; 40])]);
        let bytes = tx.to_array().unwrap();
        assert_eq!(bytes.len(), tx.size());
    }

    #[test]
    fn oversized_transaction_is_rejected() {
        let signers = Signers::single(Signer::called_by_entry(UInt160::zero()));
        let tx = Transaction::new(vec![0u8; MAX_TRANSACTION_SIZE], signers).unwrap();
        assert!(matches!(tx.to_array(), Err(IoError::TooLarge { .. })));
    }
}
