// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_manager.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::mint_error::{MintError, MintResult, Stage};
use neo_nft_core::{Contract, Transaction, Witness};
use neo_nft_crypto::{KeyPair, Secp256r1Sign};
use neo_nft_primitives::UInt160;
use tracing::debug;

/// A key registered for one signer account.
#[derive(Debug)]
struct SignItem {
    account: UInt160,
    key_pair: KeyPair,
}

/// Holds an assembled transaction and the keys that will witness it.
///
/// Signing is local: nothing here talks to the node.
#[derive(Debug)]
pub struct TransactionManager {
    tx: Transaction,
    network: u32,
    sign_store: Vec<SignItem>,
}

impl TransactionManager {
    pub fn new(tx: Transaction, network: u32) -> Self {
        Self {
            tx,
            network,
            sign_store: Vec::new(),
        }
    }

    /// The managed transaction
    pub fn tx(&self) -> &Transaction {
        &self.tx
    }

    pub fn network(&self) -> u32 {
        self.network
    }

    /// Registers a single-signature key. Its account must be one of the
    /// transaction's signers; registering the same key twice is a no-op.
    pub fn add_signature(&mut self, key: &KeyPair) -> MintResult<&mut Self> {
        let account = Contract::signature_script_hash(key.public_key());
        if !self.tx.signers().accounts().any(|signer| *signer == account) {
            return Err(MintError::UnexpectedSignerKey(account));
        }
        if !self.sign_store.iter().any(|item| item.account == account) {
            self.sign_store.push(SignItem {
                account,
                key_pair: key.clone(),
            });
        }
        Ok(self)
    }

    /// Signs `network magic || hash` once per signer and attaches the
    /// witnesses in signer order.
    pub fn sign(mut self) -> MintResult<Transaction> {
        let sign_data = self
            .tx
            .sign_data(self.network)
            .map_err(|e| MintError::encoding(Stage::Sign, e))?;

        let mut witnesses = Vec::with_capacity(self.tx.signers().len());
        for account in self.tx.signers().accounts() {
            let item = self
                .sign_store
                .iter()
                .find(|item| item.account == *account)
                .ok_or(MintError::MissingSignerKey(*account))?;
            let signature = item.key_pair.secp256r1_sign(&sign_data)?;
            witnesses.push(Witness::new(
                Contract::create_signature_invocation(&signature),
                Contract::create_signature_redeem_script(item.key_pair.public_key()),
            ));
        }

        debug!(target: "neo", witnesses = witnesses.len(), "signed transaction");
        self.tx.set_witnesses(witnesses);
        Ok(self.tx)
    }
}
