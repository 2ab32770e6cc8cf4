// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_manager_factory.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::mint_error::{MintError, MintResult, Stage};
use crate::node_client::NodeClient;
use crate::policy_api::{FeeRates, PolicyApi};
use crate::transaction_manager::TransactionManager;
use neo_nft_config::ProtocolSettings;
use neo_nft_core::{Contract, Signers, Transaction, MAX_TRANSACTION_SIZE};
use neo_nft_io::{IoError, Serializable};
use std::sync::Arc;
use tracing::debug;

/// Network fee of `tx` once every signer carries a single-signature
/// witness: the size part plus one signature check per signer.
pub fn calculate_network_fee(tx: &Transaction, rates: FeeRates) -> i64 {
    let mut sized = tx.clone();
    sized.set_witnesses(vec![Contract::placeholder_witness(); tx.signers().len()]);
    let size = sized.size() as i64;
    let verification =
        rates.exec_fee_factor * Contract::SIGNATURE_VERIFICATION_COST * tx.signers().len() as i64;
    rates.fee_per_byte * size + verification
}

/// Assembles unsigned transactions priced against the node.
pub struct TransactionManagerFactory<C> {
    client: Arc<C>,
    protocol: ProtocolSettings,
}

impl<C: NodeClient> TransactionManagerFactory<C> {
    pub fn new(client: Arc<C>, protocol: ProtocolSettings) -> Self {
        Self { client, protocol }
    }

    /// Builds the transaction for `script`: random nonce, validity window
    /// from the current height, system fee from a dry run and network fee
    /// from the policy rates. Nothing is broadcast.
    pub async fn make_transaction(
        &self,
        script: Vec<u8>,
        signers: Signers,
    ) -> MintResult<TransactionManager> {
        let mut tx = Transaction::new(script, signers)?;
        tx.set_nonce(rand::random());

        let block_count = self
            .client
            .get_block_count()
            .await
            .map_err(|e| MintError::rpc(Stage::Assemble, e))?;
        tx.set_valid_until_block(
            block_count
                .saturating_sub(1)
                .saturating_add(self.protocol.max_valid_until_block_increment),
        );

        let dry_run = self
            .client
            .invoke_script(tx.script(), tx.signers().as_slice())
            .await
            .map_err(|e| MintError::FeeEstimationFailed(e.to_string()))?;
        if let Some(message) = dry_run.fault_message() {
            return Err(MintError::FeeEstimationFailed(message.to_string()));
        }
        if dry_run.state.is_fault() {
            return Err(MintError::FeeEstimationFailed(format!(
                "dry run ended in {}",
                dry_run.state
            )));
        }
        tx.set_system_fee(dry_run.gas_consumed);

        let rates = PolicyApi::new(self.client.clone())
            .get_fee_rates()
            .await
            .map_err(|e| MintError::rpc(Stage::Assemble, e))?;
        tx.set_network_fee(calculate_network_fee(&tx, rates));

        let size = tx.size() + tx.signers().len() * Contract::placeholder_witness().size();
        if size > MAX_TRANSACTION_SIZE {
            return Err(MintError::encoding(
                Stage::Assemble,
                IoError::TooLarge {
                    entity: "transaction",
                    max: MAX_TRANSACTION_SIZE,
                    actual: size,
                },
            ));
        }

        debug!(
            target: "neo",
            valid_until_block = tx.valid_until_block(),
            system_fee = tx.system_fee(),
            network_fee = tx.network_fee(),
            "assembled transaction"
        );
        Ok(TransactionManager::new(tx, self.protocol.network))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientRpcError;
    use crate::test_node::TestNode;
    use neo_nft_core::Signer;
    use neo_nft_primitives::UInt160;
    use neo_nft_vm::{StackItem, VMState};

    fn signers() -> Signers {
        Signers::single(Signer::called_by_entry(UInt160::from([9u8; 20])))
    }

    fn node_with_rates(dry_run: crate::models::RpcInvokeResult) -> Arc<TestNode> {
        let node = Arc::new(TestNode::default());
        node.set_block_count(1_000);
        node.push_invoke(dry_run);
        node.push_invoke(TestNode::halt(0, vec![StackItem::integer(1000)]));
        node.push_invoke(TestNode::halt(0, vec![StackItem::integer(30)]));
        node
    }

    #[test]
    fn network_fee_covers_size_and_verification() {
        let mut tx = Transaction::new(vec![0x40], signers()).unwrap();
        tx.set_valid_until_block(10);
        let rates = FeeRates {
            fee_per_byte: 1000,
            exec_fee_factor: 30,
        };
        // 25 header + 22 signers + 1 attributes + 2 script + 1 + 108 witness
        let size = 159i64;
        assert_eq!(calculate_network_fee(&tx, rates), 1000 * size + 30 * 32_784);
    }

    #[tokio::test]
    async fn fills_fees_and_validity_window() {
        let node = node_with_rates(TestNode::halt(997_770, vec![]));
        let factory = TransactionManagerFactory::new(node.clone(), ProtocolSettings::default());
        let manager = factory
            .make_transaction(vec![0x11, 0x40], signers())
            .await
            .unwrap();

        let tx = manager.tx();
        assert_eq!(tx.valid_until_block(), 999 + 5760);
        assert_eq!(tx.system_fee(), 997_770);
        let expected = calculate_network_fee(
            tx,
            FeeRates {
                fee_per_byte: 1000,
                exec_fee_factor: 30,
            },
        );
        assert_eq!(tx.network_fee(), expected);
        assert!(tx.witnesses().is_empty());
        assert_eq!(manager.network(), 860_833_102);
        // dry run plus two policy reads, nothing sent
        assert_eq!(node.invoked_scripts().len(), 3);
        assert!(node.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn faulted_dry_run_fails_estimation() {
        let node = node_with_rates(TestNode::fault("insufficient GAS"));
        let factory = TransactionManagerFactory::new(node, ProtocolSettings::default());
        let err = factory
            .make_transaction(vec![0x40], signers())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            MintError::FeeEstimationFailed("insufficient GAS".to_string())
        );
        assert_eq!(err.stage(), Stage::Assemble);
    }

    #[tokio::test]
    async fn fault_state_without_message_fails_estimation() {
        let mut dry_run = TestNode::halt(0, vec![]);
        dry_run.state = VMState::FAULT;
        let node = node_with_rates(dry_run);
        let factory = TransactionManagerFactory::new(node, ProtocolSettings::default());
        assert!(matches!(
            factory.make_transaction(vec![0x40], signers()).await,
            Err(MintError::FeeEstimationFailed(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_node_during_dry_run_fails_estimation() {
        let node = Arc::new(TestNode::default());
        node.set_block_count(1);
        node.push_invoke_error(ClientRpcError::Transport("connection refused".into()));
        let factory = TransactionManagerFactory::new(node, ProtocolSettings::default());
        assert!(matches!(
            factory.make_transaction(vec![0x40], signers()).await,
            Err(MintError::FeeEstimationFailed(_))
        ));
    }
}
